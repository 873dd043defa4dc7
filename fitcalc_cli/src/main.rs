use clap::{Parser, Subcommand};
use fitcalc_core::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(
    about = "Maintenance calorie, body fat and workout split calculators",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate BMR, maintenance calories and fat-loss / muscle-gain targets
    Tdee {
        /// Age in years (15-100)
        #[arg(long)]
        age: u32,

        /// male or female
        #[arg(long)]
        sex: Option<Sex>,

        /// Height in cm (metric) or inches (imperial)
        #[arg(long)]
        height: f64,

        /// Weight in kg (metric) or lbs (imperial)
        #[arg(long)]
        weight: f64,

        /// sedentary, light, moderate, active, very-active
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// metric or imperial
        #[arg(long)]
        units: Option<UnitSystem>,
    },

    /// Estimate body fat percentage with the U.S. Navy method
    Bodyfat {
        /// male or female
        #[arg(long)]
        sex: Option<Sex>,

        /// Height in cm (metric) or inches (imperial)
        #[arg(long)]
        height: f64,

        /// Weight in kg (metric) or lbs (imperial)
        #[arg(long)]
        weight: Option<f64>,

        /// Waist circumference
        #[arg(long)]
        waist: f64,

        /// Neck circumference
        #[arg(long)]
        neck: f64,

        /// Hip circumference (required for females)
        #[arg(long)]
        hip: Option<f64>,

        /// Visible abdominal definition
        #[arg(long)]
        visible_abs: bool,

        /// metric or imperial
        #[arg(long)]
        units: Option<UnitSystem>,
    },

    /// Generate a weekly workout split
    Split {
        /// beginner or intermediate
        #[arg(long, default_value = "beginner")]
        experience: Experience,

        /// fat-loss, muscle-gain or general-health
        #[arg(long, default_value = "fat-loss")]
        goal: Goal,

        /// overall, upper-body or lower-body
        #[arg(long, default_value = "overall")]
        target: Target,

        /// Training days per week (2-6)
        #[arg(long, default_value_t = 3)]
        days: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fitcalc_core::logging::init(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let json = cli.json || config.output.json;

    match cli.command {
        Commands::Tdee {
            age,
            sex,
            height,
            weight,
            activity,
            units,
        } => {
            let input = EnergyInput {
                age,
                sex: resolve_sex(sex, &config)?,
                unit_system: units.unwrap_or(config.defaults.unit_system),
                height,
                weight,
                activity_level: activity.unwrap_or(config.defaults.activity_level),
            };
            cmd_tdee(&input, json)
        }
        Commands::Bodyfat {
            sex,
            height,
            weight,
            waist,
            neck,
            hip,
            visible_abs,
            units,
        } => {
            let input = AnthropometricInput {
                sex: resolve_sex(sex, &config)?,
                unit_system: units.unwrap_or(config.defaults.unit_system),
                height,
                weight,
                waist,
                neck,
                hip,
                visible_abs,
            };
            cmd_bodyfat(&input, json)
        }
        Commands::Split {
            experience,
            goal,
            target,
            days,
        } => {
            let input = SplitInput {
                experience,
                goal,
                target,
                days_per_week: days,
            };
            cmd_split(&input, json)
        }
    }
}

fn resolve_sex(sex: Option<Sex>, config: &Config) -> Result<Sex> {
    sex.or(config.defaults.sex).ok_or_else(|| {
        Error::invalid("--sex is required (or set defaults.sex in the config file)")
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_tdee(input: &EnergyInput, json: bool) -> Result<()> {
    let result = compute_energy(input)?;
    tracing::debug!("Energy result: {:?}", result);

    if json {
        return print_json(&result);
    }

    let units = input.unit_system;
    print_header("MAINTENANCE CALORIES");
    println!(
        "  Inputs: age {}, {}, {} {}, {} {}",
        input.age,
        input.sex,
        input.height,
        units.length_unit(),
        input.weight,
        units.mass_unit()
    );
    println!("  Activity: {}", input.activity_level.description());
    println!();
    println!("  BMR:                {} calories/day", result.bmr);
    println!("  Maintenance (TDEE): {} calories/day", result.tdee);
    println!(
        "  Fat loss target:    {} calories/day (15% deficit)",
        result.fat_loss_target
    );
    println!(
        "  Muscle gain target: {} calories/day (15% surplus)",
        result.muscle_gain_target
    );
    print_note(energy::NOTE);
    Ok(())
}

fn cmd_bodyfat(input: &AnthropometricInput, json: bool) -> Result<()> {
    let result = compute_body_fat(input)?;
    tracing::debug!("Body fat result: {:?}", result);

    if json {
        return print_json(&result);
    }

    let length = input.unit_system.length_unit();
    print_header("BODY FAT ESTIMATE");
    print!(
        "  Measurements: height {h} {u}, waist {w} {u}, neck {n} {u}",
        h = input.height,
        w = input.waist,
        n = input.neck,
        u = length
    );
    if let Some(hip) = input.hip {
        print!(", hip {} {}", hip, length);
    }
    println!();
    println!("  Estimated body fat: {:.1}%", result.percentage);
    println!("  Category: {}", result.category);
    if result.adjusted {
        println!("  (adjusted for visible abdominal definition)");
    }
    println!();
    println!(
        "  Body fat categories for {}:",
        match input.sex {
            Sex::Male => "men",
            Sex::Female => "women",
        }
    );
    for band in body_fat::category_table(input.sex) {
        let marker = if band.category == result.category { "→" } else { " " };
        println!(
            "  {} {:<14} {:<7} {}",
            marker,
            band.category.label(),
            band.range,
            band.description
        );
    }
    print_note(body_fat::NOTE);
    Ok(())
}

fn cmd_split(input: &SplitInput, json: bool) -> Result<()> {
    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let plan = split::select_split_with(catalog, input)?;
    tracing::debug!("Split plan: {}", plan.title);

    if json {
        return print_json(&plan);
    }

    print_header(&plan.title);
    println!("  {}", plan.summary);
    println!();
    println!("  Weekly schedule");
    for day in &plan.schedule {
        println!("  {:<10} {}", day.day, day.label());
    }
    println!();
    println!("  Sample exercises");
    for block in &plan.exercise_sets {
        println!();
        println!("  {}", block.name);
        for exercise in &block.exercises {
            println!("    → {}", exercise);
        }
    }
    print_note(split::NOTE);
    Ok(())
}

fn print_header(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn print_note(note: &str) {
    println!();
    println!("  ℹ {}", note);
    println!();
}
