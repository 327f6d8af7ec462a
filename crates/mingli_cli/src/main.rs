use clap::{Parser, Subcommand};
use serde_json::json;

use mingli_rs::cycle::StemBranch;
use mingli_rs::yijing::EntropyPool;
use mingli_rs::{
    BirthInput, DivinationInput, GenderInput, MethodInput, bazi_chart, cast_hexagram, ziwei_chart,
};

#[derive(Parser)]
#[command(name = "mingli", about = "Mingli chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars (BaZi) chart with element strength and decade luck
    Bazi {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, noon assumed when omitted)
        #[arg(long)]
        time: Option<String>,
        /// Gender: male or female (enables decade luck)
        #[arg(long)]
        gender: Option<String>,
        /// Birth longitude in degrees east; enables true-solar-time correction
        #[arg(long)]
        longitude: Option<f64>,
    },
    /// Purple-Star (Ziwei Doushu) chart
    Ziwei {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, noon assumed when omitted)
        #[arg(long)]
        time: Option<String>,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Birth longitude in degrees east; enables true-solar-time correction
        #[arg(long)]
        longitude: Option<f64>,
    },
    /// Cast a hexagram for a question
    Yijing {
        /// Question text (2-200 characters)
        #[arg(long)]
        question: String,
        /// Method: coin, time, number, plum_blossom, personalized
        #[arg(long, default_value = "personalized")]
        method: String,
        /// Local timestamp (YYYY-MM-DD HH:MM); current clock when omitted
        #[arg(long)]
        time: Option<String>,
        /// Caller identity folded into the cast
        #[arg(long)]
        user: Option<String>,
    },
    /// The 24 solar terms of a year
    SolarTerms {
        /// Gregorian year (1800-2099)
        #[arg(long)]
        year: i32,
    },
    /// Stem-branch pair at a sexagenary cycle index
    Cycle {
        /// Cycle index (0-59, 0 = Jiazi)
        #[arg(long)]
        index: u8,
    },
}

fn parse_gender(s: &str) -> GenderInput {
    match s.to_lowercase().as_str() {
        "male" | "m" => GenderInput::Male,
        "female" | "f" => GenderInput::Female,
        _ => {
            eprintln!("Invalid gender: {s}");
            eprintln!("Valid: male, female");
            std::process::exit(1);
        }
    }
}

fn parse_method(s: &str) -> MethodInput {
    match s.to_lowercase().as_str() {
        "coin" => MethodInput::Coin,
        "time" => MethodInput::Time,
        "number" => MethodInput::Number,
        "plum_blossom" | "plum-blossom" => MethodInput::PlumBlossom,
        "personalized" => MethodInput::Personalized,
        _ => {
            eprintln!("Invalid method: {s}");
            eprintln!("Valid: coin, time, number, plum_blossom, personalized");
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Serialization failed: {e}");
            std::process::exit(1);
        }
    }
}

fn birth_input(
    date: String,
    time: Option<String>,
    gender: Option<GenderInput>,
    longitude: Option<f64>,
) -> BirthInput {
    BirthInput {
        name: None,
        birth_date: date,
        birth_time: time,
        gender,
        birth_place: None,
        longitude,
        latitude: None,
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bazi {
            date,
            time,
            gender,
            longitude,
        } => {
            let input = birth_input(date, time, gender.as_deref().map(parse_gender), longitude);
            match bazi_chart(&input) {
                Ok(report) => print_json(&report),
                Err(e) => {
                    eprintln!("bazi failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Ziwei {
            date,
            time,
            gender,
            longitude,
        } => {
            let input = birth_input(date, time, Some(parse_gender(&gender)), longitude);
            match ziwei_chart(&input) {
                Ok(chart) => print_json(&chart),
                Err(e) => {
                    eprintln!("ziwei failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Yijing {
            question,
            method,
            time,
            user,
        } => {
            let input = DivinationInput {
                question,
                user_id: user,
                divination_method: Some(parse_method(&method)),
                local_time: time,
            };
            let pool = EntropyPool::new();
            match cast_hexagram(&input, &pool) {
                Ok(report) => print_json(&report),
                Err(e) => {
                    eprintln!("yijing failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::SolarTerms { year } => match mingli_rs::almanac::year_solar_terms(year) {
            Ok(terms) => print_json(&terms),
            Err(e) => {
                eprintln!("solar-terms failed: {e}");
                std::process::exit(1);
            }
        },
        Commands::Cycle { index } => match StemBranch::from_cycle_index(index) {
            Ok(sb) => print_json(&json!({
                "index": index,
                "name": sb.name(),
                "hanzi": sb.hanzi(),
                "stem": sb.stem.name(),
                "branch": sb.branch.name(),
                "element": sb.stem.element().name(),
                "animal": sb.branch.animal(),
            })),
            Err(e) => {
                eprintln!("cycle failed: {e}");
                std::process::exit(1);
            }
        },
    }
}
