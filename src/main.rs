use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tapefat::estimator::{self, Measurements, Sex};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive calculator (default if no subcommand)
    Interactive,
    /// Calculate once from command-line measurements (inches)
    Calc {
        /// man (m) or woman (w)
        #[arg(short, long, value_parser = parse_sex)]
        sex: Sex,
        /// Neck circumference in inches
        #[arg(long, allow_negative_numbers = true)]
        neck: f64,
        /// Waist circumference in inches
        #[arg(long, allow_negative_numbers = true)]
        waist: f64,
        /// Hip circumference in inches (women only)
        #[arg(long, allow_negative_numbers = true)]
        hip: Option<f64>,
        /// Height in inches
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },
    /// Print sample measurements and the equations used
    Samples,
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "tapefat")]
#[command(about = "Body fat percentage calculator (AR 600-9 tape method)", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/tapefat/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_sex(s: &str) -> Result<Sex, String> {
    s.parse()
}

fn load_config_or_exit(path: Option<PathBuf>) -> tapefat::config::Config {
    match tapefat::config::load_config(path) {
        Ok(c) => {
            log::debug!("Using config: {:?}", c);
            c
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Err(e) = tapefat::logging::init(cli.verbose) {
        eprintln!("Logging setup failed: {:#}", e);
    }

    let config_path = cli.config.map(PathBuf::from);

    match command {
        Commands::Interactive => {
            let config = load_config_or_exit(config_path);
            let stdin = std::io::stdin();
            let mut session =
                tapefat::cli::Session::from_config(stdin.lock(), std::io::stdout(), &config);
            if let Err(e) = session.run() {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_INVALID);
            }
        }
        Commands::Calc {
            sex,
            neck,
            waist,
            hip,
            height,
        } => {
            let config = load_config_or_exit(config_path);
            let measurements = match (sex, hip) {
                (Sex::Woman, Some(hip)) => Measurements::Woman {
                    neck,
                    waist,
                    hip,
                    height,
                },
                (Sex::Woman, None) => {
                    eprintln!("--hip is required for women");
                    std::process::exit(EXIT_INVALID);
                }
                (Sex::Man, hip) => {
                    if hip.is_some() {
                        log::warn!("--hip is not used in the equation for men; ignoring it");
                    }
                    Measurements::Man {
                        neck,
                        waist,
                        height,
                    }
                }
            };

            let result = estimator::estimate(&measurements);
            let line = tapefat::output::format_estimate(
                measurements.sex(),
                &result,
                config.color.use_colors(),
            );
            match result {
                Ok(_) => println!("{}", line),
                Err(_) => {
                    eprintln!("{}", line);
                    std::process::exit(EXIT_INVALID);
                }
            }
        }
        Commands::Samples => {
            let config = load_config_or_exit(config_path);
            println!("{}", tapefat::output::format_samples(config.color.use_colors()));
        }
        Commands::Init => {
            let path = match config_path {
                Some(p) => p,
                None => match tapefat::config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {:#}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            if let Err(e) = tapefat::config::run_init_wizard(&mut input, &mut output, &path) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
