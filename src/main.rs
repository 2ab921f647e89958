use clap::{Args, Parser, Subcommand};
use mathform::convert::{convert_length, LengthUnit};
use mathform::format::{format_str, DEFAULT_PRECISION};
use mathform::geometry::{circle, cone, cuboid, cylinder, rectangle, sphere};
use mathform::helpers::is_greater_than_zero;
use mathform::rng::{generate_random_float, generate_random_integer, random_seed_with};
use mathform::{Lcg, LcgParams, MathError};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print successive values of a linear congruential generator
    Lcg(LcgArgs),

    /// Uniform integer in [MIN, MAX]
    #[command(allow_negative_numbers = true)]
    RandomInt { min: i64, max: i64 },

    /// Uniform float in [MIN, MAX)
    #[command(allow_negative_numbers = true)]
    RandomFloat { min: f64, max: f64 },

    /// Round a number to a fixed number of fractional digits
    #[command(allow_negative_numbers = true)]
    Format {
        value: String,

        /// Fractional digits, 0 to 100
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Convert a length between units (e.g. "m", "km", "nautical miles")
    #[command(allow_negative_numbers = true)]
    ConvertLength { value: f64, from: String, to: String },

    /// Measures of a figure
    #[command(subcommand)]
    Shape(Shape),
}

#[derive(Args)]
struct LcgArgs {
    /// Named parameter set: zx81, minstd, numerical-recipes, ansi-c
    #[arg(short = 'P', long, conflicts_with_all = ["modulus", "multiplier", "increment"])]
    preset: Option<String>,

    /// Modulus m; 0 means 2^64
    #[arg(short, long)]
    modulus: Option<u64>,

    /// Multiplier a
    #[arg(short = 'a', long)]
    multiplier: Option<u64>,

    /// Increment c
    #[arg(short = 'c', long)]
    increment: Option<u64>,

    /// Initial state; drawn at random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// How many values to print
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Reject parameters outside their documented ranges
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Subcommand)]
enum Shape {
    /// Area, circumference and diameter of a circle
    Circle {
        /// Radius
        radius: f64,
    },

    /// Area, perimeter and diagonal of a rectangle
    Rectangle {
        /// First side
        a: f64,
        /// Second side
        b: f64,
    },

    /// Slant height, surface areas and volume of a right circular cone
    Cone {
        /// Radius of the base
        radius: f64,
        /// Height from base to apex
        height: f64,
    },

    /// Surface areas and volume of a right circular cylinder
    Cylinder {
        /// Radius of the caps
        radius: f64,
        height: f64,
    },

    /// Surface area and volume of a sphere
    Sphere {
        /// Radius
        radius: f64,
    },

    /// Surface area, volume and space diagonal of a cuboid
    Cuboid {
        width: f64,
        height: f64,
        length: f64,
    },
}

fn resolve_params(args: &LcgArgs) -> Result<LcgParams, MathError> {
    if let Some(name) = &args.preset {
        return LcgParams::by_name(name).ok_or_else(|| MathError::UnknownPreset {
            name: name.clone(),
        });
    }

    Ok(LcgParams {
        modulus: args
            .modulus
            .ok_or(MathError::MissingParameter { name: "modulus" })?,
        multiplier: args
            .multiplier
            .ok_or(MathError::MissingParameter { name: "multiplier" })?,
        increment: args.increment.unwrap_or(0),
    })
}

fn run_lcg(args: &LcgArgs) -> Result<(), MathError> {
    let params = resolve_params(args)?;
    let seed = match args.seed {
        Some(seed) => seed,
        None => random_seed_with(&mut rand::thread_rng(), params.modulus),
    };

    let lcg = if args.strict {
        Lcg::try_new(params.modulus, params.multiplier, params.increment, seed)?
    } else {
        Lcg::from_params(params, seed)
    };
    log::info!(
        "LCG m={} a={} c={} seed={}",
        lcg.modulus(),
        lcg.multiplier(),
        lcg.increment(),
        lcg.seed()
    );
    // factoring a large prime modulus is slow, only pay for it when the
    // warning can be seen
    if log::log_enabled!(log::Level::Warn) && !params.has_full_period() {
        log::warn!("Parameters do not satisfy Hull–Dobell, period is shorter than the modulus");
    }

    for value in lcg.take(args.count) {
        println!("{value}");
    }
    Ok(())
}

fn print_measures(measures: &[(&str, f64)]) {
    for (name, value) in measures {
        println!("{name}: {value}");
    }
}

fn run_shape(shape: &Shape) -> Result<(), MathError> {
    match *shape {
        Shape::Circle { radius } => {
            is_greater_than_zero(radius, "Radius")?;
            print_measures(&[
                ("area", circle::area(radius)),
                ("circumference", circle::circumference(radius)),
                ("diameter", circle::diameter(radius)),
            ]);
        }
        Shape::Rectangle { a, b } => {
            is_greater_than_zero(a, "Side a")?;
            is_greater_than_zero(b, "Side b")?;
            print_measures(&[
                ("area", rectangle::area(a, b)),
                ("circumference", rectangle::circumference(a, b)),
                ("diagonal", rectangle::diagonal(a, b)),
            ]);
            println!("square: {}", rectangle::is_square(a, b));
        }
        Shape::Cone { radius, height } => {
            is_greater_than_zero(radius, "Radius")?;
            is_greater_than_zero(height, "Height")?;
            print_measures(&[
                ("slant height", cone::slant_height(radius, height)),
                ("lateral area", cone::lateral_area(radius, height)),
                ("total area", cone::total_area(radius, height)),
                ("volume", cone::volume(radius, height)),
            ]);
        }
        Shape::Cylinder { radius, height } => {
            is_greater_than_zero(radius, "Radius")?;
            is_greater_than_zero(height, "Height")?;
            print_measures(&[
                ("lateral area", cylinder::lateral_area(radius, height)),
                ("total area", cylinder::total_area(radius, height)),
                ("volume", cylinder::volume(radius, height)),
            ]);
        }
        Shape::Sphere { radius } => {
            is_greater_than_zero(radius, "Radius")?;
            print_measures(&[
                ("area", sphere::area(radius)),
                ("volume", sphere::volume(radius)),
            ]);
        }
        Shape::Cuboid {
            width,
            height,
            length,
        } => {
            is_greater_than_zero(width, "Width")?;
            is_greater_than_zero(height, "Height")?;
            is_greater_than_zero(length, "Length")?;
            print_measures(&[
                ("area", cuboid::area(width, height, length)),
                ("volume", cuboid::volume(width, height, length)),
                ("diagonal", cuboid::diagonal(width, height, length)),
            ]);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), MathError> {
    match cli.command {
        Command::Lcg(args) => run_lcg(&args)?,
        Command::RandomInt { min, max } => println!("{}", generate_random_integer(min, max)?),
        Command::RandomFloat { min, max } => println!("{}", generate_random_float(min, max)?),
        Command::Format { value, precision } => println!("{}", format_str(&value, precision)?),
        Command::ConvertLength { value, from, to } => {
            let from: LengthUnit = from.parse()?;
            let to: LengthUnit = to.parse()?;
            log::debug!("Converting {} {} to {}", value, from, to);
            println!("{} {}", convert_length(value, from, to), to);
        }
        Command::Shape(shape) => run_shape(&shape)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
