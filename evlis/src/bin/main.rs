use std::env;
use std::process;
use std::sync::Once;

use evlis::{EvalConfig, Evaluator, Scoping, samples};
use sapling::{Environment, render};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=evlis=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  sapling                    Evaluate the sample programs");
    eprintln!("  sapling --dynamic-scope    Fold caller bindings into closures");
    eprintln!("  sapling --max-depth <n>    Limit evaluation nesting depth");
    eprintln!("  sapling --help             Show this help message");
}

fn parse_args(args: &[String]) -> Result<EvalConfig, String> {
    let mut config = EvalConfig::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dynamic-scope" => config = config.with_scoping(Scoping::CallerMerge),
            "--max-depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--max-depth requires a value".to_string())?;
                let depth = value
                    .parse::<usize>()
                    .map_err(|e| format!("invalid --max-depth '{value}': {e}"))?;
                config = config.with_max_depth(depth);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(config)
}

fn run(config: EvalConfig) -> bool {
    let mut evaluator = Evaluator::new(config);
    let mut ok = true;

    for program in samples::all() {
        match evaluator.eval(&program, &Environment::new()) {
            Ok(result) => println!("{} => {}", render(&program), render(&result)),
            Err(e) => {
                eprintln!("{} => error: {e}", render(&program));
                ok = false;
            }
        }
    }

    ok
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };

    if !run(config) {
        process::exit(1);
    }
}
