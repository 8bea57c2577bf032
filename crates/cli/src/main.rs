//! `fetchgen` command line: reads operation descriptors and writes the
//! generated TypeScript client.

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Parser)]
#[command(
    name = "fetchgen",
    version,
    about = "Generate a TypeScript fetch client from REST operation descriptors"
)]
struct Cli {
    #[command(flatten)]
    args: generate::GenerateArgs,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    std::process::exit(generate::run(&cli.args));
}

fn init_tracing() {
    // FETCHGEN_LOG is either a plain level ("debug") applied to our crates
    // or a full tracing filter spec like "fetchgen_core=trace"
    let filter = match std::env::var("FETCHGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("fetchgen={level},fetchgen_core={level}")
        }
        Ok(spec) => spec,
        Err(_) => "fetchgen=info,fetchgen_core=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
