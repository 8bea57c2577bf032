use clap::Args;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use fetchgen_core::{Operation, generate, load_operations_from_path};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// JSON file holding an array of operation descriptors
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Write the generated module here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Replace the server base URL of every operation
    #[arg(long = "server", value_name = "URL")]
    pub server: Option<String>,
}

pub fn run(args: &GenerateArgs) -> i32 {
    match generate_client(args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn generate_client(args: &GenerateArgs) -> Result<(), String> {
    let mut operations = load_operations_from_path(&args.input).map_err(|e| {
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            let _ = write!(message, ": {cause}");
            source = cause.source();
        }
        message
    })?;
    debug!(
        input = %args.input.display(),
        operations = operations.len(),
        "Loaded operation descriptors."
    );

    if let Some(server) = &args.server {
        override_server(&mut operations, server);
    }

    let code = generate(&operations);

    match &args.output {
        Some(path) => write_output(path, &code),
        None => {
            print!("{code}");
            Ok(())
        }
    }
}

fn override_server(operations: &mut [Operation], server: &str) {
    for op in operations {
        op.server = server.to_string();
    }
}

fn write_output(path: &Path, code: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    std::fs::write(path, code).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    info!(output = %path.display(), "Wrote TypeScript client.");
    Ok(())
}
