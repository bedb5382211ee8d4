use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use segtree_driver::args::Args;
use segtree_driver::{DriverError, RunOptions, run};
use tracing_subscriber::EnvFilter;

fn read_input(args: &Args) -> Result<String, DriverError> {
    match &args.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = RunOptions { dump: args.dump };
    let result = read_input(&args).and_then(|input| {
        let stdout = io::stdout();
        let stderr = io::stderr();
        run(&input, &mut stdout.lock(), &mut stderr.lock(), options)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
