use std::io::{self, Write};
use std::process;

use anyhow::Context as _;
use clap::Parser;
use console::style;
use rustkube::ConfigSet;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod emit;
mod env;
mod error;
mod shell_init;

use cli::{Cli, InvocationMode};
use emit::{emit, Outcome};
use env::Env;

fn init_logging() {
    // stdout is eval'd by the shell wrapper, so logs only ever go to stderr.
    let filter = EnvFilter::try_from_env("KCONTEXT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(mode: InvocationMode, env: &Env) -> anyhow::Result<i32> {
    debug!(?mode, "selected mode");

    // Version and init never look at the filesystem.
    let configs = match &mode {
        InvocationMode::ShowVersion | InvocationMode::InitShell(_) => ConfigSet::default(),
        _ => ConfigSet::discover(env.home()),
    };

    let Outcome {
        stdout,
        stderr,
        code,
    } = emit(mode, &configs, env.home());

    let mut out = io::stdout().lock();
    out.write_all(stdout.as_bytes())
        .and_then(|()| out.flush())
        .context("Writing to stdout")?;

    let mut err = io::stderr().lock();
    err.write_all(stderr.as_bytes())
        .and_then(|()| err.flush())
        .context("Writing to stderr")?;

    Ok(code)
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let code = match run(cli.mode(), &Env::from_process()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().for_stderr());
            1
        }
    };

    process::exit(code);
}
