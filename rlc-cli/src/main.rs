//! RLC - Calculadora de circuitos ressonantes
//! Interface interativa de linha de comando

use std::io;

use clap::Parser;
use colored::*;
use rlc_core::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Variável de ambiente com o filtro de log
const LOG_ENV: &str = "RLC_LOG";

#[derive(Parser)]
#[command(name = "rlc")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.1.16")]
#[command(about = "Interactive calculator for resonant RLC circuits", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs vão para stderr para não misturar com o menu em stdout
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> anyhow::Result<()> {
    println!("{}", "Calculateur de circuit RLC résonant".cyan().bold());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    tracing::debug!(state = ?session.state(), "session finished");
    Ok(())
}
