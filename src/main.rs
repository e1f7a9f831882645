// SPDX-FileCopyrightText: 2026 jnibook-link Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! jnibook-link CLI - probes the native link from a shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use jnibook_link::{DlOpenLoader, LinkGuard, NATIVE_LIBRARY};

/// Bootstrap and verify the jnibookrs native link
#[derive(Parser)]
#[command(name = "jnibook-link")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Library to probe instead of the default
    #[arg(long, global = true)]
    library: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the native library can be loaded
    Check,
    /// Call the native verify_link entry point
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let library = cli.library.unwrap_or_else(|| NATIVE_LIBRARY.to_string());
    let guard = LinkGuard::new(library, Box::new(DlOpenLoader));

    match cli.command {
        Commands::Check => check_command(&guard),
        Commands::Verify => verify_command(&guard),
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::{fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("jnibook_link=debug,info")
    } else {
        EnvFilter::new("jnibook_link=info,warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

fn check_command(guard: &LinkGuard) -> Result<()> {
    debug!(library = %guard.library(), "checking availability");
    guard.check_availability()?;
    println!(
        "{}",
        format!("✓ {} is available", guard.library()).green().bold()
    );
    Ok(())
}

fn verify_command(guard: &LinkGuard) -> Result<()> {
    debug!(library = %guard.library(), "verifying native link");
    let value = guard
        .verify_link()
        .context("link verification failed")?;
    println!(
        "{}",
        format!("✓ link verified (native returned {value})")
            .green()
            .bold()
    );
    Ok(())
}
