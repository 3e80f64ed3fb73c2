//! crossdock CLI — turns a build-platform identifier into a shell helper
//! script that prepares a cross-compilation environment.
//!
//! The os/arch/variant flags take the component values a container build
//! exposes (e.g., `--os linux --arch arm --variant v7`); the rendered script
//! goes to stdout.

use std::process;

use clap::Parser;

use crossdock_targets::{resolve, BuildPlatform};

#[derive(Parser)]
#[command(
    name = "crossdock",
    version,
    about = "Generate a cross-compilation helper script for a build platform"
)]
struct Cli {
    /// Target operating system as named by the build system (e.g., linux)
    #[arg(long)]
    os: String,
    /// Target CPU architecture as named by the build system (e.g., amd64, arm)
    #[arg(long)]
    arch: String,
    /// Sub-architecture variant (e.g., v7)
    #[arg(long)]
    variant: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let script = helper_script(&cli.os, &cli.arch, cli.variant.as_deref())?;
    println!("{script}");
    Ok(())
}

/// Resolve the platform and render its helper script.
fn helper_script(os: &str, arch: &str, variant: Option<&str>) -> anyhow::Result<String> {
    let platform = BuildPlatform::new(os, arch, variant);
    let target = resolve(&platform)?;
    let script = crossdock_helper::generate(&target)?;
    Ok(script)
}
