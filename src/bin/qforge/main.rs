use std::process::ExitCode;

use anyhow::Context;

use quat_forge::{detect, EngineConfig};

mod cli;
mod display;

fn main() -> ExitCode {
    env_logger::init();
    let cli = cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> anyhow::Result<()> {
    let lattice = quat_forge::io::read_lattice_file(&cli.input)
        .with_context(|| format!("reading lattice description '{}'", cli.input.display()))?;

    let config = EngineConfig {
        min_interface_area: cli.min_area,
        max_clusters: cli.max_clusters,
        forbid_infinite: !cli.allow_infinite,
    };

    let report = detect(
        &lattice.structure,
        &lattice.operators,
        &lattice.interfaces,
        &lattice.calls,
        &config,
    )
    .with_context(|| format!("detecting assemblies of '{}'", lattice.structure.name))?;

    if !cli.quiet {
        display::print_summary(&lattice, &report);
    }
    display::print_report(&report);

    Ok(())
}
