use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "qforge",
    about = "Assembly enumeration and point-group classification for protein crystals",
    version,
    after_help = "Input is a TOML lattice description: the structure's entities and \
chains, its symmetry operators, the pairwise interfaces, and the external \
per-interface classification calls."
)]
pub struct Cli {
    /// Lattice description file (TOML)
    pub input: PathBuf,

    /// Minimum buried area (Å²) for an interface to be considered
    #[arg(long, value_name = "AREA", default_value_t = 35.0)]
    pub min_area: f64,

    /// Maximum number of interface clusters enumerated exhaustively
    #[arg(long, value_name = "N", default_value_t = 12)]
    pub max_clusters: usize,

    /// Allow engaging lattice-propagating (infinite) interface clusters
    #[arg(long)]
    pub allow_infinite: bool,

    /// Only print the assembly table (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
