//! Command-line argument parsing for energy calculations

use super::{Mp2Algorithm, ResolverKind};
use clap::Parser;

/// Closed-shell HF and MP2 energies from molecular-orbital integrals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file (optional)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Integral dataset (overrides config file)
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write a YAML energy report to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Integral lookup used by the HF energy
    #[arg(long, value_enum)]
    pub resolver: Option<ResolverKind>,

    /// Override the MP2 algorithm
    #[arg(long, value_enum)]
    pub mp2_algorithm: Option<Mp2Algorithm>,

    /// Override the MP2 degeneracy threshold
    #[arg(long)]
    pub degeneracy_threshold: Option<f64>,

    /// Override the number of integrals per read
    #[arg(long)]
    pub eri_chunk_size: Option<usize>,

    /// Skip the MP2 correction
    #[arg(long)]
    pub no_mp2: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
