//! HF/MP2 energy command-line interface
//!
//! Reads an integral dataset (optionally through a YAML configuration file)
//! and reports the Hartree-Fock and MP2 energies.

use color_eyre::eyre::Result;
use mp2_energy::app::EnergyApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    EnergyApplication::from_cli()?.run()?;
    Ok(())
}
