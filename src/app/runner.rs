use super::report::EnergyReport;
use crate::config::{Config, Mp2Algorithm, ResolverKind};
use crate::dataset::MolecularSystem;
use crate::eri_impl::EriIndex;
use crate::error::Result;
use crate::hf_impl::{hartree_fock_energy, HfEnergy};
use crate::mp2_impl::{Mp2Energy, MP2};
use crate::tensor_impl::build_ov_tensor;
use tracing::info;

/// HF energy followed by the optional MP2 correction for a loaded system
pub fn run_calculation(system: &MolecularSystem, config: &Config) -> Result<EnergyReport> {
    let resolver = config.hf_resolver();
    let index = match resolver {
        ResolverKind::Indexed => {
            let index = EriIndex::from_table(&system.eri);
            info!(
                "Indexed {} integrals into {} symmetry-distinct entries",
                system.eri.len(),
                index.len()
            );
            Some(index)
        }
        ResolverKind::Scan => None,
    };

    info!("\nComputing Hartree-Fock energy ({:?} integral lookup)...", resolver);
    let hf = match index {
        Some(ref index) => hartree_fock_energy(
            system.nuclear_repulsion,
            &system.core_hamiltonian,
            system.num_occ,
            index,
        )?,
        None => hartree_fock_energy(
            system.nuclear_repulsion,
            &system.core_hamiltonian,
            system.num_occ,
            &system.eri,
        )?,
    };
    hf.print_summary();

    let mp2 = if config.is_mp2_enabled() {
        Some(run_mp2(system, config, &hf, index.as_ref())?)
    } else {
        info!("MP2 correction disabled");
        None
    };

    Ok(EnergyReport::new(system, hf, mp2))
}

fn run_mp2(
    system: &MolecularSystem,
    config: &Config,
    hf: &HfEnergy,
    index: Option<&EriIndex>,
) -> Result<Mp2Energy> {
    info!("\n===========================================");
    info!("       Starting MP2 Calculation");
    info!("===========================================");

    let mut mp2 = MP2::new(system.num_occ, system.orbital_energies.clone())?
        .with_degeneracy_threshold(config.mp2_degeneracy_threshold());

    let correlation_energy = match config.mp2_algorithm() {
        Mp2Algorithm::Dense => {
            info!("Using dense occupied-virtual tensor");
            let g = build_ov_tensor(&system.eri, system.num_occ, system.num_virt())?;
            mp2.calculate_mp2_energy(&g)?
        }
        Mp2Algorithm::Direct => {
            info!("Using direct MP2 algorithm");
            match index {
                Some(index) => mp2.calculate_mp2_energy_direct(index)?,
                None => mp2.calculate_mp2_energy_direct(&system.eri)?,
            }
        }
    };

    mp2.print_summary(hf.total);
    Ok(Mp2Energy::new(correlation_energy, hf.total))
}
