use crate::dataset::MolecularSystem;
use crate::hf_impl::HfEnergy;
use crate::mp2_impl::Mp2Energy;
use serde::Serialize;
use tracing::info;

/// Final energies of a run, written as the YAML report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReport {
    pub num_occ: usize,
    pub num_virt: usize,
    pub num_integrals: usize,
    pub hartree_fock: HfEnergy,
    pub mp2: Option<Mp2Energy>,
    /// E_HF + E_MP2, or E_HF alone when MP2 was skipped
    pub total_energy: f64,
}

impl EnergyReport {
    pub fn new(system: &MolecularSystem, hartree_fock: HfEnergy, mp2: Option<Mp2Energy>) -> Self {
        let total_energy = mp2.map(|m| m.total).unwrap_or(hartree_fock.total);
        EnergyReport {
            num_occ: system.num_occ,
            num_virt: system.num_virt(),
            num_integrals: system.eri.len(),
            hartree_fock,
            mp2,
            total_energy,
        }
    }
}

pub fn report_summary(report: &EnergyReport) {
    info!("\n===========================================");
    info!("          Energy Results Summary");
    info!("===========================================");
    info!("E_HF                       = {:.10} au", report.hartree_fock.total);
    if let Some(mp2) = report.mp2 {
        info!("Energy_MP2                 = {:.12} au", mp2.correlation);
    }
    info!("E_total                    = {:.12} au", report.total_energy);
    info!("===========================================\n");
}
