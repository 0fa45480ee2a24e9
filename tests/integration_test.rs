//! End-to-end tests driving the library on the example datasets

use mp2_energy::app::{run_calculation, EnergyReport};
use mp2_energy::config::{Config, Mp2Algorithm, ResolverKind};
use mp2_energy::dataset::{load_system, Dataset};
use mp2_energy::io::write_report;
use mp2_energy::EnergyError;
use std::path::PathBuf;

fn example_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
}

fn h2_report(config: &Config) -> EnergyReport {
    let dataset = Dataset::from_yaml_file(example_path("h2_minimal.yaml")).unwrap();
    let system = load_system(&dataset, config.eri_chunk_size()).unwrap();
    run_calculation(&system, config).unwrap()
}

const H2_HF: f64 = 0.7142857143 + 2.0 * -1.2528 + 0.6746;

// Only <00|11> = (01|01) couples the occupied and virtual orbital
fn h2_mp2() -> f64 {
    0.1813 * 0.1813 / (2.0 * -0.578 - 2.0 * 0.670)
}

#[test]
fn test_h2_energies() {
    let report = h2_report(&Config::default().with_defaults());

    assert_eq!(report.num_occ, 1);
    assert_eq!(report.num_virt, 1);
    assert_eq!(report.num_integrals, 4);
    assert!((report.hartree_fock.total - H2_HF).abs() < 1e-10);

    let mp2 = report.mp2.expect("MP2 enabled by default");
    assert!((mp2.correlation - h2_mp2()).abs() < 1e-12);
    assert!((report.total_energy - (H2_HF + h2_mp2())).abs() < 1e-10);
}

#[test]
fn test_h2_correlation_uses_exchange_integral() {
    let report = h2_report(&Config::default().with_defaults());
    let correlation = report.mp2.unwrap().correlation;

    // Minimal-basis H2 recovers about 13 mEh of correlation
    assert!(correlation < -0.013 && correlation > -0.014);

    // The Coulomb record <01|01> never enters the closed-shell H2 energy
    let mut dataset = Dataset::from_yaml_file(example_path("h2_minimal.yaml")).unwrap();
    if let Some(values) = dataset.eri_value.as_mut() {
        values[2] = 9.9;
    }
    let system = load_system(&dataset, 16).unwrap();
    let shifted = run_calculation(&system, &Config::default().with_defaults()).unwrap();
    assert!((shifted.total_energy - report.total_energy).abs() < 1e-12);
}

#[test]
fn test_h2_all_algorithms_agree() {
    let reference = h2_report(&Config::default().with_defaults());

    for resolver in [ResolverKind::Indexed, ResolverKind::Scan] {
        for algorithm in [Mp2Algorithm::Dense, Mp2Algorithm::Direct] {
            let mut config = Config::default().with_defaults();
            config.hf.resolver = Some(resolver);
            if let Some(ref mut mp2) = config.mp2 {
                mp2.algorithm = Some(algorithm);
            }
            config.eri_chunk_size = Some(1);

            let report = h2_report(&config);
            assert!((report.total_energy - reference.total_energy).abs() < 1e-12);
        }
    }
}

#[test]
fn test_h2_config_file() {
    let content = std::fs::read_to_string(example_path("h2_mp2.yaml")).unwrap();
    let config = serde_yml::from_str::<Config>(&content).unwrap().with_defaults();

    assert_eq!(config.dataset.as_deref(), Some("example/h2_minimal.yaml"));
    let report = h2_report(&config);
    assert!((report.hartree_fock.total - H2_HF).abs() < 1e-10);
}

#[test]
fn test_mp2_disabled_reports_hf_only() {
    let mut config = Config::default().with_defaults();
    if let Some(ref mut mp2) = config.mp2 {
        mp2.enabled = Some(false);
    }

    let report = h2_report(&config);
    assert!(report.mp2.is_none());
    assert_eq!(report.total_energy, report.hartree_fock.total);
}

#[test]
fn test_single_orbital_system() {
    let dataset = Dataset {
        nuclear_repulsion: Some(0.5),
        electron_up_num: Some(1),
        mo_num: Some(1),
        mo_energy: Some(vec![-0.9]),
        core_hamiltonian: Some(vec![-1.0]),
        eri_index: Some(vec![[0, 0, 0, 0]]),
        eri_value: Some(vec![2.0]),
    };
    let system = load_system(&dataset, 8).unwrap();
    let report = run_calculation(&system, &Config::default().with_defaults()).unwrap();

    assert!((report.hartree_fock.one_electron + 2.0).abs() < 1e-12);
    assert!((report.hartree_fock.two_electron - 2.0).abs() < 1e-12);
    assert!((report.hartree_fock.total - 0.5).abs() < 1e-12);
    assert_eq!(report.mp2.map(|m| m.correlation), Some(0.0));
}

#[test]
fn test_degenerate_levels_abort_the_run() {
    let mut dataset = Dataset::from_yaml_file(example_path("h2_minimal.yaml")).unwrap();
    dataset.mo_energy = Some(vec![0.1, 0.1]);
    let system = load_system(&dataset, 16).unwrap();

    let err = run_calculation(&system, &Config::default().with_defaults()).unwrap_err();
    assert!(matches!(err, EnergyError::DegenerateDenominator { .. }));
}

#[test]
fn test_report_serialization() {
    let report = h2_report(&Config::default().with_defaults());

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("total_energy"));
    assert!(text.contains("hartree_fock"));
    assert!(text.contains("correlation"));
}
