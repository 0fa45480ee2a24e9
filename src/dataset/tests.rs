//! Tests for dataset access and system loading

#[cfg(test)]
mod tests {
    use super::super::{load_system, Dataset, DatasetError, EriChunk, IntegralSource};
    use crate::eri_impl::EriRecord;
    use crate::error::EnergyError;

    const H2_LIKE: &str = r#"
nuclear_repulsion: 0.7142857143
electron_up_num: 1
mo_num: 2
mo_energy: [-0.578, 0.670]
core_hamiltonian: [-1.2528, 0.0,
                   0.0, -0.4756]
eri_index:
  - [0, 0, 0, 0]
  - [1, 1, 0, 0]
  - [1, 0, 1, 0]
  - [1, 1, 1, 1]
eri_value: [0.6746, 0.1813, 0.6636, 0.6975]
"#;

    fn dataset() -> Dataset {
        Dataset::from_yaml_str(H2_LIKE).unwrap()
    }

    #[test]
    fn test_yaml_parsing() {
        let data = dataset();
        assert_eq!(data.mo_num, Some(2));
        assert_eq!(data.electron_up_num, Some(1));
        assert_eq!(data.eri_index.as_ref().map(Vec::len), Some(4));
        assert_eq!(data.read_eri_count().unwrap(), 4);
    }

    #[test]
    fn test_load_system() {
        let system = load_system(&dataset(), 4096).unwrap();

        assert_eq!(system.num_occ, 1);
        assert_eq!(system.num_mo, 2);
        assert_eq!(system.num_virt(), 1);
        assert_eq!(system.orbital_energies[1], 0.670);
        assert_eq!(system.core_hamiltonian[(1, 1)], -0.4756);
        assert_eq!(system.eri.len(), 4);
        assert_eq!(system.eri.records()[1], EriRecord::new(1, 1, 0, 0, 0.1813));
    }

    #[test]
    fn test_paginated_reads_match_single_read() {
        let data = dataset();
        let whole = load_system(&data, 4096).unwrap();
        for chunk_size in [1, 3] {
            let paged = load_system(&data, chunk_size).unwrap();
            assert_eq!(paged.eri, whole.eri);
        }
        assert!(load_system(&data, 0).is_err());
    }

    #[test]
    fn test_sparse_read_window() {
        let data = dataset();
        let page = data.read_sparse_eri(3, 10).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.values, vec![0.6975]);
        assert!(data.read_sparse_eri(4, 10).unwrap().is_empty());
        assert!(matches!(
            data.read_sparse_eri(5, 1),
            Err(DatasetError::OffsetOutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_quantity_is_upstream_failure() {
        let mut data = dataset();
        data.mo_energy = None;

        match load_system(&data, 16).unwrap_err() {
            EnergyError::UpstreamReadFailure { quantity, source } => {
                assert_eq!(quantity, "orbital_energies");
                assert!(source.to_string().contains("mo_energy"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_counts() {
        let mut negative = dataset();
        negative.electron_up_num = Some(-1);
        assert!(matches!(
            load_system(&negative, 16),
            Err(EnergyError::InvalidConfiguration(_))
        ));

        let mut too_many = dataset();
        too_many.electron_up_num = Some(3);
        assert!(matches!(
            load_system(&too_many, 16),
            Err(EnergyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_oversized_orbital_count() {
        let mut huge = dataset();
        huge.mo_num = Some(i64::MAX);
        assert!(matches!(
            load_system(&huge, 16),
            Err(EnergyError::InvalidConfiguration(_))
        ));

        assert!(matches!(
            dataset().read_core_hamiltonian(usize::MAX / 2),
            Err(DatasetError::SizeOverflow {
                name: "core_hamiltonian",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_eri_indices() {
        let mut out_of_range = dataset();
        out_of_range.eri_index = Some(vec![[0, 0, 0, 0], [1, 1, 0, 2], [1, 0, 1, 0], [1, 1, 1, 1]]);
        assert!(matches!(
            load_system(&out_of_range, 16),
            Err(EnergyError::InvalidConfiguration(_))
        ));

        let mut negative = dataset();
        negative.eri_index = Some(vec![[0, 0, 0, 0], [1, 1, 0, -1], [1, 0, 1, 0], [1, 1, 1, 1]]);
        assert!(matches!(
            load_system(&negative, 16),
            Err(EnergyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_dataset_write_and_reread() {
        let data = dataset();
        let yaml = data.to_yaml_string().unwrap();
        assert_eq!(Dataset::from_yaml_str(&yaml).unwrap(), data);
    }

    /// Source that reports fewer integrals than it announced
    struct DrySource {
        inner: Dataset,
        announced: i64,
    }

    impl IntegralSource for DrySource {
        type Error = DatasetError;

        fn read_nuclear_repulsion(&self) -> Result<f64, DatasetError> {
            self.inner.read_nuclear_repulsion()
        }

        fn read_electron_up_count(&self) -> Result<i64, DatasetError> {
            self.inner.read_electron_up_count()
        }

        fn read_mo_count(&self) -> Result<i64, DatasetError> {
            self.inner.read_mo_count()
        }

        fn read_orbital_energies(&self, mo_num: usize) -> Result<Vec<f64>, DatasetError> {
            self.inner.read_orbital_energies(mo_num)
        }

        fn read_core_hamiltonian(&self, mo_num: usize) -> Result<Vec<f64>, DatasetError> {
            self.inner.read_core_hamiltonian(mo_num)
        }

        fn read_eri_count(&self) -> Result<i64, DatasetError> {
            Ok(self.announced)
        }

        fn read_sparse_eri(&self, offset: usize, max_count: usize) -> Result<EriChunk, DatasetError> {
            self.inner.read_sparse_eri(offset, max_count)
        }
    }

    #[test]
    fn test_short_source_keeps_delivered_integrals() {
        let source = DrySource {
            inner: dataset(),
            announced: 14,
        };
        let system = load_system(&source, 2).unwrap();
        assert_eq!(system.eri.len(), 4);
    }

    #[test]
    fn test_announced_eri_count_is_not_preallocated() {
        let source = DrySource {
            inner: dataset(),
            announced: i64::MAX,
        };
        let system = load_system(&source, 3).unwrap();
        assert_eq!(system.eri.len(), 4);
        assert_eq!(system.eri, load_system(&dataset(), 3).unwrap().eri);
    }

    /// Source whose every read fails
    struct BrokenSource;

    impl IntegralSource for BrokenSource {
        type Error = std::io::Error;

        fn read_nuclear_repulsion(&self) -> Result<f64, std::io::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such group"))
        }

        fn read_electron_up_count(&self) -> Result<i64, std::io::Error> {
            unreachable!()
        }

        fn read_mo_count(&self) -> Result<i64, std::io::Error> {
            unreachable!()
        }

        fn read_orbital_energies(&self, _mo_num: usize) -> Result<Vec<f64>, std::io::Error> {
            unreachable!()
        }

        fn read_core_hamiltonian(&self, _mo_num: usize) -> Result<Vec<f64>, std::io::Error> {
            unreachable!()
        }

        fn read_eri_count(&self) -> Result<i64, std::io::Error> {
            unreachable!()
        }

        fn read_sparse_eri(&self, _offset: usize, _max_count: usize) -> Result<EriChunk, std::io::Error> {
            unreachable!()
        }
    }

    #[test]
    fn test_first_failure_aborts_loading() {
        let err = load_system(&BrokenSource, 16).unwrap_err();
        assert!(matches!(
            err,
            EnergyError::UpstreamReadFailure {
                quantity: "nuclear_repulsion_energy",
                ..
            }
        ));
    }
}
