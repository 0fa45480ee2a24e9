//! YAML-backed integral dataset

use super::source::{EriChunk, IntegralSource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by [`Dataset`]
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unable to read dataset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset")]
    Parse(#[from] serde_yml::Error),

    #[error("dataset does not provide '{0}'")]
    Missing(&'static str),

    #[error("'{name}' holds {actual} values, expected {expected}")]
    Length {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("'{name}' cannot be sized for {mo_num} molecular orbitals")]
    SizeOverflow { name: &'static str, mo_num: usize },

    #[error("ERI read at offset {offset} is past the end of the {available} stored integrals")]
    OffsetOutOfRange { offset: usize, available: usize },
}

/// In-memory integral dataset
///
/// Field names follow the grouping of the quantities in the dataset file;
/// every field is optional so that a missing quantity is reported by name when
/// it is read rather than when the file is parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuclear_repulsion: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electron_up_num: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mo_num: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mo_energy: Option<Vec<f64>>,

    /// Row-major core Hamiltonian in the MO basis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_hamiltonian: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eri_index: Option<Vec<[i32; 4]>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eri_value: Option<Vec<f64>>,
}

impl Dataset {
    pub fn from_yaml_str(content: &str) -> Result<Self, DatasetError> {
        Ok(serde_yml::from_str(content)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> Result<String, DatasetError> {
        Ok(serde_yml::to_string(self)?)
    }

    fn eri_arrays(&self) -> Result<(&[[i32; 4]], &[f64]), DatasetError> {
        let indices = self
            .eri_index
            .as_deref()
            .ok_or(DatasetError::Missing("eri_index"))?;
        let values = self
            .eri_value
            .as_deref()
            .ok_or(DatasetError::Missing("eri_value"))?;
        if indices.len() != values.len() {
            return Err(DatasetError::Length {
                name: "eri_value",
                expected: indices.len(),
                actual: values.len(),
            });
        }
        Ok((indices, values))
    }
}

fn sized<'a>(
    name: &'static str,
    data: Option<&'a Vec<f64>>,
    expected: usize,
) -> Result<&'a Vec<f64>, DatasetError> {
    let data = data.ok_or(DatasetError::Missing(name))?;
    if data.len() != expected {
        return Err(DatasetError::Length {
            name,
            expected,
            actual: data.len(),
        });
    }
    Ok(data)
}

impl IntegralSource for Dataset {
    type Error = DatasetError;

    fn read_nuclear_repulsion(&self) -> Result<f64, DatasetError> {
        self.nuclear_repulsion
            .ok_or(DatasetError::Missing("nuclear_repulsion"))
    }

    fn read_electron_up_count(&self) -> Result<i64, DatasetError> {
        self.electron_up_num
            .ok_or(DatasetError::Missing("electron_up_num"))
    }

    fn read_mo_count(&self) -> Result<i64, DatasetError> {
        self.mo_num.ok_or(DatasetError::Missing("mo_num"))
    }

    fn read_orbital_energies(&self, mo_num: usize) -> Result<Vec<f64>, DatasetError> {
        sized("mo_energy", self.mo_energy.as_ref(), mo_num).cloned()
    }

    fn read_core_hamiltonian(&self, mo_num: usize) -> Result<Vec<f64>, DatasetError> {
        let expected = mo_num.checked_mul(mo_num).ok_or(DatasetError::SizeOverflow {
            name: "core_hamiltonian",
            mo_num,
        })?;
        sized("core_hamiltonian", self.core_hamiltonian.as_ref(), expected).cloned()
    }

    fn read_eri_count(&self) -> Result<i64, DatasetError> {
        let (indices, _) = self.eri_arrays()?;
        Ok(indices.len() as i64)
    }

    fn read_sparse_eri(&self, offset: usize, max_count: usize) -> Result<EriChunk, DatasetError> {
        let (indices, values) = self.eri_arrays()?;
        if offset > indices.len() {
            return Err(DatasetError::OffsetOutOfRange {
                offset,
                available: indices.len(),
            });
        }
        let end = offset + max_count.min(indices.len() - offset);
        Ok(EriChunk {
            indices: indices[offset..end].to_vec(),
            values: values[offset..end].to_vec(),
        })
    }
}
