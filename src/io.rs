//! Checkpoint serialization.
//!
//! Checkpoints are pretty-printed JSON snapshots of named parameters. Two
//! independent write paths use them: the trainer overwrites the "last"
//! checkpoint pair every epoch, and the early stopper writes the "best" pair
//! under its own improvement policy.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::autograd::Tensor;
use crate::error::{Error, Result};

/// Serializable snapshot of a model's named parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelState {
    params: Vec<NamedParam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedParam {
    name: String,
    data: Vec<f32>,
}

impl ModelState {
    /// Snapshot a list of named tensors.
    ///
    /// Values are copied out of the shared storage, so later training steps
    /// do not mutate an already-taken snapshot.
    pub fn from_named(named: Vec<(String, Tensor)>) -> Self {
        let params = named
            .into_iter()
            .map(|(name, tensor)| NamedParam { name, data: tensor.data().to_vec() })
            .collect();
        Self { params }
    }

    /// Parameter values stored under `name`.
    pub fn param(&self, name: &str) -> Option<&[f32]> {
        self.params.iter().find(|p| p.name == name).map(|p| p.data.as_slice())
    }

    /// Number of stored parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the snapshot holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Write the snapshot as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("checkpoint serialization failed: {e}")))?;
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    /// Read a snapshot back from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| Error::Serialization(format!("checkpoint deserialization failed: {e}")))
    }
}
