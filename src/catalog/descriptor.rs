use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One entry of the externally supplied block catalog: the name of a block
/// the target workspace offers, plus an optional code sample scraped from
/// its documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDescriptor {
    #[serde(rename = "type")]
    pub block_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_sample: Option<String>,
}

impl BlockDescriptor {
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            python_sample: None,
        }
    }

    pub fn with_sample(mut self, sample: impl Into<String>) -> Self {
        self.python_sample = Some(sample.into());
        self
    }
}

/// The flat list of block descriptors the core does not own. Loaded once,
/// scanned once into a [`CapabilitySet`](super::CapabilitySet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockCatalog {
    pub blocks: Vec<BlockDescriptor>,
}

impl BlockCatalog {
    pub fn new(blocks: Vec<BlockDescriptor>) -> Self {
        Self { blocks }
    }

    /// Loads the catalog from a JSON file. A missing file is fatal: no
    /// catalog means no meaningful validation is possible.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses the catalog from its JSON wire form: a flat array of
    /// `{ "type": ..., "python_sample"?: ... }` records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
