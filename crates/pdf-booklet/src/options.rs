use crate::constants::DEFAULT_START_PADDING;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    /// Sheets per section; 0 skips reordering
    pub section_size: usize,

    /// Blank pages prepended before reordering (ignored when not reordering)
    pub start_padding: usize,

    /// Merge consecutive page pairs into double-width sheets
    pub join: bool,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            section_size: 0,
            start_padding: DEFAULT_START_PADDING,
            join: false,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn reorders(&self) -> bool {
        self.section_size > 0
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.reorders() && !self.join {
            return Err(BookletError::NothingToDo);
        }
        Ok(())
    }
}
