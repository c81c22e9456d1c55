//! Host-supplied defaults for new collections and page-size selectors.

use serde::{Deserialize, Serialize};

use crate::{error::ItemsError, page::DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Collection defaults, typically loaded once from application configuration.
pub struct CollectionConfig {
    /// Page size of newly created collections.
    pub default_page_size: usize,
    /// Page sizes offered by page-size selectors.
    pub page_size_options: Vec<usize>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, DEFAULT_PAGE_SIZE, 100],
        }
    }
}

impl CollectionConfig {
    /// Parses a JSON config; missing fields fall back to [`CollectionConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidConfig`] for malformed JSON or a config rejected by
    /// [`CollectionConfig::validate`].
    pub fn from_json(raw_json: &str) -> Result<Self, ItemsError> {
        let config: Self = serde_json::from_str(raw_json)
            .map_err(|err| ItemsError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ItemsError> {
        serde_json::to_string(self).map_err(|err| ItemsError::InvalidConfig(err.to_string()))
    }

    /// Checks that every configured page size is at least one.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ItemsError> {
        if self.default_page_size == 0 {
            return Err(ItemsError::InvalidConfig(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(ItemsError::InvalidConfig(
                "page_size_options must not contain 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Page-size selector options, sorted, deduplicated, and including the default size.
    pub fn page_size_choices(&self) -> Vec<usize> {
        let mut choices = self.page_size_options.clone();
        choices.push(self.default_page_size);
        choices.retain(|size| *size > 0);
        choices.sort_unstable();
        choices.dedup();
        choices
    }
}
