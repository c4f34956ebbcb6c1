//! Dropdown manifest: configuration, items and initial value in one document.

use crate::error::ManifestError;
use dropdown_widgets::{
    default_value_extractor, find_index, Dropdown, DropdownConfig, Item, Value,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A dropdown described in YAML.
///
/// ```yaml
/// config:
///   item_count: 4
///   dropdown_margins: { min: 8, max: 16 }
/// data:
///   - value: apple
///     label: Apple
///   - ~
///   - value: 3
/// value: apple
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Widget configuration
    pub config: DropdownConfig,
    /// Items; `~` marks an absent entry
    pub data: Vec<Option<Item>>,
    /// Initial value
    pub value: Option<Value>,
}

impl Manifest {
    /// Parse and validate a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is out of range.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read, parse and validate a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        log::debug!("loading manifest {}", path.display());
        let yaml = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check value ranges.
    ///
    /// An initial value that matches no item and duplicate item values are
    /// allowed; they are logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let config = &self.config;
        if config.item_count == 0 {
            return Err(ManifestError::invalid("config.item_count", "must be at least 1"));
        }
        if !config.font_size.is_finite() || config.font_size <= 0.0 {
            return Err(ManifestError::invalid("config.font_size", "must be positive"));
        }
        for (field, length) in [
            ("config.item_padding", config.item_padding),
            ("config.label_height", config.label_height),
        ] {
            if !length.is_finite() || length < 0.0 {
                return Err(ManifestError::invalid(
                    field,
                    "must be a finite, non-negative number",
                ));
            }
        }

        let margins = config.dropdown_margins;
        if !margins.min.is_finite() || !margins.max.is_finite() {
            return Err(ManifestError::invalid("config.dropdown_margins", "must be finite"));
        }
        if margins.min < 0.0 {
            return Err(ManifestError::invalid(
                "config.dropdown_margins.min",
                "must not be negative",
            ));
        }
        if margins.min > margins.max {
            return Err(ManifestError::invalid(
                "config.dropdown_margins",
                format!("min ({}) exceeds max ({})", margins.min, margins.max),
            ));
        }

        for (field, opacity) in [
            ("config.ripple_opacity", config.ripple_opacity),
            ("config.shade_opacity", config.shade_opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ManifestError::invalid(field, "must be within [0, 1]"));
            }
        }

        for index in self.duplicate_indices() {
            if let Some(Some(item)) = self.data.get(index) {
                log::warn!("duplicate item value {} at {index}; the first match wins", item.value);
            }
        }
        if self.value.is_some() && self.selected_index().is_none() {
            log::warn!("initial value matches no item");
        }
        Ok(())
    }

    /// Indices of present items whose value an earlier item already uses.
    #[must_use]
    pub fn duplicate_indices(&self) -> Vec<usize> {
        let mut seen: Vec<&Value> = Vec::new();
        let mut duplicates = Vec::new();
        for (index, item) in self.data.iter().enumerate() {
            let Some(item) = item else { continue };
            if seen.contains(&&item.value) {
                duplicates.push(index);
            } else {
                seen.push(&item.value);
            }
        }
        duplicates
    }

    /// Index of the item matching the initial value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        find_index(&self.data, self.value.as_ref(), &*default_value_extractor())
    }

    /// Number of present items.
    #[must_use]
    pub fn present_items(&self) -> usize {
        self.data.iter().flatten().count()
    }

    /// Build a dropdown from this manifest.
    #[must_use]
    pub fn build(&self) -> Dropdown {
        let dropdown = Dropdown::new(self.config.clone()).data(self.data.clone());
        match &self.value {
            Some(value) => dropdown.with_value(value.clone()),
            None => dropdown,
        }
    }
}
