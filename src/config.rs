//! # Form Configuration
//!
//! Shop-specific text printed on every form: the letterhead and the warranty
//! line at the foot of the pick-up form.
//!
//! ## Usage
//!
//! ```
//! use workform::config::FormConfig;
//!
//! let config = FormConfig::default();
//! assert_eq!(config.shop_name, "Humphreys Audio and Vintage Audio Repair");
//!
//! let custom = FormConfig::from_json(r#"{ "shop_name": "Bench Repair" }"#).unwrap();
//! assert_eq!(custom.warranty, config.warranty);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Letterhead and policy text.
///
/// Missing keys in a JSON configuration fall back to the defaults, so a file
/// only needs the values that differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Bold first line of the letterhead.
    pub shop_name: String,
    /// Small print under the shop name, one entry per line.
    pub contact_lines: Vec<String>,
    /// Footer line of the pick-up form.
    pub warranty: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            shop_name: "Humphreys Audio and Vintage Audio Repair".into(),
            contact_lines: vec![
                "16610 Bayview Ave., Unit #7, Newmarket ON   Ph: (416) 923-3777".into(),
                "humphreys.repair@rogers.com/www.humphreysrepaircentre.com".into(),
            ],
            warranty: "Warranty: 1 month on replaced parts and labour.".into(),
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded form configuration from {}", path.display());
        Ok(config)
    }

    /// Reject configurations that would print a blank letterhead.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.shop_name.trim().is_empty() {
            return Err(FormError::Config("shop_name must not be empty".into()));
        }
        if self.contact_lines.len() > 2 {
            return Err(FormError::Config(format!(
                "at most 2 contact lines fit above the title, got {}",
                self.contact_lines.len()
            )));
        }
        Ok(())
    }
}
