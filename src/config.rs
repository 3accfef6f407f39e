//! Section configuration via TOML.
//!
//! Everything the sections need from the surrounding application is supplied
//! once, at startup, through a [`SectionConfig`]. The namespace in particular is
//! a process-wide constant: it is validated when the config is loaded and never
//! changes afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::types::DEFAULT_BREAKPOINT;

/// Section configuration.
///
/// # Example
///
/// ```toml
/// # Class-name prefix for every generated class.
/// namespace = "section"
///
/// # Viewport width (logical units) separating small and large layouts.
/// breakpoint = 768
///
/// # Pixel density reported by the host. Anything above 1.0 selects retina assets.
/// device_pixel_ratio = 2.0
///
/// # Reject unknown section types instead of falling back to "primary".
/// strict_section_type = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u32,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    #[serde(default)]
    pub strict_section_type: bool,
    /// Class used by the default punctuation renderer.
    #[serde(default = "default_punctuation_class")]
    pub punctuation_class: String,
}

fn default_namespace() -> String {
    "section".to_string()
}

fn default_breakpoint() -> u32 {
    DEFAULT_BREAKPOINT
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

fn default_punctuation_class() -> String {
    "punc".to_string()
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            breakpoint: default_breakpoint(),
            device_pixel_ratio: default_device_pixel_ratio(),
            strict_section_type: false,
            punctuation_class: default_punctuation_class(),
        }
    }
}

impl SectionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> SectionResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| SectionError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SectionResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| SectionError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// - `EmptyNamespace` if the namespace is blank
    /// - `InvalidConfig` if the breakpoint is zero or the pixel ratio is not a
    ///   positive finite number
    pub fn validate(&self) -> SectionResult<()> {
        if self.namespace.trim().is_empty() {
            return Err(SectionError::EmptyNamespace);
        }
        if self.breakpoint == 0 {
            return Err(SectionError::InvalidConfig {
                reason: "breakpoint must be greater than zero".to_string(),
            });
        }
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(SectionError::InvalidConfig {
                reason: format!(
                    "device_pixel_ratio must be a positive number, got {}",
                    self.device_pixel_ratio
                ),
            });
        }
        Ok(())
    }

    /// The default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Section configuration
#
# Class-name prefix for every generated class.
namespace = "section"

# Viewport width (logical units) separating small and large layouts.
breakpoint = 768

# Pixel density reported by the host. Anything above 1.0 selects retina assets.
device_pixel_ratio = 1.0

# Reject unknown section types instead of falling back to "primary".
strict_section_type = false

# Class applied by the default heading punctuation renderer.
punctuation_class = "punc"
"#
    }
}
