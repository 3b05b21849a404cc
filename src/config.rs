use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{Product, NEW_PRODUCT_ID};
use crate::error::ConfigError;

/// Runtime settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
    pub backend: BackendConfig,
}

/// The in-memory product backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Capacity of the backend request queue.
    pub buffer_size: usize,
    /// Artificial delay added to every backend call.
    pub latency_ms: u64,
    /// Products present when the backend starts.
    pub seed: Vec<Product>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            backend: BackendConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            latency_ms: 0,
            seed: vec![
                Product::new(1, "Leaf Rake", "GDN-0011", "Leaf rake with 48-inch wooden handle", 3),
                Product::new(2, "Garden Cart", "GDN-0023", "15 gallon capacity rolling garden cart", 4),
            ],
        }
    }
}

impl BackendConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl StoreConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()
    }
}

impl BackendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid("backend.buffer_size must be at least 1".to_string()));
        }
        let mut seen = HashSet::new();
        for product in &self.seed {
            if product.id == NEW_PRODUCT_ID {
                return Err(ConfigError::Invalid(format!(
                    "seed product {:?} uses the reserved id {}",
                    product.product_name, NEW_PRODUCT_ID
                )));
            }
            if !seen.insert(product.id) {
                return Err(ConfigError::Invalid(format!("duplicate seed product id {}", product.id)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.backend.seed.len(), 2);
    }

    #[test]
    fn parses_backend_section_and_seed() {
        let config = StoreConfig::from_toml_str(
            r#"
            log_filter = "product_store=debug"

            [backend]
            latency_ms = 250

            [[backend.seed]]
            id = 10
            productName = "Hammer"
            productCode = "TBX-0048"
            description = "Curved claw steel hammer"
            starRating = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "product_store=debug");
        assert_eq!(config.backend.latency(), Duration::from_millis(250));
        assert_eq!(config.backend.buffer_size, 32);
        assert_eq!(config.backend.seed, vec![Product::new(10, "Hammer", "TBX-0048", "Curved claw steel hammer", 5)]);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = StoreConfig::from_toml_str("backend = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    fn seed_entry(id: u32) -> String {
        format!(
            "[[backend.seed]]\nid = {}\nproductName = \"Saw\"\nproductCode = \"TBX-0022\"\ndescription = \"\"\nstarRating = 4\n",
            id
        )
    }

    #[test]
    fn zero_buffer_size_is_invalid() {
        let err = StoreConfig::from_toml_str("[backend]\nbuffer_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("buffer_size")));
    }

    #[test]
    fn seed_with_reserved_id_is_invalid() {
        let err = StoreConfig::from_toml_str(&seed_entry(0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("reserved id 0")));
    }

    #[test]
    fn duplicate_seed_ids_are_invalid() {
        let content = format!("{}{}", seed_entry(3), seed_entry(3));
        let err = StoreConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg == "duplicate seed product id 3"));
    }

    #[test]
    fn highest_possible_seed_id_is_accepted() {
        let config = StoreConfig::from_toml_str(&seed_entry(u32::MAX)).unwrap();
        assert_eq!(config.backend.seed[0].id, u32::MAX);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = StoreConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
