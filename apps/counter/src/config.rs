//! # Counter Configuration
//!
//! Store details, tax rate, receipt layout and the seed menu.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAFE_STORE_NAME="Corner Café"                                      │
//! │     CAFE_TAX_RATE=12.5          (percent)                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/counter/counter.toml (Linux)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     CaféSmart, 10% tax, the five-item house menu                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "CaféSmart"
//! footer = "Thank you. Please come again!"
//!
//! [tax]
//! rate_bps = 1000
//!
//! [receipt]
//! name_width = 18
//! amount_width = 10
//! rule_width = 31
//!
//! [[menu]]
//! kind = "drink"
//! name = "Americano"
//! price_pence = 280
//! attribute = "Regular"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use cafe_core::validation::validate_tax_rate_bps;
use cafe_core::{ItemFactory, MenuCatalog, Money, ReceiptLayout, TaxCalculator, TaxRate};

use crate::error::{CounterError, CounterResult};

const CONFIG_FILE_NAME: &str = "counter.toml";

// =============================================================================
// Sections
// =============================================================================

/// Store identity printed on receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_store_name() -> String {
    "CaféSmart".to_string()
}

fn default_footer() -> String {
    "Thank you. Please come again!".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
            footer: default_footer(),
        }
    }
}

/// Tax settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Rate in basis points (1000 = 10%).
    #[serde(default = "default_rate_bps")]
    pub rate_bps: u32,
}

fn default_rate_bps() -> u32 {
    TaxRate::DEFAULT.bps()
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig {
            rate_bps: default_rate_bps(),
        }
    }
}

/// Column widths for printed receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptConfig {
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    #[serde(default = "default_amount_width")]
    pub amount_width: usize,

    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_name_width() -> usize {
    18
}

fn default_amount_width() -> usize {
    10
}

fn default_rule_width() -> usize {
    31
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        ReceiptConfig {
            name_width: default_name_width(),
            amount_width: default_amount_width(),
            rule_width: default_rule_width(),
        }
    }
}

/// One seed menu entry, fed to the item factory at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// `"food"` or `"drink"`; anything else is rejected by the factory.
    pub kind: String,
    pub name: String,
    pub price_pence: i64,
    /// Category for food, size for drinks.
    #[serde(default)]
    pub attribute: String,
}

impl MenuEntry {
    fn new(kind: &str, name: &str, price_pence: i64, attribute: &str) -> Self {
        MenuEntry {
            kind: kind.to_string(),
            name: name.to_string(),
            price_pence,
            attribute: attribute.to_string(),
        }
    }
}

fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("drink", "Americano", 280, "Regular"),
        MenuEntry::new("drink", "Latte", 320, "Large"),
        MenuEntry::new("drink", "Hot Chocolate", 300, "Regular"),
        MenuEntry::new("food", "Butter Croissant", 210, "Pastry"),
        MenuEntry::new("food", "Banana Bread", 260, "Bakery"),
    ]
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete counter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub tax: TaxConfig,

    #[serde(default)]
    pub receipt: ReceiptConfig,

    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntry>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            store: StoreConfig::default(),
            tax: TaxConfig::default(),
            receipt: ReceiptConfig::default(),
            menu: default_menu(),
        }
    }
}

impl CounterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`counter.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CounterResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading counter config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load counter config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without applying overrides or validation.
    pub fn from_file(path: &Path) -> CounterResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the configuration can actually run a counter.
    pub fn validate(&self) -> CounterResult<()> {
        validate_tax_rate_bps(self.tax.rate_bps).map_err(|e| CounterError::Config(e.to_string()))?;

        if self.store.name.trim().is_empty() {
            return Err(CounterError::Config("store.name must not be empty".into()));
        }

        if self.receipt.name_width == 0
            || self.receipt.amount_width == 0
            || self.receipt.rule_width == 0
        {
            return Err(CounterError::Config(
                "receipt widths must be greater than 0".into(),
            ));
        }

        if self.menu.is_empty() {
            return Err(CounterError::Config(
                "menu must contain at least one item".into(),
            ));
        }

        // every entry must survive the factory
        self.build_catalog()?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("CAFE_STORE_NAME") {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(rate) = lookup("CAFE_TAX_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(pct) if pct >= 0.0 => {
                    let rate = TaxRate::from_percentage(pct);
                    if !rate.is_exact_percentage(pct) {
                        warn!(
                            requested = pct,
                            applied = %rate,
                            "CAFE_TAX_RATE has more precision than 0.01%; rounding"
                        );
                    }
                    debug!(bps = rate.bps(), "Overriding tax rate from environment");
                    self.tax.rate_bps = rate.bps();
                }
                _ => warn!(rate = %rate, "Ignoring invalid CAFE_TAX_RATE"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cafesmart", "counter")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Builds the menu by running every seed entry through the item factory.
    pub fn build_catalog(&self) -> CounterResult<MenuCatalog> {
        let mut catalog = MenuCatalog::new();
        for entry in &self.menu {
            let price = Money::checked_from_pence(entry.price_pence).ok_or_else(|| {
                CounterError::Config(format!(
                    "menu item '{}' has an out-of-range price_pence: {}",
                    entry.name, entry.price_pence
                ))
            })?;
            let item =
                ItemFactory::create_from_tag(&entry.kind, &entry.name, price, &entry.attribute)?;
            catalog.add_item(item);
        }
        Ok(catalog)
    }

    /// Builds the tax calculator for the configured rate.
    pub fn tax_calculator(&self) -> CounterResult<TaxCalculator> {
        Ok(TaxCalculator::try_from_bps(self.tax.rate_bps)?)
    }

    /// Builds the receipt layout.
    pub fn receipt_layout(&self) -> ReceiptLayout {
        ReceiptLayout {
            title: self.store.name.clone(),
            footer: self.store.footer.clone(),
            name_width: self.receipt.name_width,
            amount_width: self.receipt.amount_width,
            rule_width: self.receipt.rule_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::CoreError;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CounterConfig::default();
        assert_eq!(config.store.name, "CaféSmart");
        assert_eq!(config.tax.rate_bps, 1000);
        assert_eq!(config.menu.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_catalog_matches_house_menu() {
        let catalog = CounterConfig::default().build_catalog().unwrap();
        assert_eq!(
            catalog.list_display_strings(),
            vec![
                "Americano - £2.80",
                "Latte - £3.20",
                "Hot Chocolate - £3.00",
                "Butter Croissant - £2.10",
                "Banana Bread - £2.60",
            ]
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = CounterConfig::default();

        config.tax.rate_bps = 10001;
        assert!(matches!(config.validate(), Err(CounterError::Config(_))));

        config.tax.rate_bps = 1000;
        config.menu.clear();
        assert!(matches!(config.validate(), Err(CounterError::Config(_))));

        config.menu = vec![MenuEntry::new("dessert", "Cake", 300, "Sweet")];
        assert!(matches!(
            config.validate(),
            Err(CounterError::Core(CoreError::InvalidItemType { .. }))
        ));

        config.menu = default_menu();
        config.receipt.name_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_price_is_a_config_error() {
        let mut config = CounterConfig::default();
        config.menu.push(MenuEntry::new(
            "food",
            "Gold Leaf Cake",
            1_000_000_000_000_000,
            "Cake",
        ));

        assert!(matches!(config.validate(), Err(CounterError::Config(_))));
        assert!(matches!(config.build_catalog(), Err(CounterError::Config(_))));
    }

    #[test]
    fn test_fractional_basis_point_override_rounds() {
        let mut config = CounterConfig::default();
        config.apply_overrides(|key| (key == "CAFE_TAX_RATE").then(|| "0.004".to_string()));
        assert_eq!(config.tax.rate_bps, 0);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("CAFE_STORE_NAME", "Corner Café"), ("CAFE_TAX_RATE", "12.5")]);

        let mut config = CounterConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.name, "Corner Café");
        assert_eq!(config.tax.rate_bps, 1250);
    }

    #[test]
    fn test_invalid_tax_override_is_ignored() {
        let mut config = CounterConfig::default();
        config.apply_overrides(|key| (key == "CAFE_TAX_RATE").then(|| "lots".to_string()));
        assert_eq!(config.tax.rate_bps, 1000);

        config.apply_overrides(|key| (key == "CAFE_TAX_RATE").then(|| "-5".to_string()));
        assert_eq!(config.tax.rate_bps, 1000);
    }

    #[test]
    fn test_from_file_partial_sections_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[tax]
rate_bps = 2000

[[menu]]
kind = "food"
name = "Scone"
price_pence = 195
"#
        )
        .unwrap();

        let config = CounterConfig::from_file(file.path()).unwrap();

        assert_eq!(config.tax.rate_bps, 2000);
        assert_eq!(config.store.name, "CaféSmart");
        assert_eq!(config.receipt.name_width, 18);
        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu[0].attribute, "");

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.get_item(1).unwrap().to_string(), "Scone - £1.95");
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tax]\nrate_bps = \"ten\"").unwrap();

        assert!(matches!(
            CounterConfig::from_file(file.path()),
            Err(CounterError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_receipt_layout_from_config() {
        let mut config = CounterConfig::default();
        config.store.name = "Kiosk".to_string();
        config.receipt.amount_width = 12;

        let layout = config.receipt_layout();
        assert_eq!(layout.title, "Kiosk");
        assert_eq!(layout.amount_width, 12);
        assert_eq!(layout.footer, "Thank you. Please come again!");
    }

    #[test]
    fn test_toml_serialization() {
        let config = CounterConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[[menu]]"));
    }
}
