//! Console configuration.
//!
//! Defaults come from the page variant; a few knobs can be overridden from
//! the page URL, e.g. `/banking?pacing_ms=1000&tab_delay_ms=0`.

use crate::shared::view_bindings::PageVariant;
use contracts::shared::logger::{BANKING_LOG_CAPACITY, ORDER_LOG_CAPACITY};
use serde::Deserialize;
use std::time::Duration;

pub const BANKING_API_BASE: &str = "/api/banking";
pub const ORDERS_API_BASE: &str = "/api/orders";
pub const DEFAULT_CURRENCY: &str = "KRW";
pub const DEFAULT_CARRIER: &str = "CJ Logistics";
pub const DEFAULT_TAB_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub banking_base: String,
    pub orders_base: String,
    pub log_capacity: usize,
    /// Pause between deactivating the old tab and activating the new one
    pub tab_delay: Duration,
    /// Pause between the steps of the deposit flow; demo pacing only
    pub deposit_pacing: Duration,
    pub default_currency: String,
    pub default_carrier: String,
}

/// Query-string overrides
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    api_origin: Option<String>,
    log_cap: Option<usize>,
    tab_delay_ms: Option<u64>,
    pacing_ms: Option<u64>,
    currency: Option<String>,
}

impl ConsoleConfig {
    pub fn for_variant(variant: PageVariant) -> Self {
        let log_capacity = match variant {
            PageVariant::Orders => ORDER_LOG_CAPACITY,
            PageVariant::Banking | PageVariant::Full => BANKING_LOG_CAPACITY,
        };
        Self {
            banking_base: BANKING_API_BASE.to_string(),
            orders_base: ORDERS_API_BASE.to_string(),
            log_capacity,
            tab_delay: DEFAULT_TAB_DELAY,
            deposit_pacing: Duration::ZERO,
            default_currency: DEFAULT_CURRENCY.to_string(),
            default_carrier: DEFAULT_CARRIER.to_string(),
        }
    }

    /// Apply overrides from a query string (with or without the leading `?`).
    /// A malformed query leaves the config untouched.
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return self;
        }
        let overrides: ConfigOverrides = match serde_qs::from_str(query) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("Ignoring malformed console settings '{}': {}", query, e);
                return self;
            }
        };

        if let Some(origin) = overrides.api_origin {
            let origin = origin.trim_end_matches('/');
            self.banking_base = format!("{}{}", origin, BANKING_API_BASE);
            self.orders_base = format!("{}{}", origin, ORDERS_API_BASE);
        }
        if let Some(cap) = overrides.log_cap {
            self.log_capacity = cap.max(1);
        }
        if let Some(ms) = overrides.tab_delay_ms {
            self.tab_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = overrides.pacing_ms {
            self.deposit_pacing = Duration::from_millis(ms);
        }
        if let Some(currency) = overrides.currency.filter(|c| !c.is_empty()) {
            self.default_currency = currency.to_uppercase();
        }
        self
    }

    /// Defaults for `variant`, overridden from the current page URL.
    pub fn from_location(variant: PageVariant) -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::for_variant(variant).with_query(&search)
    }

    /// No delays at all; used by tests.
    pub fn immediate(variant: PageVariant) -> Self {
        Self {
            tab_delay: Duration::ZERO,
            deposit_pacing: Duration::ZERO,
            ..Self::for_variant(variant)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        let banking = ConsoleConfig::for_variant(PageVariant::Banking);
        assert_eq!(banking.log_capacity, 1000);
        assert_eq!(banking.deposit_pacing, Duration::ZERO);
        assert_eq!(banking.tab_delay, Duration::from_millis(100));
        assert_eq!(ConsoleConfig::for_variant(PageVariant::Orders).log_capacity, 100);
    }

    #[test]
    fn test_query_overrides() {
        let config = ConsoleConfig::for_variant(PageVariant::Banking).with_query(
            "?pacing_ms=1000&tab_delay_ms=0&log_cap=20&api_origin=http%3A%2F%2Flocalhost%3A8080%2F",
        );
        assert_eq!(config.deposit_pacing, Duration::from_secs(1));
        assert_eq!(config.tab_delay, Duration::ZERO);
        assert_eq!(config.log_capacity, 20);
        assert_eq!(config.banking_base, "http://localhost:8080/api/banking");
        assert_eq!(config.orders_base, "http://localhost:8080/api/orders");
    }

    #[test]
    fn test_malformed_query_keeps_defaults() {
        let defaults = ConsoleConfig::for_variant(PageVariant::Full);
        assert_eq!(defaults.clone().with_query("pacing_ms=soon"), defaults);
        assert_eq!(defaults.clone().with_query(""), defaults);
    }
}
