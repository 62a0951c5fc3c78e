use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of restaurants returned per request (default: 8)
    pub default_results: u32,
    /// Name of the backing restaurants table.
    /// Note: Only required when the `dynamodb` feature is enabled.
    pub table_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `defaultResults` - Restaurants returned per request (default: 8)
    /// - `restaurants_table` - Name of the backing table (no default)
    ///
    /// An unparseable `defaultResults` falls back to the default. An
    /// empty `restaurants_table` is treated as unset.
    pub fn from_env() -> Self {
        Self {
            default_results: env::var("defaultResults")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            table_name: env::var("restaurants_table")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
