//! Market-data provider configuration constants and types.

use crate::utils::TimeUtils;

/// Configuration for the provider's REST client
/// (This is the runtime struct used by the Http Client)
#[derive(Debug, Clone)]
pub struct ProviderApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ProviderApiConfig {
    fn default() -> Self {
        Self {
            base_url: PROVIDER.client.base_url.to_string(),
            timeout_ms: PROVIDER.client.timeout_ms,
            user_agent: PROVIDER.client.user_agent.to_string(),
        }
    }
}

/// What each history request asks for
pub struct HistoryRequest {
    /// Provider-defined session window ("1d" = current trading day)
    pub range: &'static str,
    /// Bar width in milliseconds
    pub interval_ms: i64,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub base_url: &'static str,
    pub timeout_ms: u64,
    // The chart endpoint answers 429 to clients without a browser-ish agent
    pub user_agent: &'static str,
}

/// The Master Provider Configuration Struct
pub struct ProviderConfig {
    pub name: &'static str,
    pub history: HistoryRequest,
    pub client: ClientDefaults,
}

pub const PROVIDER: ProviderConfig = ProviderConfig {
    name: "Yahoo Finance",
    history: HistoryRequest {
        range: "1d",
        interval_ms: TimeUtils::MS_IN_MIN,
    },
    client: ClientDefaults {
        base_url: "https://query1.finance.yahoo.com",
        timeout_ms: 10_000,
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) futures-dash/0.1",
    },
};
