//! Refresh cadence and cache lifetime

/// Timer and cache settings baked into the build. CLI flags may override them.
pub struct RefreshConfig {
    /// How long a fetched series is served from the cache (seconds)
    pub cache_ttl_secs: u64,
    /// Interval between automatic re-render passes (milliseconds)
    pub tick_interval_ms: u64,
}

pub const REFRESH: RefreshConfig = RefreshConfig {
    cache_ttl_secs: 60,
    tick_interval_ms: 60_000,
};
