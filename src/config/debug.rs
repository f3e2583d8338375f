//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every check is additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a line for every cache hit/miss during a refresh pass.
    pub print_cache_events: bool,
    /// Emit the start/finish summary of each refresh pass.
    pub print_refresh_passes: bool,
    /// Emit UI interaction logs (e.g., category switching).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization logs.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_cache_events: false,
    print_refresh_passes: true,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
