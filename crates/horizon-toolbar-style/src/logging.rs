//! Log targets for the style crate.
//!
//! Filter the resolver, theme and configuration events with `tracing`
//! directives such as `horizon_toolbar_style::resolver=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Color resolution target.
    pub const RESOLVER: &str = "horizon_toolbar_style::resolver";
    /// Theme resolution target.
    pub const THEME: &str = "horizon_toolbar_style::theme";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_toolbar_style::config";
}
