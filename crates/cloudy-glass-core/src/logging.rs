//! Logging facilities for Cloudy Glass.
//!
//! Cloudy Glass uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in the host program:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("cloudy_glass=debug")
//!     .init();
//! ```

/// Span names used throughout Cloudy Glass for tracing.
pub mod span_names {
    /// One apply-request, from validation to summary.
    pub const APPLY_REQUEST: &str = "cloudy_glass::apply_request";
    /// Application of a descriptor to a single node.
    pub const APPLY_NODE: &str = "cloudy_glass::apply_node";
    /// Selection change handling.
    pub const SELECTION_CHANGED: &str = "cloudy_glass::selection_changed";
}

/// Target names for log filtering.
pub mod targets {
    /// Style catalog lookups.
    pub const CATALOG: &str = "cloudy_glass_style::catalog";
    /// Preset resolution.
    pub const RESOLVE: &str = "cloudy_glass_style::resolve";
    /// Per-node application.
    pub const APPLY: &str = "cloudy_glass_style::apply";
    /// Selection validation.
    pub const SELECTION: &str = "cloudy_glass_style::selection";
    /// Request dispatching.
    pub const DISPATCH: &str = "cloudy_glass::dispatch";
    /// Signal emission.
    pub const SIGNAL: &str = "cloudy_glass_core::signal";
}
