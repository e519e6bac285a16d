/// View models shaped for display
pub mod models;
/// Typed listing accessors and the free-text match orchestrator
pub mod services;
