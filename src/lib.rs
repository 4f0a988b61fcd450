//! timeline-rs: layout engine for a categorized-disaster timeline.
//!
//! The crate projects heterogeneous event records (date, magnitude, category)
//! onto a single template-year horizontal axis and a per-year vertical band,
//! sized as half-discs whose area is proportional to cost. Rendering backends
//! stay external: the engine emits a backend-agnostic [`render::TimelineFrame`]
//! on every pass.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod palette;
pub mod render;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
