mod engine;
mod engine_config;

pub use engine::TimelineEngine;
pub use engine_config::{ChartMargins, TimelineConfig};
