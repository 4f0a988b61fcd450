pub mod band_scale;
pub mod dataset;
pub mod radius_scale;
pub mod scale;
pub mod season_scale;
pub mod types;

pub use band_scale::YearBandScale;
pub use dataset::EventDataset;
pub use radius_scale::RadiusScale;
pub use scale::LinearScale;
pub use season_scale::SeasonalScale;
pub use types::{DisasterCategory, EventRecord, Viewport};
