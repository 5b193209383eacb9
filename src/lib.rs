pub mod boundary;
pub mod error;
pub mod geojson;
pub mod math;
pub mod metrics;

pub use error::{PlotGeoError, Result};
