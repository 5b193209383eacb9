pub mod haversine;
pub mod polygon_2d;

/// 2D point type for locally projected plane coordinates, in meters.
pub type Point2 = nalgebra::Point2<f64>;

/// Mean Earth radius in meters, shared by every great-circle computation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Square meters per acre (1 acre = 4046.8564224 m²).
pub const SQ_METERS_PER_ACRE: f64 = 4_046.856_422_4;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
