/// Tangency constructions used to generate candidate positions
pub mod tangency;

pub mod geo_traits;
pub mod primitives;
