pub mod ring_sampler;
pub mod tangent_sampler;
