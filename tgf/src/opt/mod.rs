pub mod greedy;
pub mod loss;
pub mod multi_seed;
pub mod nested;
pub mod search;
pub mod spiral;
pub mod tgf_optimizer;
