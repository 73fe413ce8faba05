pub mod error;
pub mod passes;
pub mod spectrum;
pub mod trajectories;
