pub mod classifier;
pub mod diagnostic;
pub mod narrative;
pub mod sector;
pub mod stats;
pub mod trend;
