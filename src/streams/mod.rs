pub mod dataset;
pub mod synthetic;

pub use dataset::{Dataset, DatasetError};
pub use synthetic::LaneChangeGenerator;
