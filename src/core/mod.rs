pub mod estimators;
pub mod frenet;
pub mod label;

pub use frenet::{FRENET_FEATURES, FrenetState};
pub use label::Label;
