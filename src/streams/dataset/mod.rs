mod loader;
mod parser;

pub use loader::{Dataset, load_labels, load_states};
pub use parser::{DatasetError, parse_state_line};
