mod types;

pub use types::Restaurant;
