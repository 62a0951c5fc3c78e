pub mod error;
pub mod health;
pub mod restaurants;

pub use error::AppError;
