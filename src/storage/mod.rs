pub mod loader;

pub use loader::{load, save_results};
