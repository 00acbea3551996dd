//! Sentiment and emotion breakdowns for batches of short comments, produced by
//! a Claude text-completion call and parsed back into structured results.

pub mod analysis;
pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod storage;

pub use error::{Error, Result, ValidationError};
