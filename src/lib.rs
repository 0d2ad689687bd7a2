pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod results;
pub mod summary;
