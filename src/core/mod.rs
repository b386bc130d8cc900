pub mod access;
pub mod aggregator;
pub mod classifier;
pub mod import;
pub mod log;
pub mod logic;
pub mod records;
