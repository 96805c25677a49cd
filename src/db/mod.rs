//! Database layer (per-user log series).

pub mod log_store;

pub use log_store::LogStore;
