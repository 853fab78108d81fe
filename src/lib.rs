//! Notadinas - official travel memorandum administration
//!
//! Keeps the employee, official, destination and activity-code registers,
//! stages memorandum forms as drafts, resolves and lays them out for print,
//! and persists them as numbered Nota Dinas records.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod nota;
pub mod routes;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
