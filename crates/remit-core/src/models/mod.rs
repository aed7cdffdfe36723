//! Data models for payment orders, configuration and directory lookups.

pub mod config;
pub mod directory;
pub mod order;
