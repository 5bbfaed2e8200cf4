//! Core domain types and configuration.

pub mod config;
pub mod models;
