//! # Data Transfer Objects

pub mod client_config;
pub mod submission;
