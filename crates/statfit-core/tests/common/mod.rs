//! Shared fixtures for statfit-core integration tests

pub mod fixtures;
pub mod samples;
