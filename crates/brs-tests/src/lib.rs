//! Shared fixtures for the integration tests and benchmarks.

pub mod fixture;
