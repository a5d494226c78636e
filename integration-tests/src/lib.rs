//! Shared fixtures for the cross-solver integration tests.
//!
//! Random systems come from [`SystemGenerator`], which is seeded so every
//! test run sees the same matrices.

mod generator;

pub use generator::SystemGenerator;
