//! Shared fixtures for unit tests.
//!
//! Type descriptors that several validators are tested against live in [`factories`],
//! so each test states only what makes its scenario different.

pub mod factories;
