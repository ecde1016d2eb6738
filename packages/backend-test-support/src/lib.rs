//! Test support for the Xeri backend
//!
//! Shared by the backend integration tests: one logging bootstrap and a few
//! helpers for generating non-colliding test data.

pub mod logging;
pub mod unique_helpers;
