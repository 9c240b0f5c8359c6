//! Shared helpers for in-crate property tests.
