//! API integration test suite.
//!
//! Drives the real route configuration against a fresh in-memory SQLite
//! database per test; no external services are needed.
//!
//! Run with: cargo test --test api


mod test_catalog;
mod test_lotes;
