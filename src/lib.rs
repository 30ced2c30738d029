//! SGT server library.
//!
//! Record keeping for equipment test campaigns: lotes (batches), the test
//! catalog (classes and items) and per-equipment test results, exposed as a
//! JSON API over a relational store.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
