//! Net pay engine for Ugandan salaries.
//!
//! This crate computes PAYE income tax and NSSF contributions from a gross
//! salary, keeps a bounded history of calculations, and serves both over a
//! small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod history;
pub mod models;
