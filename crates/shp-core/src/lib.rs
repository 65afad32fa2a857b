//! Core types for the shp CLI.
//!
//! This crate contains:
//! - The `BuildRun` custom resource (`shipwright.io/v1alpha1`)
//! - The client trait used to fetch BuildRuns
//! - Display row extraction for `buildrun list`
//! - Compact age formatting

pub mod age;
pub mod buildrun;
pub mod client;
pub mod error;
pub mod row;

pub use buildrun::BuildRun;
pub use client::BuildRunClient;
pub use error::{Error, Result};
pub use row::BuildRunRow;
