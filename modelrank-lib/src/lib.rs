#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for modelrank
//!
//! This library consolidates all functionality for the modelrank tool, which scores
//! machine-learning models hosted on the Hugging Face hub against a fixed set of
//! quality metrics and emits one NDJSON record per model.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface, configuration, and logging setup
//! - [`facts`]: URL classification and model metadata retrieval
//! - [`metrics`]: The metric evaluators and their shared contract
//! - [`scoring`]: Concurrent metric orchestration and net score aggregation
//! - [`reports`]: NDJSON record emission

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod facts;
pub mod metrics;
pub mod reports;
pub mod scoring;

pub use crate::commands::{Host, run};
