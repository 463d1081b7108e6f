//! Command-line interface for modelrank
//!
//! This module parses the command line, loads configuration, sets up logging, and drives
//! a scoring run from a URL file to NDJSON output.
//!
//! # Implementation Model
//!
//! [`run`] parses arguments with clap and hands off to [`score_url_file`], which reads the
//! URL list, classifies each line, and feeds the models to the scoring orchestrator. Only
//! models are scored; dataset, code, and unrecognized URLs are counted and dropped.
//!
//! All I/O goes through a [`Host`], so the whole command can run in-process against
//! in-memory buffers.
//!
//! Configuration is a TOML file holding timeouts, the hub endpoint, metric weights, and
//! hardware targets. The built-in defaults live in `default_config.toml`.

mod config;
mod host;
mod logging;
mod run;
mod score;

pub use config::{Config, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use logging::init_logging;
pub use run::run;
pub use score::score_url_file;
