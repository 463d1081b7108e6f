//! A tool to score machine-learning models hosted on the Hugging Face hub.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use modelrank_lib::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host bound to the process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout().lock()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
