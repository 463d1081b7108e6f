//! Command dispatch logic for modelrank

use super::{Config, init_logging, score_url_file};
use crate::facts::HubProvider;
use crate::scoring::BatchSummary;
use crate::{Host, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use std::io::Write;
use std::sync::Arc;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "modelrank", version, author, long_about = None)]
#[command(about = "Score machine-learning models hosted on the Hugging Face hub")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// File listing one URL per line
    #[arg(value_name = "URL_FILE")]
    url_file: Utf8PathBuf,

    /// Path to a configuration file replacing the built-in defaults
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Hugging Face access token
    #[arg(long, value_name = "TOKEN", env = "HF_TOKEN", hide_env_values = true)]
    hf_token: Option<String>,
}

/// Parse command-line arguments and score the models they point at
///
/// It's designed to be called from main.rs with the program arguments. Records go to the
/// host's output; a fatal error is reported on the host's error stream, followed by exit code 1.
///
/// # Errors
///
/// Returns an error if the URL file can't be read, the configuration is invalid, or output fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(host);

    match execute(host, &cli).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "error: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

async fn execute<H: Host>(host: &mut H, cli: &Cli) -> Result<BatchSummary> {
    let config = Config::load(cli.config.as_deref())?;
    let provider = HubProvider::new(cli.hf_token.as_deref(), config.hub_endpoint()?, config.request_timeout)?;

    score_url_file(host, &cli.url_file, &config, Arc::new(provider)).await
}
