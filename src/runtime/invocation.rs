use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::{error, info, warn};

use crate::{
    app::Config,
    cli::Cli,
    constants::{ERROR_PREFIX, USAGE},
    models::{ChatCompletionRequest, Model, ProxyModel},
    utils::{init_logger, AskError},
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;

/// Handle one invocation: parse `args` (argv including the program name),
/// query the proxy and write everything user-facing to `out`.
///
/// Returns the process exit code. Request failures are reported on `out` and
/// still exit 0; only a missing argument exits 1.
pub async fn run<I, T, W>(args: I, out: &mut W) -> io::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    run_with_config(args, &Config::default(), out).await
}

/// [`run`] against the proxy described by `config`
pub async fn run_with_config<I, T, W>(args: I, config: &Config, out: &mut W) -> io::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e)?;
            return Ok(EXIT_SUCCESS);
        }
        Err(_) => {
            writeln!(out, "{}", USAGE)?;
            return Ok(EXIT_USAGE);
        }
    };

    if cli.verbose {
        init_logger();
    }

    execute(&cli, config, out).await?;
    Ok(EXIT_SUCCESS)
}

/// Print the status line, send the prompt to the proxy in `config` and print the reply
pub async fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> io::Result<()> {
    print_status(cli, out)?;

    if !cli.extra.is_empty() {
        warn!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    match ProxyModel::new(config) {
        Ok(model) => ask(&model, &cli.model_name, &cli.prompt, out).await,
        Err(e) => report_error(&e, out),
    }
}

/// Send `prompt` as the only user message and print the first choice, or the error
pub async fn ask<W: Write>(
    model: &dyn Model,
    model_name: &str,
    prompt: &str,
    out: &mut W,
) -> io::Result<()> {
    let request = ChatCompletionRequest::single_prompt(model_name, prompt);
    info!("Querying {} via {}", model_name, model.endpoint());

    match model.chat(&request).await {
        Ok(response) => writeln!(out, "{}", response.content),
        Err(e) => report_error(&e, out),
    }
}

fn print_status<W: Write>(cli: &Cli, out: &mut W) -> io::Result<()> {
    writeln!(out, "--- Querying Model: {} ---", cli.model_name)?;
    // The reply can take a while; make sure the status line is visible meanwhile
    out.flush()
}

fn report_error<W: Write>(err: &AskError, out: &mut W) -> io::Result<()> {
    error!("Request failed: {:?}", err);
    writeln!(out, "{}{}", ERROR_PREFIX, err)
}
