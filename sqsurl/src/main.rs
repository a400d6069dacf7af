//! sqsurl - SQS queue URL inspector
//!
//! Prints the queue name, account ID and region recovered from each URL given
//! on the command line, or from each line of stdin when no URL is given.

mod config;
mod output;

use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sqsurl_core::{parse_url, SqsRemoteResource};

use crate::config::Config;
use crate::output::{render_parsed, render_resource, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "sqsurl")]
#[command(about = "Extract queue name, account ID and region from SQS queue URLs", long_about = None)]
struct Args {
    /// Queue URLs to parse (reads stdin, one per line, when omitted)
    urls: Vec<String>,

    /// Output format (json or text)
    #[arg(short, long, env = "SQSURL_FORMAT")]
    format: Option<OutputFormat>,

    /// Print remote resource attributes instead of the parsed components
    #[arg(short, long, env = "SQSURL_ATTRIBUTES")]
    attributes: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SQSURL_LOG_LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    let log_level = args.log_level.unwrap_or(config.log.level);
    let format = args.format.unwrap_or(config.output.format);
    let attributes = args.attributes || config.output.attributes;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sqsurl={},sqsurl_core={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!(?format, attributes, "Starting sqsurl");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.urls.is_empty() {
        process_lines(io::stdin().lock(), &mut out, format, attributes)?;
    } else {
        for url in &args.urls {
            write_line(&mut out, url, format, attributes)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Write one output line per input line; lines are not trimmed
fn process_lines(
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
    attributes: bool,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        write_line(out, &line, format, attributes)?;
    }
    Ok(())
}

fn write_line(
    out: &mut impl Write,
    url: &str,
    format: OutputFormat,
    attributes: bool,
) -> anyhow::Result<()> {
    let line = if attributes {
        let resource = SqsRemoteResource::from_queue_url(Some(url));
        render_resource(resource.as_ref(), format)?
    } else {
        let parsed = parse_url(Some(url));
        if parsed.is_empty() {
            info!(url = %url, "Not an SQS queue URL");
        }
        render_parsed(url, &parsed, format)?
    };

    writeln!(out, "{}", line)?;
    Ok(())
}
