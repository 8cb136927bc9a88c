//! # Row Version Subcommand
//!
//! Build a row version from one of its views and print its encodings.
//!
//! ```bash
//! vtypes row-version --u64 10
//! vtypes row-version --hex 0x00136B409C139AF5 --format h
//! vtypes row-version --bytes 11,0,0,0,0,0,0,0 --json
//! vtypes row-version --ticks 636503616000000000 --format M
//! ```

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use serde::Serialize;

use vtypes_rowversion::{RowVersion, RowVersionFormat};

/// Arguments for the row-version subcommand.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["hex", "bytes", "value", "ticks"])
))]
pub struct RowVersionArgs {
    /// General (`0x000000000000000a`) or HexViewer (`0a 00 00 00 00 00 00 00`) text.
    #[arg(long)]
    pub hex: Option<String>,

    /// Eight comma-separated byte values in storage order.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub bytes: Option<Vec<u8>>,

    /// Unsigned 64-bit value.
    #[arg(long = "u64")]
    pub value: Option<u64>,

    /// Signed tick count (100ns since 0001-01-01).
    #[arg(long, allow_hyphen_values = true)]
    pub ticks: Option<i64>,

    /// One format selector (G g S s O o M m H h). All encodings when omitted.
    #[arg(long, short)]
    pub format: Option<String>,

    /// Print the encodings as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EncodingLine {
    format: String,
    text: Option<String>,
    error: Option<String>,
}

/// Execute the row-version subcommand.
pub fn run_row_version(args: &RowVersionArgs) -> Result<u8> {
    let row_version = parse_source(args)?;
    tracing::debug!(value = row_version.to_u64(), "row version built");

    if let Some(format) = &args.format {
        let text = row_version
            .format(format)
            .with_context(|| format!("cannot render format {format:?}"))?;
        println!("{text}");
        return Ok(0);
    }

    let lines = render_all(&row_version);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in &lines {
            match (&line.text, &line.error) {
                (Some(text), _) => println!("  {}  {text}", line.format),
                (None, Some(error)) => println!("  {}  <{error}>", line.format),
                (None, None) => {}
            }
        }
    }
    Ok(0)
}

/// Build the row version named by whichever source flag was given.
pub fn parse_source(args: &RowVersionArgs) -> Result<RowVersion> {
    if let Some(text) = &args.hex {
        return text
            .parse::<RowVersion>()
            .with_context(|| format!("cannot parse row version text {text:?}"));
    }
    if let Some(bytes) = &args.bytes {
        return RowVersion::from_slice(bytes).context("--bytes needs exactly eight values");
    }
    if let Some(value) = args.value {
        return Ok(RowVersion::from_u64(value));
    }
    if let Some(ticks) = args.ticks {
        return Ok(RowVersion::from_ticks(ticks));
    }
    anyhow::bail!("one of --hex, --bytes, --u64 or --ticks is required")
}

fn render_all(row_version: &RowVersion) -> Vec<EncodingLine> {
    RowVersionFormat::ALL
        .iter()
        .map(|format| match row_version.format_with(*format) {
            Ok(text) => EncodingLine {
                format: format.to_string(),
                text: Some(text),
                error: None,
            },
            Err(err) => EncodingLine {
                format: format.to_string(),
                text: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}
