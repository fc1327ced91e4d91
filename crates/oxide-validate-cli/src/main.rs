//! oxide-validate CLI
//!
//! Validates raw values against fields described on the command line and
//! prints the coerced values and error report as JSON.

mod args;
mod input;

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_validate::fields::DEFAULT_DATE_FORMAT;
use oxide_validate::{FieldValue, Form, ValidationErrors};

use crate::args::{parse_pair, FieldArg};

/// Validate raw input values against typed fields.
#[derive(Parser)]
#[command(name = "oxide-validate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Field as name:kind[:flag,...] (kinds: text, decimal, bool, date;
    /// flags: optional, nostrip, common, format=<fmt>). Repeat in order.
    #[arg(short, long = "field", required = true)]
    fields: Vec<FieldArg>,

    /// Default format for date fields.
    #[arg(
        short,
        long,
        env = "OXIDE_VALIDATE_DATE_FORMAT",
        default_value = DEFAULT_DATE_FORMAT
    )]
    date_format: String,

    /// JSON object of raw values; `-` reads standard input.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Raw values as name=value, overriding --data.
    #[arg(value_parser = parse_pair)]
    values: Vec<(String, String)>,
}

#[derive(Serialize)]
struct Report {
    valid: bool,
    values: HashMap<String, FieldValue>,
    errors: ValidationErrors,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut data = match &cli.data {
        Some(path) => input::load(path)?,
        None => oxide_validate::RawData::new(),
    };
    input::overlay(&mut data, cli.values);
    debug!(keys = data.len(), "loaded raw values");

    let fields = cli
        .fields
        .iter()
        .map(|arg| arg.to_field(&cli.date_format))
        .collect::<oxide_validate::Result<Vec<_>>>()
        .context("invalid field definition")?;

    let mut form = Form::new(fields, &data);
    let valid = form.validate();
    if valid {
        info!("all {} fields valid", form.len());
    } else {
        info!("{} error(s)", form.errors().len());
    }

    let report = Report {
        valid,
        values: form.values(),
        errors: form.errors().clone(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
