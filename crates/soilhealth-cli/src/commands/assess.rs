//! Implementation of the `soilhealth assess` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use soilhealth::{Engine, InputValues, Verdict};

use super::parse_key_val;
use crate::load::{load_parameters, load_values};
use crate::output::table::{format_assessment_table, format_summary};

/// Arguments for the assess command.
#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Parameter definitions (.json)
    #[arg(long)]
    pub params: PathBuf,

    /// Test values as a JSON object keyed by parameter id
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// Test values in id=value format (repeatable, overrides --values)
    #[arg(short = 's', long = "set", value_parser = parse_key_val)]
    pub overrides: Vec<(String, String)>,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code unless the overall verdict is healthy.
    #[arg(long)]
    pub strict: bool,
}

/// Run the assess command.
pub fn run_assess(args: AssessArgs) -> Result<i32> {
    let parameters = match load_parameters(&args.params) {
        Ok(parameters) => parameters,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(e.exit_code());
        }
    };

    let mut inputs = match &args.values {
        Some(path) => match load_values(path) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(e.exit_code());
            }
        },
        None => InputValues::new(),
    };
    inputs.extend(args.overrides);

    let assessment = Engine::default().assess(&parameters, &inputs);

    if args.json {
        let json_output = serde_json::to_string_pretty(&assessment).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_assessment_table(&parameters, &assessment.rows);
        println!("{}", table);
        println!("\n{}", format_summary(&assessment.summary));
    }

    if args.strict && assessment.summary.verdict != Verdict::Healthy {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
