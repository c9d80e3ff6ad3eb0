//! Implementation of the `soilhealth check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use serde::Serialize;
use soilhealth::{lint_parameters, LintWarning};

use crate::load::load_parameters;
use crate::output::ExprDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Parameter definitions (.json)
    #[arg(long)]
    pub params: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let parameters = match load_parameters(&args.params) {
        Ok(parameters) => parameters,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(e.exit_code());
        }
    };

    let warnings = lint_parameters(&parameters);

    if args.json {
        let output = CheckJson {
            warnings: warnings.iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if warnings.is_empty() {
        println!("{}: no problems found", args.params.display());
    } else {
        for warning in &warnings {
            match warning {
                LintWarning::InvalidExpression {
                    parameter,
                    expression,
                    error,
                } => {
                    let name = format!("{}#{}", args.params.display(), parameter);
                    let diagnostic = ExprDiagnostic::from_expr_error(&name, expression, error);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                LintWarning::DuplicateId { .. }
                | LintWarning::UnknownReference { .. }
                | LintWarning::CyclicReference { .. } => eprintln!("warning: {}", warning),
            }
        }
        eprintln!("\n{} problem(s) found", warnings.len());
    }

    if warnings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
