//! Implementation of the `soilhealth eval` command.

use std::collections::HashMap;

use miette::{miette, IntoDiagnostic, Report};
use serde::Serialize;
use soilhealth::Expression;

use super::parse_key_val;
use crate::output::ExprDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Expression to evaluate, e.g. "(sand + silt) / clay"
    pub expression: String,

    /// Variables in name=value format (repeatable)
    #[arg(short = 's', long = "set", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult<'a> {
    pub expression: &'a str,
    /// `null` when the result is NaN.
    pub result: f64,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let env: HashMap<String, f64> = args
        .vars
        .iter()
        .map(|(name, value)| {
            value
                .trim()
                .parse::<f64>()
                .map(|n| (name.clone(), n))
                .map_err(|e| miette!("invalid number for '{}': {}", name, e))
        })
        .collect::<miette::Result<_>>()?;

    let expression = match Expression::parse(&args.expression) {
        Ok(expression) => expression,
        Err(e) => {
            let diagnostic = ExprDiagnostic::from_expr_error("expression", &args.expression, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    let result = expression.eval(&env);
    if args.json {
        let output = EvalResult {
            expression: expression.source(),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
