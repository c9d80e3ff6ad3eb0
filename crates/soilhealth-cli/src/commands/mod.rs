//! CLI command implementations.

mod assess;
mod check;
mod eval;

pub use assess::{run_assess, AssessArgs};
pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};

/// Parse a key=value argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid value format '{}': expected name=value", s))?;
    Ok((s[..pos].trim().to_string(), s[pos + 1..].to_string()))
}
