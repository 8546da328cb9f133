//! Rules command for printing the active scoring rules.

use std::path::Path;

use anyhow::Result;

use crate::cli::RulesFormat;
use crate::cli_utils;

pub fn run(format: RulesFormat, rules: Option<&Path>) -> Result<()> {
    let rules = cli_utils::load_rules(rules)?;
    match format {
        RulesFormat::Toml => {
            print!("{}", rules.to_toml()?);
            Ok(())
        }
        RulesFormat::Json => cli_utils::emit_json(&rules, None),
    }
}
