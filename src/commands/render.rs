use std::fmt::Display;

use anyhow::{Context, Result, bail};

use crate::catalog::Catalog;
use crate::models::Outcome;

/// Builds an outcome from CLI input.
///
/// The template comes from the catalog when `template` names an entry, or is
/// taken literally from `message`. `notes` are appended after it verbatim.
pub fn run(
    fail: bool,
    template: Option<String>,
    message: Option<String>,
    args: Vec<String>,
    notes: Vec<String>,
    data: Option<String>,
    catalog: &Catalog,
) -> Result<Outcome<String>> {
    let template = match (template, message) {
        (Some(name), _) => Some(catalog.get(&name)?.to_owned()),
        (None, message) => message,
    };

    let outcome = if fail {
        Outcome::<String>::fail_with(data)
    } else {
        Outcome::<String>::succeed_with(data)
    };

    let outcome = match template {
        Some(template) => {
            let args: Vec<&dyn Display> = args.iter().map(|arg| arg as &dyn Display).collect();
            outcome
                .with_message(&template, &args)
                .with_context(|| format!("Failed to render template: {template}"))?
        }
        None if !args.is_empty() => bail!("--arg requires --template or --message"),
        None => outcome,
    };

    Ok(outcome.with_list_of(notes))
}
