use std::fmt::Display;

use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::catalog::NamedTemplate;
use crate::models::Outcome;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    /// Prints the outcome's rendering, green on success and red on failure,
    /// followed by the payload if one is attached.
    pub fn outcome<T: Serialize + Display>(&self, outcome: &Outcome<T>) -> Result<()> {
        if self.json {
            return self.print_json(outcome);
        }

        let rendered = outcome.to_string();
        let styled = if outcome.is_success() {
            style(rendered).green()
        } else {
            style(rendered).red()
        };
        self.term.write_line(&styled.to_string())?;

        if let Some(data) = outcome.data() {
            self.term
                .write_line(&format!("  Data: {}", style(data).cyan()))?;
        }
        Ok(())
    }

    pub fn catalog(&self, entries: &[NamedTemplate]) -> Result<()> {
        if self.json {
            return self.print_json(entries);
        }

        if entries.is_empty() {
            self.term.write_line("No templates found.")?;
            return Ok(());
        }

        for entry in entries {
            let origin = if entry.builtin { "" } else { " (custom)" };
            self.term.write_line(&format!(
                "{}{}",
                style(&entry.name).cyan().bold(),
                style(origin).dim()
            ))?;
            self.term
                .write_line(&format!("  Template: {}", entry.template))?;
        }
        Ok(())
    }
}
