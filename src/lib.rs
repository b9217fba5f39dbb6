//! Success/failure outcomes with ordered diagnostic messages and an optional
//! typed payload.
//!
//! [`Outcome`] lets an operation report failure as data instead of as an
//! error: callers branch on [`Outcome::is_success`] and read
//! [`Outcome::messages`] for diagnostics. The only error in the core is a
//! [`FormatError`] from a message template that does not match its arguments.
//!
//! The `outcome` binary built from this crate composes outcomes from the
//! command line, which is handy for trying out catalog templates.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod helpers;
pub mod logger;
pub mod models;
pub mod output;
pub mod template;

use anyhow::Result;
use std::path::Path;

use catalog::Catalog;
use cli::{Cli, Commands};
use output::Output;

pub use error::FormatError;
pub use models::Outcome;

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path),
        None => Ok(Catalog::builtin()),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            fail,
            template,
            message,
            args,
            notes,
            data,
            catalog,
            json,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let outcome =
                commands::render::run(fail, template, message, args, notes, data, &catalog)?;
            Output::new(json).outcome(&outcome)
        }
        Commands::Catalog { catalog, json } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let entries = commands::catalog::run(&catalog);
            Output::new(json).catalog(&entries)
        }
    }
}
