//! Command-line argument dispatch.
//!
//! This module maps validated CLI arguments to the action to execute, parsing
//! payload arguments into JSON along the way.

use crate::cli::actions::Action;
use crate::cli::commands::ARG_API_URL;
use crate::config::ApiConfig;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or a payload is not a
/// JSON object.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = ApiConfig::new(
        matches
            .get_one::<String>(ARG_API_URL)
            .cloned()
            .context("missing required argument: --api-url")?,
    );

    match matches.subcommand() {
        Some(("list", _)) => Ok(Action::List { config }),
        Some(("get", sub)) => Ok(Action::Get {
            config,
            username: required_string(sub, "username")?,
        }),
        Some(("create", sub)) => Ok(Action::Create {
            config,
            payload: payload_object(sub)?,
        }),
        Some(("update", sub)) => Ok(Action::Update {
            config,
            username: required_string(sub, "username")?,
            payload: payload_object(sub)?,
        }),
        Some(("delete", sub)) => Ok(Action::Delete {
            config,
            username: required_string(sub, "username")?,
        }),
        Some(("import", sub)) => Ok(Action::Import {
            config,
            file: sub
                .get_one::<PathBuf>("file")
                .cloned()
                .context("missing required argument: file")?,
        }),
        Some(("view", sub)) => Ok(Action::View {
            config,
            path: required_string(sub, "path")?,
        }),
        _ => Err(anyhow!("missing subcommand")),
    }
}

fn required_string(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: {name}"))
}

fn payload_object(matches: &clap::ArgMatches) -> Result<Value> {
    let raw = required_string(matches, "payload")?;

    let payload: Value = serde_json::from_str(&raw).context("payload is not valid JSON")?;
    if !payload.is_object() {
        return Err(anyhow!("payload must be a JSON object"));
    }

    Ok(payload)
}
