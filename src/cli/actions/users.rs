//! CRUD actions: thin drivers around [`UserApi`] that print the server's
//! JSON to stdout.

use crate::config::ApiConfig;
use crate::users::client::UserApi;
use crate::users::legacy::{LegacyExport, LegacyUser};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// # Errors
/// Returns an error if the request fails.
pub async fn list(config: &ApiConfig) -> Result<()> {
    let api = UserApi::new(config)?;
    let users = api.list().await?;

    print_json(&users)
}

/// # Errors
/// Returns an error if the request fails.
pub async fn get(config: &ApiConfig, username: &str) -> Result<()> {
    let api = UserApi::new(config)?;
    let user = api.get(username).await?;

    print_json(&user)
}

/// # Errors
/// Returns an error if the request fails.
pub async fn create(config: &ApiConfig, payload: &Value) -> Result<()> {
    let api = UserApi::new(config)?;
    let created = api.create(payload).await?;

    print_json(&created)
}

/// # Errors
/// Returns an error if the request fails.
pub async fn update(config: &ApiConfig, username: &str, payload: &Value) -> Result<()> {
    let api = UserApi::new(config)?;
    let updated = api.update(username, payload).await?;

    print_json(&updated)
}

/// # Errors
/// Returns an error if the request fails.
pub async fn delete(config: &ApiConfig, username: &str) -> Result<()> {
    let api = UserApi::new(config)?;
    let ack = api.delete(username).await?;

    print_json(&ack)
}

/// Imports a legacy JSON export by pushing each record through the create
/// endpoint. Records decode one at a time, so the run stops at the first
/// record that fails to decode, map, or create; earlier records stay
/// imported.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, a record cannot be
/// decoded or mapped, or a create request fails.
pub async fn import(config: &ApiConfig, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("cannot read export file {}", file.display()))?;
    let export = LegacyExport::from_json(&raw)
        .with_context(|| format!("cannot parse export file {}", file.display()))?;

    let api = UserApi::new(config)?;

    let mut imported = 0usize;
    for record in &export.users {
        let record = LegacyUser::from_value(record)?;
        let payload = record.to_payload()?;
        api.create(&payload)
            .await
            .with_context(|| format!("failed to import user {}", record.user))?;

        info!("imported user {}", record.user);
        imported += 1;
    }

    println!("imported {imported} users");

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
