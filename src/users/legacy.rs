//! Conversion of legacy user exports into create payloads.
//!
//! The old deployment dumped accounts as `{"users": [...]}` with flag-style
//! role fields and an RFC 3339 creation date. The API expects a role list,
//! nested preferences, and epoch seconds. Only the mapping lives here;
//! submission goes through the regular create operation like any other
//! caller.

use anyhow::{Context, Result};
use chrono::DateTime;
use serde::Deserialize;
use serde_json::{Value, json};

/// Top-level shape of a legacy export file. Records stay raw JSON; the
/// importer decodes them one at a time, so a malformed record surfaces only
/// once the run reaches it.
#[derive(Debug, Deserialize)]
pub struct LegacyExport {
    #[serde(default)]
    pub users: Vec<Value>,
}

impl LegacyExport {
    /// Parse an export from its JSON text. A file without a `users` key is
    /// treated as an empty export.
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or `users` is not an
    /// array.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid legacy export")
    }
}

/// One account record of a legacy export. `is_user_active` defaulted to true
/// in the old importer, the role flags to false.
#[derive(Debug, Deserialize)]
pub struct LegacyUser {
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_user_admin: bool,
    #[serde(default)]
    pub is_user_manager: bool,
    #[serde(default)]
    pub is_user_tester: bool,
    #[serde(default)]
    pub user_timezone: Option<String>,
    #[serde(default = "default_active")]
    pub is_user_active: bool,
    pub created_at: String,
}

const fn default_active() -> bool {
    true
}

impl LegacyUser {
    /// Decodes one raw export record.
    ///
    /// # Errors
    /// Returns an error if the record is not an object or is missing required
    /// fields.
    pub fn from_value(record: &Value) -> Result<Self> {
        serde_json::from_value(record.clone()).with_context(|| match record.get("user") {
            Some(Value::String(user)) => format!("invalid legacy record for user {user}"),
            _ => "invalid legacy record".to_string(),
        })
    }

    /// Maps this record onto a create payload.
    ///
    /// # Errors
    /// Returns an error if `created_at` is not a valid RFC 3339 timestamp.
    pub fn to_payload(&self) -> Result<Value> {
        let mut roles = Vec::new();
        if self.is_user_admin {
            roles.push("admin");
        }
        if self.is_user_manager {
            roles.push("manager");
        }
        if self.is_user_tester {
            roles.push("tester");
        }

        let created = DateTime::parse_from_rfc3339(&self.created_at).with_context(|| {
            format!(
                "invalid created_at for user {}: {}",
                self.user, self.created_at
            )
        })?;
        #[allow(clippy::cast_precision_loss)]
        let created_ts = created.timestamp_micros() as f64 / 1_000_000.0;

        Ok(json!({
            "username": self.user,
            "password": self.password,
            "roles": roles,
            "preferences": {
                "timezone": self.user_timezone,
            },
            "active": self.is_user_active,
            "created_ts": created_ts,
        }))
    }
}
