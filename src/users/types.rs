use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as exchanged with the API.
///
/// Only `username` is interpreted on this side. Every other field the server
/// sends lands in [`User::extra`] untouched, so server-assigned data survives
/// a round-trip even when this client has never heard of it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
