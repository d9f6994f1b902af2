pub mod users;
pub mod view;

// The match over `Action` lives in its own module so this one stays
// declarative as actions are added.
mod run;

use crate::config::ApiConfig;
use serde_json::Value;
use std::path::PathBuf;

/// Everything the CLI can be asked to do.
#[derive(Debug)]
pub enum Action {
    List {
        config: ApiConfig,
    },
    Get {
        config: ApiConfig,
        username: String,
    },
    Create {
        config: ApiConfig,
        payload: Value,
    },
    Update {
        config: ApiConfig,
        username: String,
        payload: Value,
    },
    Delete {
        config: ApiConfig,
        username: String,
    },
    Import {
        config: ApiConfig,
        file: PathBuf,
    },
    View {
        config: ApiConfig,
        path: String,
    },
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
