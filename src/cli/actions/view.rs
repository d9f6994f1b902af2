//! Navigation action: resolve a path against the route table and render the
//! view it addresses with data fetched through the client.

use crate::config::ApiConfig;
use crate::routes::{self, View};
use crate::users::client::UserApi;
use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Resolve `path` and render the matching view.
///
/// # Errors
/// Returns an error if no route matches or the backing request fails.
pub async fn execute(config: &ApiConfig, path: &str) -> Result<()> {
    let matched = routes::resolve(path).ok_or_else(|| anyhow!("no route matches {path}"))?;

    debug!("route {} renders {:?}", matched.route.name, matched.route.view);

    let api = UserApi::new(config)?;

    match matched.route.view {
        View::UserTable => {
            let users = api.list().await?;
            for user in &users {
                println!("{}", user.username);
            }
        }
        View::UserDetail => {
            let username = matched
                .param("username")
                .context("route carries no username")?;
            let user = api.get(username).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }

    Ok(())
}
