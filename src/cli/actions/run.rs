use crate::cli::actions::{Action, users, view};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions. To add a new action, add a new
// `Action::*` variant and a corresponding call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::List { config } => users::list(&config).await,
        Action::Get { config, username } => users::get(&config, &username).await,
        Action::Create { config, payload } => users::create(&config, &payload).await,
        Action::Update {
            config,
            username,
            payload,
        } => users::update(&config, &username, &payload).await,
        Action::Delete { config, username } => users::delete(&config, &username).await,
        Action::Import { config, file } => users::import(&config, &file).await,
        Action::View { config, path } => view::execute(&config, &path).await,
    }
}
