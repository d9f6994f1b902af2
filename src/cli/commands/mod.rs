use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use clap::{
    Arg, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_VERBOSITY: &str = "verbosity";

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("uzanto")
        .about("User management API client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the user API")
                .default_value(DEFAULT_API_URL)
                .env(API_URL_ENV)
                .global(true),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("UZANTO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("list").about("List all users"))
        .subcommand(
            Command::new("get").about("Show one user").arg(
                Arg::new("username")
                    .help("Username identifying the user")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("create").about("Create a user").arg(
                Arg::new("payload")
                    .help("User fields as a JSON object, example: {\"name\": \"Bob\"}")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("update")
                .about("Update a user")
                .arg(
                    Arg::new("username")
                        .help("Username identifying the user")
                        .required(true),
                )
                .arg(
                    Arg::new("payload")
                        .help("Fields to change as a JSON object")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("delete").about("Delete a user").arg(
                Arg::new("username")
                    .help("Username identifying the user")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("import")
                .about("Import users from a legacy JSON export")
                .arg(
                    Arg::new("file")
                        .help("Path to the export file")
                        .required(true)
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Resolve a navigation path and render its view")
                .arg(
                    Arg::new("path")
                        .help("Navigation path, example: / or /user/alice")
                        .required(true),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "uzanto");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "User management API client"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_subcommand_required() {
        let command = new();
        let result = command.try_get_matches_from(vec!["uzanto"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_url_default() {
        temp_env::with_vars([(API_URL_ENV, None::<&str>)], || {
            let command = new();
            let matches = command.get_matches_from(vec!["uzanto", "list"]);
            assert_eq!(
                matches
                    .get_one::<String>(ARG_API_URL)
                    .map(|s| s.to_string()),
                Some("http://localhost:5000/api".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                (API_URL_ENV, Some("https://users.example.com/api")),
                ("UZANTO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["uzanto", "list"]);
                assert_eq!(
                    matches
                        .get_one::<String>(ARG_API_URL)
                        .map(|s| s.to_string()),
                    Some("https://users.example.com/api".to_string())
                );
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("UZANTO_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["uzanto", "list"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("UZANTO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["uzanto".to_string(), "list".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();
                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_get_requires_username() {
        let command = new();
        let result = command.try_get_matches_from(vec!["uzanto", "get"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_takes_username_and_payload() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "uzanto",
            "update",
            "alice",
            r#"{"timezone": "UTC"}"#,
        ]);

        let (name, sub) = matches.subcommand().expect("subcommand");
        assert_eq!(name, "update");
        assert_eq!(
            sub.get_one::<String>("username").map(|s| s.to_string()),
            Some("alice".to_string())
        );
        assert_eq!(
            sub.get_one::<String>("payload").map(|s| s.to_string()),
            Some(r#"{"timezone": "UTC"}"#.to_string())
        );
    }
}
