use crate::error::AppError;
use crate::source::{ApiSchema, NodeIdScheme, SourceOptions};
use crate::types::{AccessToken, Endpoint, ValidatedUrl};
use clap::Parser;
use std::path::PathBuf;

/// Project base URL, e.g. `https://example.hacocms.com/`.
pub const BASE_URL_ENV: &str = "HACOCMS_BASE_URL";
/// Project access token.
pub const ACCESS_TOKEN_ENV: &str = "HACOCMS_ACCESS_TOKEN";
/// Optional project draft token.
pub const DRAFT_TOKEN_ENV: &str = "HACOCMS_PROJECT_DRAFT_TOKEN";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// List API endpoint to source (repeatable), e.g. `--list entries`
    #[arg(short = 'l', long = "list", value_name = "ENDPOINT")]
    pub list: Vec<String>,

    /// Single-item API endpoint to source (repeatable)
    #[arg(short = 's', long = "single", value_name = "ENDPOINT")]
    pub single: Vec<String>,

    /// Write the created nodes as JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Records requested per page (1-100)
    #[arg(long, default_value_t = crate::constants::HACOCMS_PAGE_LIMIT)]
    pub page_limit: u32,

    /// Prefix mixed into every node id seed
    #[arg(long)]
    pub namespace: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated and ready to drive a sourcing run.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: ValidatedUrl,
    pub access_token: AccessToken,
    pub draft_token: Option<AccessToken>,
    /// List APIs first, then single APIs, each in command-line order.
    pub apis: Vec<ApiSchema>,
    pub options: SourceOptions,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
}

impl SourceConfig {
    /// Resolves a complete configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with_env(cli, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration, reading variables through `env`.
    pub fn resolve_with_env<F>(cli: CommandLineInput, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = env(BASE_URL_ENV).ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", BASE_URL_ENV))
        })?;
        let access_token = env(ACCESS_TOKEN_ENV).ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                ACCESS_TOKEN_ENV
            ))
        })?;
        let draft_token = env(DRAFT_TOKEN_ENV)
            .filter(|token| !token.is_empty())
            .map(AccessToken::new)
            .transpose()?;

        let apis = cli
            .list
            .into_iter()
            .map(|name| Endpoint::new(name).map(ApiSchema::list))
            .chain(
                cli.single
                    .into_iter()
                    .map(|name| Endpoint::new(name).map(ApiSchema::single)),
            )
            .collect::<Result<Vec<_>, _>>()?;

        if apis.is_empty() {
            return Err(AppError::MissingConfiguration(
                "at least one --list or --single endpoint is required".to_string(),
            ));
        }

        let id_scheme = match cli.namespace {
            Some(namespace) if !namespace.is_empty() => NodeIdScheme::namespaced(namespace),
            _ => NodeIdScheme::new(),
        };
        let options = SourceOptions::new()
            .with_page_limit(cli.page_limit)?
            .with_id_scheme(id_scheme);

        Ok(SourceConfig {
            base_url: ValidatedUrl::parse(&base_url)?,
            access_token: AccessToken::new(access_token)?,
            draft_token,
            apis,
            options,
            output_file: cli.output.map(PathBuf::from),
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ApiKind;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn cli(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("hacocms-source").chain(args.iter().copied()))
    }

    const BASE: (&str, &str) = (BASE_URL_ENV, "https://demo.hacocms.com/");
    const TOKEN: (&str, &str) = (ACCESS_TOKEN_ENV, "token123");

    #[test]
    fn resolves_lists_then_singles() {
        let config = SourceConfig::resolve_with_env(
            cli(&["--single", "settings", "--list", "entries", "-l", "news"]),
            env(&[BASE, TOKEN]),
        )
        .unwrap();

        let apis: Vec<(&str, ApiKind)> = config
            .apis
            .iter()
            .map(|api| (api.endpoint.as_str(), api.kind))
            .collect();
        assert_eq!(
            apis,
            vec![
                ("entries", ApiKind::List),
                ("news", ApiKind::List),
                ("settings", ApiKind::Single),
            ]
        );
        assert_eq!(config.options.page_limit(), 100);
        assert!(config.draft_token.is_none());
        assert!(config.output_file.is_none());
    }

    #[test]
    fn missing_access_token_is_reported() {
        let err =
            SourceConfig::resolve_with_env(cli(&["--list", "entries"]), env(&[BASE])).unwrap_err();
        assert!(err.to_string().contains(ACCESS_TOKEN_ENV));
    }

    #[test]
    fn requires_an_endpoint() {
        let err = SourceConfig::resolve_with_env(cli(&[]), env(&[BASE, TOKEN])).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[test]
    fn rejects_invalid_endpoint_and_page_limit() {
        assert!(
            SourceConfig::resolve_with_env(cli(&["--list", "a/b"]), env(&[BASE, TOKEN])).is_err()
        );
        assert!(SourceConfig::resolve_with_env(
            cli(&["--list", "entries", "--page-limit", "500"]),
            env(&[BASE, TOKEN])
        )
        .is_err());
    }

    #[test]
    fn picks_up_draft_token_namespace_and_output() {
        let config = SourceConfig::resolve_with_env(
            cli(&[
                "--list",
                "entries",
                "--namespace",
                "site",
                "--output",
                "nodes.json",
                "--page-limit",
                "20",
            ]),
            env(&[BASE, TOKEN, (DRAFT_TOKEN_ENV, "draft456")]),
        )
        .unwrap();

        assert_eq!(config.draft_token.unwrap().as_str(), "draft456");
        assert_eq!(config.options.id_scheme().namespace(), Some("site"));
        assert_eq!(config.options.page_limit(), 20);
        assert_eq!(config.output_file, Some(PathBuf::from("nodes.json")));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = SourceConfig::resolve_with_env(
            cli(&["--list", "entries"]),
            env(&[(BASE_URL_ENV, "file:///tmp"), TOKEN]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
