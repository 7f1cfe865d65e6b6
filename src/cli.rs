use clap::Parser;
use std::path::PathBuf;

/// Fetch and summarize a GitHub user's recent public activity
#[derive(Parser, Debug)]
#[command(name = "gh-activity", version, about)]
pub struct Cli {
    /// GitHub login whose public events to fetch
    pub username: String,

    /// Append per-kind event counts after the activity lines
    #[arg(long)]
    pub summary: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_username_required() {
        assert!(Cli::try_parse_from(["gh-activity"]).is_err());
    }

    #[test]
    fn test_parse_username_and_flags() {
        let cli = Cli::try_parse_from(["gh-activity", "octocat", "--summary"]).unwrap();
        assert_eq!(cli.username, "octocat");
        assert!(cli.summary);
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["gh-activity", "octocat", "--config", "custom.toml"]).unwrap();
        assert!(!cli.summary);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
