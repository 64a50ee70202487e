//! CLI argument parsing via clap.

use clap::Parser;

/// A terminal chat client for the Thomas backend.
#[derive(Debug, Parser)]
#[command(name = "thomas", version, long_version = thomas::build_info::cli_version_text())]
pub struct Args {
    /// Message to send. If provided, runs in one-shot mode and exits.
    pub prompt: Option<String>,

    /// Path to config file (default: ./thomas.toml or ~/.config/thomas/thomas.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override server base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Open a stored conversation on startup.
    #[arg(long = "conversation", value_name = "ID")]
    pub conversation: Option<i64>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn prompt_is_positional() {
        let args = Args::parse_from(["thomas", "what is rust?"]);
        assert_eq!(args.prompt.as_deref(), Some("what is rust?"));
        assert!(!args.no_color);
    }

    #[test]
    fn conversation_takes_a_numeric_id() {
        let args = Args::parse_from(["thomas", "--conversation", "42"]);
        assert_eq!(args.conversation, Some(42));
    }

    #[test]
    fn long_version_carries_build_metadata() {
        use clap::CommandFactory;
        let text = Args::command().render_long_version().to_string();
        assert!(text.contains("commit:"), "got: {text}");
        assert!(text.contains("built:"), "got: {text}");
    }

    #[test]
    fn overrides_parse_together() {
        let args = Args::parse_from([
            "thomas",
            "--base-url",
            "http://localhost:9999",
            "--no-color",
            "-c",
            "custom.toml",
        ]);
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:9999"));
        assert!(args.no_color);
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
    }
}
