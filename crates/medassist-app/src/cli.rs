use std::path::PathBuf;

use clap::Parser;

/// MedAssist: a terminal chat client for the medical symptom assistant.
#[derive(Parser, Debug)]
#[command(name = "medassist", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL (takes precedence over config and MEDASSIST_API_URL).
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "medassist",
            "--config",
            "/tmp/medassist.toml",
            "--api-url",
            "http://10.0.0.5:5000",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/medassist.toml")));
        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:5000"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(!args.print_config);
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::parse_from(["medassist"]);
        assert!(args.config.is_none());
        assert!(args.api_url.is_none());
        assert!(args.log_level.is_none());
    }
}
