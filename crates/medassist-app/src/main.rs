mod cli;
mod repl;
mod view;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use medassist_chat::{ChatSessionController, ControllerOptions, HttpBackend, HttpBackendConfig};
use medassist_common::{ConfigError, MedAssistError};
use medassist_config::MedAssistConfig;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

const CONNECTING: &str = "Connecting to Medical Assistant...";
const DISCLAIMER: &str =
    "This tool provides general information and is not a substitute for professional medical advice.";
/// Shown when no backend session could be created; rerunning is the retry.
const SESSION_FAILED: &str = "Failed to connect to the server. Please try again later.";

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/medassist-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn load_config(args: &cli::Args) -> (MedAssistConfig, Option<ConfigError>) {
    let loaded = match args.config {
        Some(ref path) => medassist_config::load_config_from(path),
        None => medassist_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = MedAssistConfig::default();
            medassist_config::apply_env_overrides(&mut config);
            (config, Some(e))
        }
    }
}

fn init_logging(args: &cli::Args, config: &MedAssistConfig) {
    let fallback = format!("medassist={}", config.logging.level.as_directive());
    let log_directive = args.log_level.clone().unwrap_or(fallback);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "medassist=info".parse().unwrap()),
            ),
        )
        .init();
}

fn controller_options(config: &MedAssistConfig) -> ControllerOptions {
    ControllerOptions::default()
        .with_greeting(config.chat.greeting.clone())
        .with_fallback_message(config.chat.fallback_message.clone())
        .with_dispatch_timeout(Some(Duration::from_secs(u64::from(
            config.api.dispatch_timeout_secs,
        ))))
}

/// Apply command-line overrides and re-check the result, so a bad
/// `--api-url` is reported as a config problem rather than a network one.
fn apply_cli_overrides(args: &cli::Args, config: &mut MedAssistConfig) -> Result<(), ConfigError> {
    if let Some(ref url) = args.api_url {
        config.api.base_url = url.trim().to_string();
    }
    medassist_config::validation::validate(config)
}

async fn run(args: cli::Args) -> medassist_common::Result<()> {
    let (mut config, config_error) = load_config(&args);

    init_logging(&args, &config);
    tracing::info!("MedAssist v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    apply_cli_overrides(&args, &mut config)?;

    if args.print_config {
        println!("{}", medassist_config::config_to_json(&config));
        return Ok(());
    }

    tracing::info!("Using backend at {}", config.api.base_url);
    let backend = HttpBackend::new(
        HttpBackendConfig::new(config.api.base_url.clone()).with_connect_timeout(
            Duration::from_secs(u64::from(config.api.connect_timeout_secs)),
        ),
    );

    println!("{CONNECTING}");
    let mut controller =
        ChatSessionController::start(Arc::new(backend), controller_options(&config))
            .await
            .map_err(|e| MedAssistError::Session(e.to_string()))?;
    println!("{DISCLAIMER}");

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(&mut controller, stdin, &mut std::io::stdout()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();
    match run(args).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(MedAssistError::Session(e)) => {
            tracing::error!("Failed to initialize session: {e}");
            eprintln!("Error: {SESSION_FAILED}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(argv: &[&str]) -> cli::Args {
        cli::Args::parse_from(std::iter::once("medassist").chain(argv.iter().copied()))
    }

    #[test]
    fn api_url_flag_replaces_base_url() {
        let mut config = MedAssistConfig::default();
        apply_cli_overrides(&args(&["--api-url", " https://triage.example.org "]), &mut config)
            .unwrap();
        assert_eq!(config.api.base_url, "https://triage.example.org");
    }

    #[test]
    fn malformed_api_url_flag_is_a_config_error() {
        let mut config = MedAssistConfig::default();
        let err = apply_cli_overrides(&args(&["--api-url", "localhost:5000"]), &mut config)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn no_flags_leave_valid_config_alone() {
        let mut config = MedAssistConfig::default();
        apply_cli_overrides(&args(&[]), &mut config).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn startup_notices() {
        assert_eq!(CONNECTING, "Connecting to Medical Assistant...");
        assert!(DISCLAIMER.contains("not a substitute for professional medical advice"));
    }

    #[test]
    fn options_follow_config() {
        let mut config = MedAssistConfig::default();
        config.chat.greeting = "Hi.".into();
        config.api.dispatch_timeout_secs = 5;
        let options = controller_options(&config);
        assert_eq!(options.greeting, "Hi.");
        assert_eq!(options.dispatch_timeout, Some(Duration::from_secs(5)));
    }
}
