mod cli;
mod commands;
mod render;

use std::path::Path;
use std::process::ExitCode;

use redscope_common::RedscopeError;
use redscope_config::RedscopeConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Load environment variables from `.env` in the working directory
/// (KEY=VALUE lines). Variables already set are left alone.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .collect()
}

/// What the config loader did, for logging once the subscriber is up.
fn config_notice(path: Option<&Path>, existed: bool) -> Option<String> {
    let path = path?;
    Some(if existed {
        format!("Config loaded from {}", path.display())
    } else {
        format!("Created default config at {}", path.display())
    })
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "redscope=info".parse().expect("static directive")),
            ),
        )
        .init();
}

/// Apply `--env` and `--base-url` on top of the loaded config.
fn apply_cli_overrides(config: &mut RedscopeConfig, args: &Args) -> Result<(), RedscopeError> {
    if let Some(ref env) = args.env {
        redscope_config::apply_environment_override(config, env)?;
    }
    if let Some(ref url) = args.base_url {
        match config.backend.environment {
            redscope_config::Environment::Production => config.backend.production_url = url.clone(),
            redscope_config::Environment::Development => {
                config.backend.development_url = url.clone()
            }
        }
    }
    redscope_config::validation::validate(config)?;
    Ok(())
}

async fn run(args: Args, config: RedscopeConfig) -> Result<(), RedscopeError> {
    match args.command.unwrap_or(Command::Chat) {
        Command::Chat => commands::chat(commands::session_from_config(&config)).await,
        Command::Ask { text } => {
            commands::ask(commands::session_from_config(&config), &text.join(" ")).await
        }
        Command::Posts {
            subreddits,
            limit,
            page,
            new,
        } => commands::posts(&config, subreddits, limit, page, new).await,
        Command::Subreddits => {
            commands::list_subreddits(&config);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    // Environment changes must happen before the runtime starts its workers.
    load_dotenv();

    let args = cli::parse();

    // Config is read before the subscriber exists so its log level can
    // apply; the loader's own log lines are replayed below.
    let config_path = args
        .config
        .clone()
        .or_else(|| redscope_config::toml_loader::default_config_path().ok());
    let config_existed = config_path.as_deref().is_some_and(|p| p.exists());
    let (mut config, config_error) = match redscope_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (RedscopeConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    init_logging(&directive);

    tracing::info!("redscope v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    } else if let Some(notice) = config_notice(config_path.as_deref(), config_existed) {
        tracing::info!("{notice}");
    }

    if let Err(e) = apply_cli_overrides(&mut config, &args) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        "Backend: {} ({})",
        config.backend.base_url(),
        config.backend.environment
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
