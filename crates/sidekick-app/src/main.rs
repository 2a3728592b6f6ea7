mod chat_app;
mod cli;
mod commands;
mod render;

use sidekick_ai::{OpenAiClient, OpenAiConfig, Session};
use sidekick_common::{ConfigError, Notice, SidekickError};
use sidekick_config::{config_to_toml, load_config, SidekickConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use chat_app::{ChatApp, Output};
use commands::parse_line;

/// Pick the log filter: `--log-level` wins, then `RUST_LOG`, then the
/// config file. A bare level applies to the sidekick crates only.
fn log_filter(cli_level: Option<&str>, rust_log: Option<&str>, fallback: &str) -> EnvFilter {
    let from_flag = cli_level.and_then(|level| {
        let directive = if level.contains('=') {
            level.to_string()
        } else {
            format!("sidekick={level}")
        };
        EnvFilter::try_new(directive).ok()
    });

    from_flag
        .or_else(|| rust_log.and_then(|value| EnvFilter::try_new(value).ok()))
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

fn init_logging(cli_level: Option<&str>, config: &SidekickConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(
        cli_level,
        rust_log.as_deref(),
        config.logging.level.directive(),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit `--config` must load; the default location falls back to
/// built-in defaults with a warning.
fn resolve_config(args: &cli::Args) -> Result<(SidekickConfig, Option<ConfigError>), ConfigError> {
    match args.config.as_deref() {
        Some(path) => load_config(Some(path)).map(|config| (config, None)),
        None => match load_config(None) {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((SidekickConfig::default(), Some(e))),
        },
    }
}

async fn run(args: cli::Args, dotenv: Option<std::path::PathBuf>) -> Result<(), SidekickError> {
    let (mut config, load_warning) = resolve_config(&args)?;
    args.apply_overrides(&mut config);

    if args.print_config {
        print!("{}", config_to_toml(&config));
        return Ok(());
    }

    init_logging(args.log_level.as_deref(), &config);
    tracing::info!("Sidekick v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    if let Some(e) = load_warning {
        tracing::warn!("Failed to load config, using defaults: {e}");
    }

    let client = OpenAiClient::new(OpenAiConfig::from_provider(&config.provider))
        .map_err(|e| SidekickError::Ai(e.to_string()))?;

    let mut session = Session::new(config.agent.clone());
    match std::env::var(&config.provider.api_key_env) {
        Ok(key) if !key.trim().is_empty() => {
            session.set_credential(key.trim());
            tracing::info!("API key read from {}", config.provider.api_key_env);
        }
        _ => tracing::debug!("{} not set", config.provider.api_key_env),
    }
    tracing::info!(session = %session.id().short(), model = %config.provider.model, "session ready");

    let mut app = ChatApp::new(session, Box::new(client), config.provider.api_key_env.clone());
    repl(&mut app).await
}

async fn repl(app: &mut ChatApp) -> Result<(), SidekickError> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("{}\n\n", render::BANNER).as_bytes())
        .await?;
    if !app.session().is_configured() {
        eprintln!(
            "{}",
            render::render_notice(&Notice::warning(
                "No API key yet: use /key <secret> to configure one."
            ))
        );
    }

    while !app.should_quit() {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", render::render_notice(&Notice::error(e.to_string())));
                continue;
            }
        };

        if app.will_request(&command) {
            eprintln!("Thinking...");
        }

        for output in app.handle(command).await {
            match output {
                Output::Text(text) => stdout.write_all(format!("{text}\n").as_bytes()).await?,
                Output::Notice(notice) if notice.is_problem() => {
                    eprintln!("{}", render::render_notice(&notice));
                }
                Output::Notice(notice) => {
                    stdout
                        .write_all(format!("{}\n", render::render_notice(&notice)).as_bytes())
                        .await?
                }
            }
        }
    }

    tracing::info!("Sidekick exiting");
    Ok(())
}

fn main() {
    // Environment edits must happen before any runtime thread exists.
    let dotenv = dotenvy::dotenv();
    let args = cli::parse();

    let result = tokio::runtime::Runtime::new()
        .map_err(SidekickError::from)
        .and_then(|runtime| runtime.block_on(run(args, dotenv.ok())));

    if let Err(e) = result {
        eprintln!("sidekick: {e}");
        std::process::exit(1);
    }
}
