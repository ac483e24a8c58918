//! CLI entrypoint for Clarity Consent Auto
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use consent_application::{
    ConsentPropagationClient, ConsentSettingsInput, ConsentSettingsUseCase,
    DetectProjectIdUseCase, InjectConsentUseCase, InjectionOutcome, OptionStore,
    SetupStatusUseCase, UninstallUseCase,
};
use consent_domain::OutputFormat;
use consent_infrastructure::{
    ConfigLoader, EntryPoint, FileConfig, InMemoryOptionStore, JsonFileOptionStore, Placement,
    ScriptTagRenderer, SimulatedPage, StorePluginRegistry,
};
use consent_presentation::{Cli, Command, ConsoleFormatter, SimulationSummary};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        for line in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let details = issues
            .iter()
            .map(|issue| format!("  - {}", issue))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{}", details);
    }

    if !config.output.use_color(cli.no_color) {
        ConsoleFormatter::set_color(false);
    }

    let json = config.output.effective_format(cli.json) == OutputFormat::Json;
    let command = cli.command.clone().unwrap_or(Command::Status);

    info!("Starting Clarity Consent Auto");

    // === Dependency Injection ===
    match cli.store.as_ref().or(config.store.path.as_ref()) {
        Some(path) => {
            let store = JsonFileOptionStore::open(path)
                .with_context(|| format!("Failed to open option store {}", path.display()))?;
            info!("Using option store {}", store.path().display());
            run(Arc::new(store), command, &config, json).await
        }
        None => {
            if command.is_mutating() {
                warn!("No option store configured; changes will not be persisted");
            }
            run(Arc::new(InMemoryOptionStore::new()), command, &config, json).await
        }
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run<S: OptionStore + 'static>(
    store: Arc<S>,
    command: Command,
    config: &FileConfig,
    json: bool,
) -> Result<()> {
    let plugins = Arc::new(StorePluginRegistry::new(Arc::clone(&store)));
    let detection = config.detection.to_detection_settings();

    let output = match command {
        Command::Detect => {
            let result =
                DetectProjectIdUseCase::with_settings(store, plugins, &detection).execute();
            if json {
                ConsoleFormatter::format_json(&result)
            } else {
                ConsoleFormatter::format_detection(&result)
            }
        }
        Command::Status => {
            let status = SetupStatusUseCase::with_settings(store, plugins, &detection).execute();
            if json {
                ConsoleFormatter::format_json(&status)
            } else {
                ConsoleFormatter::format_status(&status)
            }
        }
        Command::Render => {
            let renderer = Arc::new(ScriptTagRenderer::new());
            let asset = config.script.to_script_asset();
            let placement = if asset.in_footer {
                Placement::Footer
            } else {
                Placement::Head
            };
            let outcome = InjectConsentUseCase::with_settings(
                store,
                plugins,
                Arc::clone(&renderer),
                &detection,
            )
            .with_asset(asset)
            .execute()?;

            if json {
                ConsoleFormatter::format_json(&outcome)
            } else {
                let html = renderer.render(placement)?;
                ConsoleFormatter::format_injection(&outcome, &html)
            }
        }
        Command::Settings {
            ad_storage,
            analytics_storage,
        } => {
            let settings = ConsentSettingsUseCase::new(store);
            let decision = if ad_storage.is_some() || analytics_storage.is_some() {
                settings.update(ConsentSettingsInput {
                    ad_storage,
                    analytics_storage,
                })?
            } else {
                settings.load()
            };
            if json {
                ConsoleFormatter::format_json(&decision)
            } else {
                ConsoleFormatter::format_decision(&decision)
            }
        }
        Command::Uninstall => {
            let report = UninstallUseCase::new(store).execute()?;
            if json {
                ConsoleFormatter::format_json(&report)
            } else {
                ConsoleFormatter::format_uninstall(&report)
            }
        }
        Command::Simulate {
            appear_after,
            admin,
            fail,
            interval_ms,
            max_attempts,
        } => {
            // The page only carries a payload if the render step enqueued the script
            let renderer = Arc::new(ScriptTagRenderer::new());
            let outcome = InjectConsentUseCase::with_settings(store, plugins, renderer, &detection)
                .with_asset(config.script.to_script_asset())
                .execute()?;
            let payload = match outcome {
                InjectionOutcome::Enqueued { payload, .. } => Some(payload),
                InjectionOutcome::Skipped { .. } => None,
            };

            let entry_point = match appear_after {
                0 => EntryPoint::Missing,
                n => EntryPoint::AppearsOnCheck(n),
            };
            let mut page = SimulatedPage::new(payload)
                .with_entry_point(entry_point)
                .with_admin(admin);
            if let Some(message) = fail {
                page = page.with_failure(message);
            }
            let page = Arc::new(page);

            let mut params = config.client.to_poll_params();
            if let Some(ms) = interval_ms {
                params.interval = Duration::from_millis(ms);
            }
            if let Some(n) = max_attempts {
                params.max_attempts = n;
            }
            if params.interval.is_zero() || params.max_attempts == 0 {
                bail!("Poll interval and max attempts must be greater than 0");
            }

            let client = ConsentPropagationClient::with_params(Arc::clone(&page), params);
            client.on_ready().await;
            let state = client.on_window_load().await;

            let summary = SimulationSummary {
                state,
                checks: page.checks(),
                invocations: page.invocations().len(),
                events: page.events().len(),
            };
            if json {
                ConsoleFormatter::format_json(&summary)
            } else {
                ConsoleFormatter::format_simulation(&summary)
            }
        }
    };

    println!("{}", output);

    Ok(())
}
