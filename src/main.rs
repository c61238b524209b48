use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use keyboard_shortcuts::catalog::{self, Catalog};
use keyboard_shortcuts::cli::{Cli, Commands};
use keyboard_shortcuts::config::{self, Config};
use keyboard_shortcuts::error::{KeyboardShortcutsError, ResultExt};
use keyboard_shortcuts::logging;
use keyboard_shortcuts::runner::{AppleScriptInjector, ShortcutRunner};
use keyboard_shortcuts::shortcuts::{self, Application, InputApp, KeyCodes};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = apply_overrides(config::load_config(), &cli);
    let _guard = logging::init(cli.log_level.as_deref().or(config.log_level.as_deref()));

    let records = catalog::load_records(&config.catalog())
        .with_context(|| format!("loading catalog from {}", config.catalog_source))?;

    // Listing works without key codes; everything else needs them.
    if let Commands::List { app } = &cli.command {
        let catalog = match catalog::load_key_codes(&config.key_codes()).warn_on_err() {
            Some(key_codes) => lenient_catalog(&config, &key_codes, &records),
            None => Catalog::from_applications(shortcuts::parse(&records)),
        };
        return match app {
            Some(slug) => list_shortcuts(&catalog, slug),
            None => {
                list_apps(&catalog);
                Ok(())
            }
        };
    }

    let key_codes = catalog::load_key_codes(&config.key_codes())
        .with_context(|| format!("loading key codes from {}", config.key_codes_source))?;

    match cli.command {
        Commands::Validate => validate(&key_codes, &records),
        Commands::List { .. } => Ok(()),
        Commands::Args {
            app,
            shortcut,
            delay,
        } => {
            let catalog = lenient_catalog(&config, &key_codes, &records);
            let (app, shortcut) = catalog.shortcut(&app, &shortcut).map_err(user_error)?;
            let runner = ShortcutRunner::new(
                &key_codes,
                delay_or(&config, delay),
                AppleScriptInjector::new(),
            );
            let args = runner
                .arguments(app, shortcut)
                .map_err(|e| user_error(e.into()))?;
            println!("{}", serde_json::to_string_pretty(&args)?);
            Ok(())
        }
        Commands::Run {
            app,
            shortcut,
            delay,
        } => {
            let catalog = lenient_catalog(&config, &key_codes, &records);
            let (app, shortcut) = catalog.shortcut(&app, &shortcut).map_err(user_error)?;
            let runner = ShortcutRunner::new(
                &key_codes,
                delay_or(&config, delay),
                AppleScriptInjector::new(),
            );
            runner.run(app, shortcut).map_err(|e| user_error(e.into()))
        }
    }
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(catalog) = &cli.catalog {
        config.catalog_source = catalog.clone();
    }
    if let Some(key_codes) = &cli.key_codes {
        config.key_codes_source = key_codes.clone();
    }
    config
}

fn delay_or(config: &Config, delay: Option<f64>) -> f64 {
    match delay {
        Some(delay) => Config {
            activation_delay_seconds: delay,
            ..config.clone()
        }
        .sanitized()
        .activation_delay_seconds,
        None => config.activation_delay_seconds,
    }
}

fn user_error(e: KeyboardShortcutsError) -> anyhow::Error {
    anyhow::anyhow!(e.user_message())
}

fn validate(key_codes: &KeyCodes, records: &[InputApp]) -> Result<()> {
    shortcuts::validate(key_codes, records)?;
    let shortcut_count: usize = shortcuts::parse(records)
        .iter()
        .map(|app| app.shortcuts().count())
        .sum();
    info!(
        app_count = records.len(),
        shortcut_count = shortcut_count,
        "Catalog is valid"
    );
    println!("OK: {} apps, {} shortcuts", records.len(), shortcut_count);
    Ok(())
}

fn lenient_catalog(config: &Config, key_codes: &KeyCodes, records: &[InputApp]) -> Catalog {
    let (catalog, skipped) = Catalog::load_lenient(key_codes, records);
    logging::log_catalog_loaded(&config.catalog_source, catalog.len(), skipped.len());
    catalog
}

fn list_apps(catalog: &Catalog) {
    for app in catalog.apps() {
        println!("{:<24} {:<40} {}", app.slug, app.name, target_label(app));
    }
}

fn list_shortcuts(catalog: &Catalog, slug: &str) -> Result<()> {
    let app = catalog
        .find_by_slug(slug)
        .ok_or_else(|| user_error(KeyboardShortcutsError::AppNotFound(slug.to_string())))?;

    println!("{} ({})", app.name, target_label(app));
    for keymap in &app.keymaps {
        println!("\n[{}]", keymap.title);
        for section in &keymap.sections {
            println!("  {}", section.title);
            for shortcut in &section.shortcuts {
                let keys = if shortcut.is_executable() {
                    shortcut.symbols()
                } else {
                    shortcut.comment.clone().unwrap_or_default()
                };
                println!("    {:<40} {}", shortcut.title, keys);
            }
        }
    }
    Ok(())
}

fn target_label(app: &Application) -> String {
    app.bundle_id
        .clone()
        .or_else(|| app.hostname.clone())
        .unwrap_or_else(|| "-".to_string())
}
