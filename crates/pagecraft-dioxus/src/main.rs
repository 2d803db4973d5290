use dioxus::prelude::*;
use pagecraft_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use pagecraft_config::Config;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("pagecraft starting up");

    let config = match resolve_settings() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "pagecraft-dioxus".to_string());
            eprintln!("Usage: {program_name} [pages-folder-path]");
            eprintln!(
                "Or create a config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    // A scan doubles as directory validation before the window opens.
    if let Err(e) = io::scan_pages(&config.pages_path) {
        eprintln!(
            "Error: Pages path '{}' is invalid: {e}",
            config.pages_path.display()
        );
        eprintln!(
            "Create that directory, pass one as an argument, or set pages_path in {}",
            Config::config_path().display()
        );
        process::exit(1);
    }

    log::info!(
        "Launching editor for {} (autosave {})",
        config.pages_path.display(),
        if config.autosave { "on" } else { "off" }
    );
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// CLI argument beats config file beats built-in defaults.
fn resolve_settings() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        2 => {
            let pages_path = PathBuf::from(&args[1]);
            log::info!("Using pages path from CLI argument: {}", pages_path.display());
            Ok(Config {
                pages_path,
                ..Config::default()
            })
        }
        1 => match Config::load() {
            Ok(Some(config)) => {
                log::info!(
                    "Loaded pages path from config: {}",
                    config.pages_path.display()
                );
                Ok(config)
            }
            Ok(None) => {
                let config = Config::default();
                log::info!(
                    "No config file; trying default pages root {}",
                    config.pages_path.display()
                );
                Ok(config)
            }
            Err(e) => Err(format!("Error: Failed to load config file: {e}")),
        },
        _ => Err("Error: Too many arguments".to_string()),
    }
}

fn app_root() -> Element {
    // Re-resolve using the same logic as main; main already validated it.
    let config = match resolve_settings() {
        Ok(config) => config,
        Err(message) => {
            return rsx! {
                ui::components::ErrorScreen {
                    title: "Startup error".to_string(),
                    message,
                    details: None,
                }
            };
        }
    };

    rsx! {
        App {
            pages_path: config.pages_path,
            autosave: config.autosave,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("pagecraft")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
