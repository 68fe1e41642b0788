//! Main application entry point (native).

#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of a JSON config file (defaults apply when omitted)
    config: Option<PathBuf>,
}

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting VisualKit");

    let config = match &cli.config {
        Some(path) => match visualkit_app::AppConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => visualkit_app::AppConfig::default(),
    };

    match visualkit_app::App::with_config(config).run() {
        Ok(path) => log::info!("Wrote {}", path.display()),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
