use std::env;

use movielog::app::MovieApp;
use movielog::config::Config;
use movielog::logging;
use movielog::storage::{create_empty_file, open_storage};

#[tokio::main]
async fn main() {
    logging::setup_logging();

    let mut config = Config::from_env();
    if let Some(path) = env::args().nth(1) {
        config.database_path = path.into();
    }

    if !config.database_path.exists() {
        log::info!(
            "File '{}' does not exist. Creating a new one...",
            config.database_path.display()
        );
        if let Err(e) = create_empty_file(&config.database_path) {
            log::error!("Failed to create catalog file: {}", e);
            return;
        }
    }

    let app = match open_storage(config.database_path.clone())
        .and_then(|storage| MovieApp::new(storage, config))
    {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to start the application: {}", e);
            return;
        }
    };

    if let Err(e) = app.run().await {
        log::error!("Application error: {}", e);
    }
}
