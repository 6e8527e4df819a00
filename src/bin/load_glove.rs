use log::{debug, info};
use std::env;
use std::error::Error;

use glove_core::settings::Settings;
use glovetools::loaders::load_from_settings;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = env::args().nth(1).unwrap_or_else(|| "config.toml".to_owned());
    let settings = Settings::new(&config)?;

    info!("glovetools load 0.1.0");
    debug!("settings: {:#?}", settings);

    let store = load_from_settings(&settings)?;
    let (words, dim) = store.shape();
    println!(
        "Loaded {} words with dimension {} from {}",
        words,
        dim,
        settings.data.vectors.display()
    );
    Ok(())
}
