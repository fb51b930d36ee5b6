use crate::config::{CONFIG_FILE_NAME, DataSettings, LaunchpadConfig, ServerSettings};
use crate::error::LaunchpadError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(port: u16, page_size: usize, users_file: String) -> Result<()> {
    if page_size == 0 {
        anyhow::bail!("--page-size must be >= 1");
    }

    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(LaunchpadError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = LaunchpadConfig {
        server: ServerSettings {
            port,
            ..Default::default()
        },
        data: DataSettings {
            page_size,
            users_file: Some(users_file),
            ..Default::default()
        },
    };
    config.save(&config_path)?;

    println!(
        "{} launchpad project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    if let Some(users_path) = config.users_path(&cwd) {
        println!("  Users:  {}", users_path.display());
    }

    Ok(())
}
