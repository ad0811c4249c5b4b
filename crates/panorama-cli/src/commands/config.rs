use anyhow::Result;

use panorama_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("# {}", AppConfig::config_path().display());
    print!("{}", config.to_toml()?);
    Ok(())
}
