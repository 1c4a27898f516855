use snowtooth::config::Config;
use snowtooth::error::Result;

/// Write the default configuration to `output`, or to stdout
pub fn run(output: Option<String>) -> Result<()> {
    let config = Config::default();

    if let Some(output_path) = output {
        snowtooth::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated {}", output_path);
        tracing::info!("🚀 Ready to serve! Run: snowtooth serve --config {}", output_path);
    } else {
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    Ok(())
}
