use snowtooth::data::ResortData;
use snowtooth::error::{Result, SnowtoothError};
use snowtooth::schema::SchemaBuilder;
use std::sync::Arc;

/// Print the schema SDL to `output`, or to stdout
///
/// The SDL does not depend on the data, so an empty snapshot is enough. The
/// config file is still loaded and validated.
pub fn run(config_path: Option<String>, output: Option<String>) -> Result<()> {
    let config = snowtooth::config::load_or_default(config_path.as_deref())?;

    let schema = SchemaBuilder::new(Arc::new(ResortData::default()))
        .with_max_depth(config.server.max_depth)
        .build_schema()?;
    let sdl = schema.sdl();

    match output {
        Some(path) => {
            std::fs::write(&path, sdl).map_err(|e| {
                SnowtoothError::Serialization(format!("Failed to write '{}': {}", path, e))
            })?;
            tracing::info!("📝 Wrote schema to {}", path);
        }
        None => println!("{}", sdl),
    }

    Ok(())
}
