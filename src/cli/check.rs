use snowtooth::data::ResortData;
use snowtooth::error::{Result, SnowtoothError};

/// Load the data files and fail if any cross reference is dangling
pub fn run(config_path: Option<String>) -> Result<()> {
    let config = snowtooth::config::load_or_default(config_path.as_deref())?;
    let data = ResortData::load(&config.data)?;

    let dangling = data.dangling_references();
    if !dangling.is_empty() {
        return Err(SnowtoothError::DataLoad(format!(
            "{} dangling reference(s), first: {}",
            dangling.len(),
            dangling[0]
        )));
    }

    tracing::info!(
        "✅ {} lifts and {} trails, all cross references resolve",
        data.lifts().len(),
        data.trails().len()
    );
    Ok(())
}
