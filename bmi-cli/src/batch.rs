use std::{fs::File, io::BufReader, path::Path};

use bmi_model::RawMeasurement;
use log::info;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("cannot open {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("malformed measurements file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Reads a JSON array of form submissions.
pub fn load(path: &Path) -> Result<Vec<RawMeasurement>, BatchError> {
    info!("Loading measurements from {}", path.display());
    let file = File::open(path).map_err(|e| BatchError::Io(path.display().to_string(), e))?;
    let measurements: Vec<RawMeasurement> = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded {} measurements", measurements.len());
    Ok(measurements)
}
