use std::path::PathBuf;

use thiserror::Error;

use crate::registry::Entity;

/// Domain error taxonomy.
///
/// `MissingWindData` and `EntityNotFound` are per-tick conditions recovered
/// locally by their callers; `DataSourceMissing` is fatal at startup.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("no wind data ingested for grid cell (lat {lat_idx}, lon {lon_idx})")]
    MissingWindData { lat_idx: i32, lon_idx: i32 },

    #[error("entity {0:?} not present in the registry")]
    EntityNotFound(Entity),

    #[error("required data source missing: {path}")]
    DataSourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
