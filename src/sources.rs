//! Pre-parsed data providers for wind and ground-station ingestion.
//!
//! The simulation core only consumes the record vectors; these loaders are the
//! file-backed implementations. A required file that cannot be read is fatal
//! at startup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::SimError;

/// One row of the wind export: scaled-float components plus the cell position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindRecord {
    pub u: f64,
    pub v: f64,
    pub lat: f64,
    pub lon: f64,
}

/// A ground-station or city coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteRecord {
    pub lat: f64,
    pub lon: f64,
}

/// Parse the wind CSV export: a header line followed by `U,V,lat,lon` rows.
/// Blank lines are skipped; unparseable fields fall back to zero, matching
/// the quirks of the upstream export.
pub fn load_wind_records(path: &Path) -> Result<Vec<WindRecord>> {
    let data = read_required(path)?;
    let mut records = Vec::new();
    for line in data.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line
            .split(',')
            .map(|field| field.trim().parse::<f64>().unwrap_or(0.0));
        let u = fields.next().unwrap_or(0.0);
        let v = fields.next().unwrap_or(0.0);
        let lat = fields.next().unwrap_or(0.0);
        let lon = fields.next().unwrap_or(0.0);
        records.push(WindRecord { u, v, lat, lon });
    }
    Ok(records)
}

/// Parse a `lat,lon` site file (helipads and cities share the format).
/// Unlike the wind export, a malformed line here is an error.
pub fn load_sites(path: &Path) -> Result<Vec<SiteRecord>> {
    let data = read_required(path)?;
    let mut sites = Vec::new();
    for (number, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (lat, lon) = line
            .split_once(',')
            .with_context(|| format!("{}:{}: expected `lat,lon`", path.display(), number + 1))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{}:{}: bad latitude", path.display(), number + 1))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{}:{}: bad longitude", path.display(), number + 1))?;
        sites.push(SiteRecord { lat, lon });
    }
    Ok(sites)
}

fn read_required(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        anyhow::Error::from(SimError::DataSourceMissing {
            path: path.to_path_buf(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn wind_rows_parse_after_header() {
        let file = write_file("U,V,lat,lon\n1.5,-2.0,20,10\n\n0.25,0.75,48.3,44.1\n");
        let records = load_wind_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            WindRecord {
                u: 1.5,
                v: -2.0,
                lat: 20.0,
                lon: 10.0
            }
        );
    }

    #[test]
    fn wind_unparseable_field_falls_back_to_zero() {
        let file = write_file("U,V,lat,lon\nbogus,2.0,20,10\n");
        let records = load_wind_records(file.path()).unwrap();
        assert_eq!(records[0].u, 0.0);
        assert_eq!(records[0].v, 2.0);
    }

    #[test]
    fn sites_parse_lat_lon_pairs() {
        let file = write_file("55.75,37.62\n51.53,46.03\n");
        let sites = load_sites(file.path()).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(
            sites[1],
            SiteRecord {
                lat: 51.53,
                lon: 46.03
            }
        );
    }

    #[test]
    fn malformed_site_line_is_an_error() {
        let file = write_file("55.75,37.62\nnot-a-site\n");
        assert!(load_sites(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_data_source_missing() {
        let err = load_sites(Path::new("/nonexistent/helipads.dat")).unwrap_err();
        match err.downcast_ref::<SimError>() {
            Some(SimError::DataSourceMissing { path, .. }) => {
                assert!(path.ends_with("helipads.dat"));
            }
            other => panic!("expected DataSourceMissing, got {:?}", other),
        }
    }
}
