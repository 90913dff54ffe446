//! Sparse wind-vector lookup table.
//!
//! Vectors are keyed by whole-degree grid cell. Only cells present in the
//! ingested data are queryable; a miss is a hard error the caller must handle,
//! never a silent zero vector.

use std::collections::HashMap;

use crate::error::SimError;
use crate::geo::Projected;

/// Scaled wind speed components for one 1°×1° cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindVector {
    pub u: i32,
    pub v: i32,
}

#[derive(Debug, Default)]
pub struct WindField {
    cells: HashMap<(i32, i32), WindVector>,
}

impl WindField {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Store or overwrite the vector for a grid cell. Components are scaled by
    /// 100 and truncated toward zero.
    pub fn insert(&mut self, lon_idx: i32, lat_idx: i32, u: f64, v: f64) {
        self.cells.insert(
            (lat_idx, lon_idx),
            WindVector {
                u: (u * 100.0) as i32,
                v: (v * 100.0) as i32,
            },
        );
    }

    /// Look up the vector governing a projected position. The position is
    /// converted to degrees and keyed by rounded latitude and the absolute
    /// value of rounded longitude.
    pub fn lookup(&self, position: Projected) -> Result<WindVector, SimError> {
        let geo = position.to_geographic();
        let lat_idx = geo.lat.round() as i32;
        let lon_idx = geo.lon.round().abs() as i32;
        self.cells
            .get(&(lat_idx, lon_idx))
            .copied()
            .ok_or(SimError::MissingWindData { lat_idx, lon_idx })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Geographic;

    #[test]
    fn insert_scales_and_truncates() {
        let mut field = WindField::new();
        field.insert(10, 20, 1.5, -2.0);

        let position = Geographic::new(20.0, 10.0).to_projected();
        let vector = field.lookup(position).unwrap();
        assert_eq!(vector, WindVector { u: 150, v: -200 });
    }

    #[test]
    fn insert_overwrites_cell() {
        let mut field = WindField::new();
        field.insert(10, 20, 1.0, 1.0);
        field.insert(10, 20, -0.5, 0.25);

        let position = Geographic::new(20.0, 10.0).to_projected();
        let vector = field.lookup(position).unwrap();
        assert_eq!(vector, WindVector { u: -50, v: 25 });
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn lookup_rounds_to_nearest_cell() {
        let mut field = WindField::new();
        field.insert(30, 45, 2.0, 3.0);

        // 44.6°N rounds to 45, 30.4°E rounds to 30.
        let position = Geographic::new(44.6, 30.4).to_projected();
        assert!(field.lookup(position).is_ok());
    }

    #[test]
    fn missing_cell_is_an_error() {
        let field = WindField::new();
        let position = Geographic::new(20.0, 10.0).to_projected();
        match field.lookup(position) {
            Err(SimError::MissingWindData { lat_idx, lon_idx }) => {
                assert_eq!((lat_idx, lon_idx), (20, 10));
            }
            other => panic!("expected MissingWindData, got {:?}", other.map(|v| v.u)),
        }
    }
}
