//! Tabular track input mapped onto the fixed [`Sample`] shape.
//!
//! Three JSON layouts are accepted:
//! - rows: `[[lat, lon, alt, timestamp], ...]`
//! - columns: `{ "lat": [...], "lon": [...], ... }`
//! - records: `[{ "lat": .., "lon": .., ... }, ...]`
//!
//! Named layouts resolve fields through a [`ColumnMapping`]; extra columns are
//! ignored. Rows are positional and ignore the mapping.
use crate::error::ClusteringError;
use crate::types::Sample;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TrackTable {
    Rows(Vec<Vec<f64>>),
    Columns(BTreeMap<String, Vec<f64>>),
    Records(Vec<BTreeMap<String, f64>>),
}

/// Column names holding each sample field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub lat: String,
    pub lon: String,
    pub alt: String,
    pub timestamp: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            lat: "lat".to_string(),
            lon: "lon".to_string(),
            alt: "alt".to_string(),
            timestamp: "timestamp".to_string(),
        }
    }
}

impl ColumnMapping {
    fn names(&self) -> [&str; 4] {
        [&self.lat, &self.lon, &self.alt, &self.timestamp]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub columns: ColumnMapping,
    /// Latitude and longitude are given in degrees and must be converted.
    pub cast_to_radians: bool,
}

impl TrackTable {
    pub fn len(&self) -> usize {
        match self {
            TrackTable::Rows(rows) => rows.len(),
            TrackTable::Columns(cols) => cols.values().next().map_or(0, Vec::len),
            TrackTable::Records(recs) => recs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates the layout and produces samples in table order.
    pub fn to_samples(&self, options: &InputOptions) -> Result<Vec<Sample>, ClusteringError> {
        let samples = match self {
            TrackTable::Rows(rows) => rows_to_samples(rows)?,
            TrackTable::Columns(cols) => columns_to_samples(cols, &options.columns)?,
            TrackTable::Records(recs) => records_to_samples(recs, &options.columns)?,
        };
        Ok(if options.cast_to_radians {
            samples.into_iter().map(Sample::to_radians).collect()
        } else {
            samples
        })
    }
}

fn rows_to_samples(rows: &[Vec<f64>]) -> Result<Vec<Sample>, ClusteringError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_slice() {
            &[lat, lon, alt, timestamp] => Ok(Sample::new(lat, lon, alt, timestamp)),
            other => Err(ClusteringError::shape(format!(
                "row {i} has {} values, expected 4 (lat, lon, alt, timestamp)",
                other.len()
            ))),
        })
        .collect()
}

fn columns_to_samples(
    cols: &BTreeMap<String, Vec<f64>>,
    mapping: &ColumnMapping,
) -> Result<Vec<Sample>, ClusteringError> {
    let mut picked: Vec<&[f64]> = Vec::with_capacity(4);
    for name in mapping.names() {
        let col = cols
            .get(name)
            .ok_or_else(|| ClusteringError::MissingColumn {
                column: name.to_string(),
            })?;
        picked.push(col);
    }
    let n = picked[0].len();
    if let Some((name, col)) = mapping
        .names()
        .iter()
        .zip(&picked)
        .find(|(_, c)| c.len() != n)
    {
        return Err(ClusteringError::shape(format!(
            "column {name:?} has {} values, expected {n}",
            col.len()
        )));
    }
    Ok((0..n)
        .map(|i| Sample::new(picked[0][i], picked[1][i], picked[2][i], picked[3][i]))
        .collect())
}

fn records_to_samples(
    recs: &[BTreeMap<String, f64>],
    mapping: &ColumnMapping,
) -> Result<Vec<Sample>, ClusteringError> {
    let names = mapping.names();
    recs.iter()
        .enumerate()
        .map(|(i, rec)| {
            let mut vals = [0.0f64; 4];
            for (slot, name) in vals.iter_mut().zip(names) {
                *slot = *rec.get(name).ok_or_else(|| {
                    if i == 0 {
                        ClusteringError::MissingColumn {
                            column: name.to_string(),
                        }
                    } else {
                        ClusteringError::shape(format!("record {i} has no field {name:?}"))
                    }
                })?;
            }
            Ok(Sample::from_row(vals))
        })
        .collect()
}
