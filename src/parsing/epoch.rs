use qtty::Degrees;

use crate::error::{Error, Result};
use crate::models::observation::{EpochId, Observation};

/// Number of columns in a raw epoch record.
pub const EPOCH_COLUMNS: usize = 7;

// Fixed column layout of a raw epoch row.
const COL_ID: usize = 0;
const COL_RA: usize = 1;
const COL_RA_SIGMA: usize = 2;
const COL_DEC: usize = 3;
const COL_DEC_SIGMA: usize = 4;
const COL_FLUX: usize = 5;
const COL_FLUX_SIGMA: usize = 6;

/// One epoch's raw detections: a rectangular numeric table with columns
/// `[id, ra, ra_sigma, dec, dec_sigma, flux, flux_sigma]`, one row per
/// detected source.
///
/// The table is agnostic to how it was loaded; catalog file formats are owned
/// by surrounding tooling.
#[derive(Debug, Clone)]
pub struct EpochTable {
    rows: Vec<[f64; EPOCH_COLUMNS]>,
}

impl EpochTable {
    /// Wrap rows that already have the fixed column layout.
    pub fn from_rows(rows: Vec<[f64; EPOCH_COLUMNS]>) -> Self {
        Self { rows }
    }

    /// Build a table from variable-width records, rejecting rows of the wrong
    /// width.
    pub fn try_from_records(records: &[Vec<f64>]) -> Result<Self> {
        let mut rows = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.len() != EPOCH_COLUMNS {
                return Err(Error::malformed(
                    i,
                    format!(
                        "expected {} columns, found {}",
                        EPOCH_COLUMNS,
                        record.len()
                    ),
                ));
            }
            let mut row = [0.0; EPOCH_COLUMNS];
            row.copy_from_slice(record);
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Number of detections in this epoch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the epoch carries no detections.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract one detection as an [`Observation`] tagged with the supplied
    /// epoch identifier.
    ///
    /// Fails when the row selector is out of range, any field is non-finite,
    /// or an uncertainty column is negative. No side effects beyond
    /// construction.
    pub fn observation(&self, row: usize, epoch: EpochId) -> Result<Observation> {
        let fields = self
            .rows
            .get(row)
            .ok_or_else(|| Error::malformed(row, format!("row selector out of range (epoch has {} rows)", self.len())))?;

        for (col, value) in fields.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::malformed(
                    row,
                    format!("non-finite value {} in column {}", value, col),
                ));
            }
        }
        for col in [COL_RA_SIGMA, COL_DEC_SIGMA, COL_FLUX_SIGMA] {
            if fields[col] < 0.0 {
                return Err(Error::malformed(
                    row,
                    format!("negative uncertainty {} in column {}", fields[col], col),
                ));
            }
        }

        Ok(Observation::new(
            fields[COL_ID] as u32,
            epoch,
            Degrees::new(fields[COL_RA]),
            Degrees::new(fields[COL_RA_SIGMA]),
            Degrees::new(fields[COL_DEC]),
            Degrees::new(fields[COL_DEC_SIGMA]),
            fields[COL_FLUX],
            fields[COL_FLUX_SIGMA],
        ))
    }

    /// Extract every detection of the epoch, in row order.
    ///
    /// Any malformed row fails the whole epoch before cost-matrix work can
    /// begin.
    pub fn observations(&self, epoch: EpochId) -> Result<Vec<Observation>> {
        (0..self.len()).map(|row| self.observation(row, epoch)).collect()
    }
}
