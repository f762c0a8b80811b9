use serde::{Deserialize, Serialize};

use super::observation::EpochId;

/// Modified Julian Date. MJD 0 = 1858-11-17 00:00:00 UTC.
///
/// Survey epochs are plain sequential indices; this type maps them onto the
/// absolute timeline reporting collaborators plot against.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(qtty::Days);

/// Offset between the MJD and Unix epochs, in days.
const UNIX_EPOCH_MJD: f64 = 40587.0;

const SECONDS_PER_DAY: f64 = 86400.0;

impl ModifiedJulianDate {
    /// Create an MJD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw MJD value as f64 days.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// The timestamp of a survey epoch, given the survey start and the
    /// observing cadence between consecutive epochs.
    pub fn for_epoch(survey_start: ModifiedJulianDate, cadence: qtty::Days, epoch: EpochId) -> Self {
        Self::new(survey_start.value() + cadence.value() * epoch.index() as f64)
    }

    /// Convert to a chrono UTC timestamp.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = (self.value() - UNIX_EPOCH_MJD) * SECONDS_PER_DAY;
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1e9) as u32;
        chrono::DateTime::from_timestamp(whole as i64, nanos)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from a chrono UTC timestamp.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        let secs = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        Self::new(secs / SECONDS_PER_DAY + UNIX_EPOCH_MJD)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl std::ops::Add<qtty::Days> for ModifiedJulianDate {
    type Output = ModifiedJulianDate;

    fn add(self, rhs: qtty::Days) -> Self::Output {
        ModifiedJulianDate::new(self.value() + rhs.value())
    }
}
