mod measurement;
mod trial;

pub use measurement::{Measurement, MeasurementParseError};
pub use trial::{TrialFields, TrialRecord};
