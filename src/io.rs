use super::types::{Measurement, TrialFields, TrialRecord};
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
};

/// Reads condensed benchmark records, one comma-separated row per line.
pub struct TrialFileReader {
    record_iter: csv::DeserializeRecordsIntoIter<std::fs::File, TrialFields>,
}

impl TrialFileReader {
    pub fn new(input_filename: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            record_iter: csv::ReaderBuilder::new()
                .has_headers(false)
                .trim(csv::Trim::All)
                .from_path(input_filename)?
                .into_deserialize(),
        })
    }
}

impl Iterator for TrialFileReader {
    type Item = Result<TrialRecord, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.record_iter.next().map(|result| match result {
            Ok(fields) => Ok(TrialRecord::from(fields)),
            Err(e) => Err(e.into()),
        })
    }
}

/// Reads per-configuration timing lines (`n = <k> :  <seconds>`).
pub struct MeasurementFileReader {
    lines: Lines<BufReader<File>>,
}

impl MeasurementFileReader {
    pub fn new(input_filename: &str) -> Result<Self, std::io::Error> {
        Ok(Self {
            lines: BufReader::new(File::open(input_filename)?).lines(),
        })
    }
}

impl Iterator for MeasurementFileReader {
    type Item = Result<Measurement, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|result| match result {
            Ok(line) => line.parse::<Measurement>().map_err(|e| e.into()),
            Err(e) => Err(e.into()),
        })
    }
}
