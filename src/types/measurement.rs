use std::{error::Error, str::FromStr};

/// One line of the per-configuration timing file: either a single-threaded
/// baseline run or a trial to compare against the most recent baseline.
///
/// Lines look like `n = 1 :  0.0123` (baseline) or `n = 16 :  0.0123` (trial).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Baseline { seconds: f64 },
    Trial { threads: u32, seconds: f64 },
}

impl FromStr for Measurement {
    type Err = MeasurementParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (config, seconds_str) = line
            .split_once(" :  ")
            .ok_or_else(|| MeasurementParseError::MissingDelimiter(line.into()))?;

        let seconds = seconds_str
            .parse::<f64>()
            .map_err(|_| MeasurementParseError::BadSeconds(seconds_str.into()))?;

        if config == "n = 1" {
            return Ok(Measurement::Baseline { seconds });
        }

        // The thread count starts at byte 4 of the key ("n = 16" -> "16").
        let threads = config
            .get(4..)
            .and_then(|count| count.parse::<u32>().ok())
            .ok_or_else(|| MeasurementParseError::BadThreadCount(config.into()))?;

        Ok(Measurement::Trial { threads, seconds })
    }
}

/// This error is returned when a timing line doesn't have the expected layout.
#[derive(Debug, PartialEq)]
pub enum MeasurementParseError {
    MissingDelimiter(String),
    BadSeconds(String),
    BadThreadCount(String),
}

impl std::fmt::Display for MeasurementParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDelimiter(line) => {
                write!(f, "Timing line without \" :  \" delimiter: \"{}\"", line)
            }
            Self::BadSeconds(value) => {
                write!(f, "Unparseable seconds value \"{}\"", value)
            }
            Self::BadThreadCount(config) => {
                write!(f, "Unparseable thread count in key \"{}\"", config)
            }
        }
    }
}

impl Error for MeasurementParseError {}

#[cfg(test)]
mod tests {
    use super::{Measurement, MeasurementParseError};

    #[test]
    fn test_parse_baseline() {
        assert_eq!(
            "n = 1 :  2.5".parse::<Measurement>().unwrap(),
            Measurement::Baseline { seconds: 2.5 }
        );
    }

    #[test]
    fn test_parse_trial() {
        assert_eq!(
            "n = 16 :  0.0042".parse::<Measurement>().unwrap(),
            Measurement::Trial {
                threads: 16,
                seconds: 0.0042
            }
        );
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(
            "n = 2, 0.5".parse::<Measurement>(),
            Err(MeasurementParseError::MissingDelimiter("n = 2, 0.5".into()))
        );
    }

    #[test]
    fn test_bad_seconds() {
        assert_eq!(
            "n = 2 :  fast".parse::<Measurement>(),
            Err(MeasurementParseError::BadSeconds("fast".into()))
        );
    }

    #[test]
    fn test_bad_thread_count() {
        // Key too short to carry a count at byte 4
        assert_eq!(
            "n=2 :  0.5".parse::<Measurement>(),
            Err(MeasurementParseError::BadThreadCount("n=2".into()))
        );

        assert_eq!(
            "n = two :  0.5".parse::<Measurement>(),
            Err(MeasurementParseError::BadThreadCount("n = two".into()))
        );
    }
}
