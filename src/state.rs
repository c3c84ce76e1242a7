use super::types::{Measurement, TrialRecord};
use std::{collections::HashMap, error::Error};

/// Thread counts the experiment sweeps over; one accumulator slot each.
pub const KNOWN_THREAD_COUNTS: [u32; 4] = [2, 4, 8, 16];

/// Baseline measurements excluded from aggregation (outlier runs in this
/// particular experiment's data).
pub const BANNED_BASELINES: [f64; 1] = [2.024013754333333];

/// Trials the experiment ran per thread count.
const EXPECTED_TRIALS: f64 = 10.0;

/// Accumulates speedup sums per thread count over one pass of the timing file.
///
/// A baseline line replaces the current normalization value; a trial line is
/// divided into it. Trials measured against a banned baseline are skipped and
/// tallied so the final divisor can be shrunk to match.
pub struct SpeedupState {
    current_norm: f64,
    baselines: usize,
    banned: Vec<f64>,
    banned_ctr: usize,
    sums: HashMap<u32, f64>,
}

impl Default for SpeedupState {
    fn default() -> Self {
        Self::with_banned(BANNED_BASELINES.to_vec())
    }
}

impl SpeedupState {
    pub fn with_banned(banned: Vec<f64>) -> Self {
        Self {
            // Trials before the first baseline divide by one
            current_norm: 1.0,
            baselines: 0,
            banned,
            banned_ctr: 0,
            sums: KNOWN_THREAD_COUNTS.iter().map(|&k| (k, 0.0)).collect(),
        }
    }

    pub fn process(&mut self, measurement: Measurement) -> Result<Option<Speedup>, ProcessError> {
        match measurement {
            Measurement::Baseline { seconds } => {
                self.current_norm = seconds;
                self.baselines += 1;
                Ok(None)
            }
            Measurement::Trial { threads, seconds } => {
                // Exact equality: the banned values are verbatim baseline
                // measurements, not a tolerance band.
                if self.banned.contains(&self.current_norm) {
                    self.banned_ctr += 1;
                    return Ok(None);
                }

                let ratio = self.current_norm / seconds;
                let sum = self
                    .sums
                    .get_mut(&threads)
                    .ok_or(ProcessError::UnknownThreadCount(threads))?;
                *sum += ratio;

                Ok(Some(Speedup { threads, ratio }))
            }
        }
    }

    /// Baseline lines seen so far. Tallied but not part of any formula.
    pub fn baselines(&self) -> usize {
        self.baselines
    }

    pub fn into_averages(self) -> Result<Averages, ProcessError> {
        // Ten trials expected per thread count, one baseline shared by the
        // four counts, so each skipped baseline costs a quarter trial.
        let divisor = EXPECTED_TRIALS - self.banned_ctr as f64 / 4.0;
        if divisor <= 0.0 {
            return Err(ProcessError::NoUsableTrials);
        }

        Ok(Averages(
            KNOWN_THREAD_COUNTS
                .iter()
                .map(|k| (*k, self.sums[k] / divisor))
                .collect(),
        ))
    }
}

/// One trial's speedup against the baseline it was measured under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speedup {
    pub threads: u32,
    pub ratio: f64,
}

impl std::fmt::Display for Speedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // {:?} keeps the shortest round-trip float form, so 2.0 stays "2.0"
        write!(f, "Speedup for n = {} : {:?}", self.threads, self.ratio)
    }
}

/// Final per-thread-count averages, in sweep order.
#[derive(Debug, PartialEq)]
pub struct Averages(Vec<(u32, f64)>);

impl Averages {
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.0
    }

    pub fn write<Writer: std::io::Write>(self, mut f: Writer) -> Result<(), std::io::Error> {
        let entries = self
            .0
            .iter()
            .map(|(threads, mean)| format!("{}: {:?}", threads, mean))
            .collect::<Vec<_>>();

        writeln!(f, "{{{}}}", entries.join(", "))
    }
}

/// Averages the seconds column over contiguous runs of the same configuration
/// key, emitting each group's mean when the key changes.
///
/// The record that opens a new group is not counted towards it, and nothing
/// counts towards the initial `"n = 1"` group before the first record.
pub struct GroupMeanState {
    prev: String,
    total: f64,
    count: usize,
}

impl Default for GroupMeanState {
    fn default() -> Self {
        Self {
            prev: "n = 1".to_string(),
            total: 0.0,
            count: 0,
        }
    }
}

impl GroupMeanState {
    pub fn process(&mut self, record: TrialRecord) -> Result<Option<GroupMean>, ProcessError> {
        if record.config == self.prev {
            self.total += record.seconds;
            self.count += 1;
            return Ok(None);
        }

        let mean = self.mean()?;
        let finished = GroupMean {
            config: std::mem::replace(&mut self.prev, record.config),
            mean,
        };
        self.total = 0.0;
        self.count = 0;

        Ok(Some(finished))
    }

    /// Emits the group left open when the input ran out.
    pub fn finish(self) -> Result<GroupMean, ProcessError> {
        let mean = self.mean()?;
        Ok(GroupMean {
            config: self.prev,
            mean,
        })
    }

    fn mean(&self) -> Result<f64, ProcessError> {
        if self.count == 0 {
            return Err(ProcessError::EmptyGroup(self.prev.clone()));
        }
        Ok(self.total / self.count as f64)
    }
}

/// Mean seconds of one contiguous group of records.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub config: String,
    pub mean: f64,
}

impl std::fmt::Display for GroupMean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :  {:?}", self.config, self.mean)
    }
}

#[derive(Debug, PartialEq)]
pub enum ProcessError {
    UnknownThreadCount(u32),
    EmptyGroup(String),
    NoUsableTrials,
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownThreadCount(threads) => {
                write!(f, "Trial for unexpected thread count: {}", threads)
            }
            Self::EmptyGroup(config) => {
                write!(f, "No records accumulated for group \"{}\"", config)
            }
            Self::NoUsableTrials => {
                write!(f, "Every expected trial was banned; nothing to average")
            }
        }
    }
}

impl Error for ProcessError {}
