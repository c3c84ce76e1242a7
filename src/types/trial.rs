/// A condensed benchmark record, slimmed down to the two columns the
/// averaging pass actually reads.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub config: String,
    pub seconds: f64,
}

impl From<TrialFields> for TrialRecord {
    fn from(fields: TrialFields) -> Self {
        Self {
            config: fields.config,
            seconds: fields.seconds,
        }
    }
}

/// An intermediate type to leverage the serde deserialisation provided by the
/// csv crate. Columns are positional, in the order the extract stage emits
/// them; every condensed record ends with ", ", which the reader sees as an
/// empty trailing column, hence the optional last field.
#[derive(serde::Deserialize, Debug)]
pub struct TrialFields {
    pub stamp: String,
    pub instance: String,
    pub outcome: String,
    pub iterations: String,
    pub config: String,
    pub seconds: f64,
    #[serde(default)]
    pub trailing: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{TrialFields, TrialRecord};

    fn read_one(row: &str) -> TrialFields {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(row.as_bytes())
            .deserialize()
            .next()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_deserialize_condensed_record() {
        let fields = read_one("0.0000012345, instance01, SAT, 987, n = 16, 0.0042, \n");

        assert_eq!(fields.stamp, "0.0000012345");
        assert_eq!(fields.instance, "instance01");
        assert_eq!(fields.outcome, "SAT");
        assert_eq!(fields.iterations, "987");
        assert_eq!(fields.config, "n = 16");
        assert_eq!(fields.seconds, 0.0042);
        assert_eq!(fields.trailing, None);
    }

    #[test]
    fn test_record_from_fields() {
        let record = TrialRecord::from(read_one("stamp, i, SAT, 1, n = 2, 1.5, \n"));

        assert_eq!(
            record,
            TrialRecord {
                config: "n = 2".into(),
                seconds: 1.5
            }
        );
    }
}
