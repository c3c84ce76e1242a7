/// Condenses a raw solver log into one comma-separated record per run.
///
/// A line starting with `I` (the initialization banner) opens a new run; the
/// `Solution …` lines that follow contribute columns cut out of the line at
/// fixed byte positions. A record is only emitted once the next run's banner
/// arrives, so the log's final record is never flushed. `Solution` lines seen
/// before any banner are dropped.
#[derive(Default)]
pub struct Condenser {
    current: Option<String>,
}

impl Condenser {
    /// Feeds one log line (without its trailing newline); returns the
    /// previous run's completed record if this line starts a new run.
    pub fn feed(&mut self, line: &str) -> Option<String> {
        if line.starts_with('I') {
            let finished = self.current.take();

            // The banner's last 12 bytes carry the run stamp
            let stamp_start = line.len().saturating_sub(12);
            let mut record = String::new();
            push_column(&mut record, clipped(line, stamp_start, line.len()));
            self.current = Some(record);

            finished
        } else if line.starts_with("Solution f") {
            if let Some(record) = self.current.as_mut() {
                push_column(record, clipped(line, 33, 43));
                push_column(record, clipped(line, 47, 52));
                push_column(record, trailing_run(line, 6, |b| b.is_ascii_digit()));
            }
            None
        } else if line.starts_with("Solution (") {
            if let Some(record) = self.current.as_mut() {
                push_column(record, clipped(line, 10, 16));
                push_column(
                    record,
                    trailing_run(line, 0, |b| b.is_ascii_digit() || b == b'.'),
                );
            }
            None
        } else {
            None
        }
    }
}

fn push_column(record: &mut String, column: &str) {
    record.push_str(column);
    record.push_str(", ");
}

/// Byte range of the line, clamped to its length (the logs are ASCII).
fn clipped(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    let start = start.min(end);
    line.get(start..end).unwrap_or("")
}

/// The run of accepted bytes ending `back_offset` bytes before the end of the
/// line, scanned right to left.
fn trailing_run(line: &str, back_offset: usize, accept: fn(u8) -> bool) -> &str {
    let bytes = line.as_bytes();
    let end = match bytes.len().checked_sub(back_offset) {
        Some(end) => end,
        None => return "",
    };

    let mut start = end;
    while start > 0 && accept(bytes[start - 1]) {
        start -= 1;
    }

    clipped(line, start, end)
}
