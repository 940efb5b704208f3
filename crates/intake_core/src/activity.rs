use crate::FileCandidate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub text: String,
    pub time: String,
}

/// Append-only event log, newest record first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityLog {
    records: Vec<ActivityRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// One record per batch, naming only the first file. Multi-file batches
    /// are summarised by their first entry.
    pub fn record(&mut self, batch: &[FileCandidate], time: &str) {
        let Some(first) = batch.first() else {
            return;
        };
        self.record_text(format!("Uploaded {}", first.name), time);
    }

    pub fn record_text(&mut self, text: impl Into<String>, time: &str) {
        self.records.insert(
            0,
            ActivityRecord {
                text: text.into(),
                time: time.to_string(),
            },
        );
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_batch_naming_first_file() {
        let mut log = ActivityLog::new();
        log.record(
            &[
                FileCandidate::new("first.pdf", 1, "application/pdf"),
                FileCandidate::new("second.png", 1, "image/png"),
            ],
            "09:00:00",
        );
        log.record(&[FileCandidate::new("third.jpg", 1, "image/jpeg")], "09:01:00");

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].text, "Uploaded third.jpg");
        assert_eq!(log.records()[1].text, "Uploaded first.pdf");
        assert_eq!(log.records()[1].time, "09:00:00");
    }

    #[test]
    fn empty_batch_records_nothing() {
        let mut log = ActivityLog::new();
        log.record(&[], "09:00:00");
        assert!(log.is_empty());
    }
}
