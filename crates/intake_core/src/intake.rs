use std::path::PathBuf;

/// User-facing message shown when a batch contains a disallowed file type.
pub const REJECTION_MESSAGE: &str = "Only PDF, PNG, JPG, JPEG allowed.";

const ALLOWED_TYPE_FRAGMENTS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

/// A file offered by a drop or a file picker, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    /// Declared MIME type as reported by the origin. Not content-verified.
    pub mime: String,
    /// Where the engine can read the bytes from, if anywhere.
    pub source: Option<PathBuf>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Result of splitting a batch by declared type. Both halves keep batch order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub accepted: Vec<FileCandidate>,
    pub rejected: Vec<FileCandidate>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// Loose substring check on the declared type; `image/jpeg` and
/// `application/pdf` pass, a missing type never does.
pub fn is_allowed_type(mime: &str) -> bool {
    ALLOWED_TYPE_FRAGMENTS
        .iter()
        .any(|fragment| mime.contains(fragment))
}

pub fn partition(candidates: &[FileCandidate]) -> Partition {
    let (accepted, rejected) = candidates
        .iter()
        .cloned()
        .partition(|candidate| is_allowed_type(&candidate.mime));
    Partition { accepted, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_types_are_allowed() {
        assert!(is_allowed_type("application/pdf"));
        assert!(is_allowed_type("image/png"));
        assert!(is_allowed_type("image/jpeg"));
        assert!(is_allowed_type("image/jpg"));
    }

    #[test]
    fn other_or_missing_types_are_rejected() {
        assert!(!is_allowed_type("text/plain"));
        assert!(!is_allowed_type("image/gif"));
        assert!(!is_allowed_type(""));
    }

    #[test]
    fn partition_is_total_and_order_preserving() {
        let batch = vec![
            FileCandidate::new("a.pdf", 10, "application/pdf"),
            FileCandidate::new("notes.txt", 5, "text/plain"),
            FileCandidate::new("b.png", 20, "image/png"),
            FileCandidate::new("blob", 1, ""),
        ];

        let split = partition(&batch);

        let accepted: Vec<_> = split.accepted.iter().map(|c| c.name.as_str()).collect();
        let rejected: Vec<_> = split.rejected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(accepted, vec!["a.pdf", "b.png"]);
        assert_eq!(rejected, vec!["notes.txt", "blob"]);
        assert_eq!(split.accepted.len() + split.rejected.len(), batch.len());
    }

    #[test]
    fn empty_batch_yields_empty_partition() {
        let split = partition(&[]);
        assert!(split.is_empty());
    }
}
