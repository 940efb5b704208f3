use std::fmt;

use crate::{FileCandidate, FileKind};

/// Opaque id of a preview resource. Minted by the registry and never reused;
/// the engine maps it to something a viewer can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreviewHandle(pub u64);

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFileEntry {
    pub file: FileCandidate,
    pub handle: PreviewHandle,
    pub kind: FileKind,
    pub accepted_at: String,
}

/// Accepted files, newest batch first. Within a batch, acceptance order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRegistry {
    entries: Vec<UploadedFileEntry>,
    next_handle: u64,
}

impl Default for UploadRegistry {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 1,
        }
    }
}

impl UploadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a batch of already-validated candidates in front of every
    /// older entry and returns the full ordered list.
    pub fn accept(&mut self, batch: &[FileCandidate], accepted_at: &str) -> &[UploadedFileEntry] {
        let fresh: Vec<UploadedFileEntry> = batch
            .iter()
            .map(|file| UploadedFileEntry {
                handle: self.mint_handle(),
                kind: FileKind::classify(&file.mime),
                accepted_at: accepted_at.to_string(),
                file: file.clone(),
            })
            .collect();
        self.entries.splice(0..0, fresh);
        &self.entries
    }

    /// Takes one entry out of the registry. The caller owns releasing its handle.
    pub fn remove(&mut self, handle: PreviewHandle) -> Option<UploadedFileEntry> {
        let idx = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(idx))
    }

    /// Empties the registry on teardown, handing every entry back for release.
    pub fn drain_all(&mut self) -> Vec<UploadedFileEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn get(&self, handle: PreviewHandle) -> Option<&UploadedFileEntry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    pub fn entries(&self) -> &[UploadedFileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn mint_handle(&mut self) -> PreviewHandle {
        let handle = PreviewHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &UploadRegistry) -> Vec<&str> {
        registry
            .entries()
            .iter()
            .map(|e| e.file.name.as_str())
            .collect()
    }

    #[test]
    fn newer_batches_precede_older_ones() {
        let mut registry = UploadRegistry::new();
        registry.accept(
            &[
                FileCandidate::new("a.pdf", 1, "application/pdf"),
                FileCandidate::new("b.png", 1, "image/png"),
            ],
            "10:00:00",
        );
        registry.accept(
            &[
                FileCandidate::new("c.jpg", 1, "image/jpeg"),
                FileCandidate::new("d.pdf", 1, "application/pdf"),
            ],
            "10:00:05",
        );

        assert_eq!(names(&registry), vec!["c.jpg", "d.pdf", "a.pdf", "b.png"]);
        assert_eq!(registry.entries()[0].accepted_at, "10:00:05");
        assert_eq!(registry.entries()[3].kind, FileKind::Image);
    }

    #[test]
    fn handles_are_unique_and_not_reused_after_removal() {
        let mut registry = UploadRegistry::new();
        registry.accept(&[FileCandidate::new("a.pdf", 1, "application/pdf")], "t");
        let first = registry.entries()[0].handle;

        let removed = registry.remove(first).unwrap();
        assert_eq!(removed.handle, first);
        assert!(registry.is_empty());
        assert!(registry.remove(first).is_none());

        registry.accept(&[FileCandidate::new("a.pdf", 1, "application/pdf")], "t");
        assert_ne!(registry.entries()[0].handle, first);
    }

    #[test]
    fn drain_all_returns_every_entry() {
        let mut registry = UploadRegistry::new();
        registry.accept(
            &[
                FileCandidate::new("a.pdf", 1, "application/pdf"),
                FileCandidate::new("b.png", 1, "image/png"),
            ],
            "t",
        );

        let drained = registry.drain_all();
        assert_eq!(drained.len(), 2);
        assert_eq!(registry.len(), 0);
    }
}
