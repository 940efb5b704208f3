use crate::{ActivityRecord, FileKind, PreviewHandle, StorageUsage, UploadedFileEntry, Viewer};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Recent uploads, newest first.
    pub uploads: Vec<UploadRowView>,
    pub rejection: Option<String>,
    pub progress: ProgressView,
    pub activity: Vec<ActivityRecord>,
    pub storage: StorageUsage,
    pub preview: Option<PreviewView>,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRowView {
    pub handle: PreviewHandle,
    pub kind: FileKind,
    pub icon: &'static str,
    pub name: String,
    pub size_kb: u64,
    pub accepted_at: String,
}

impl UploadRowView {
    pub(crate) fn from_entry(entry: &UploadedFileEntry) -> Self {
        Self {
            handle: entry.handle,
            kind: entry.kind,
            icon: entry.kind.icon(),
            name: entry.file.name.clone(),
            size_kb: bytes_to_kb(entry.file.size),
            accepted_at: entry.accepted_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressView {
    pub percent: u32,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub viewer: Viewer,
    /// Handle the viewer loads its content from.
    pub source: PreviewHandle,
    pub caption: String,
}

/// Rounds to the nearest KB, halves away from zero.
fn bytes_to_kb(bytes: u64) -> u64 {
    bytes.saturating_add(512) / 1024
}

#[cfg(test)]
mod tests {
    use super::bytes_to_kb;

    #[test]
    fn kb_rounding() {
        assert_eq!(bytes_to_kb(0), 0);
        assert_eq!(bytes_to_kb(511), 0);
        assert_eq!(bytes_to_kb(512), 1);
        assert_eq!(bytes_to_kb(1024), 1);
        assert_eq!(bytes_to_kb(1535), 1);
        assert_eq!(bytes_to_kb(1536), 2);
    }
}
