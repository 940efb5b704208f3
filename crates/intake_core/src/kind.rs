/// Coarse content classification used to pick a viewer and an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
}

/// Which viewer the preview modal should mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Document,
    Image,
}

impl FileKind {
    /// Same loose rule as intake: anything mentioning `pdf` is a document,
    /// every other accepted type is an image.
    pub fn classify(mime: &str) -> Self {
        if mime.contains("pdf") {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }

    pub fn viewer(self) -> Viewer {
        match self {
            FileKind::Pdf => Viewer::Document,
            FileKind::Image => Viewer::Image,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Image => "🖼️",
        }
    }
}
