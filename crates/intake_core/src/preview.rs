use crate::PreviewHandle;

/// Single-slot preview selection: `Idle` or `Previewing(handle)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewController {
    #[default]
    Idle,
    Previewing(PreviewHandle),
}

impl PreviewController {
    /// Valid from any state; replaces a current selection directly.
    pub fn select(&mut self, handle: PreviewHandle) {
        *self = PreviewController::Previewing(handle);
    }

    pub fn dismiss(&mut self) {
        *self = PreviewController::Idle;
    }

    pub fn selected(&self) -> Option<PreviewHandle> {
        match self {
            PreviewController::Idle => None,
            PreviewController::Previewing(handle) => Some(*handle),
        }
    }

    /// Drops the selection if it points at `handle`. Used when an entry goes away.
    pub fn forget(&mut self, handle: PreviewHandle) {
        if self.selected() == Some(handle) {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_dismiss_returns_to_idle() {
        let mut preview = PreviewController::default();
        preview.select(PreviewHandle(1));
        preview.dismiss();
        assert_eq!(preview, PreviewController::Idle);

        preview.dismiss();
        assert_eq!(preview, PreviewController::Idle);
    }

    #[test]
    fn reselect_switches_without_dismiss() {
        let mut preview = PreviewController::default();
        preview.select(PreviewHandle(1));
        preview.select(PreviewHandle(2));
        assert_eq!(preview, PreviewController::Previewing(PreviewHandle(2)));
    }

    #[test]
    fn forget_only_clears_matching_selection() {
        let mut preview = PreviewController::default();
        preview.select(PreviewHandle(2));
        preview.forget(PreviewHandle(1));
        assert_eq!(preview.selected(), Some(PreviewHandle(2)));
        preview.forget(PreviewHandle(2));
        assert_eq!(preview.selected(), None);
    }
}
