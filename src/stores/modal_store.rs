// ============================================================================
// MODAL STORE - record / upload / paywall dialogs
// ============================================================================
// Scoped to ModalContextProvider. Changed only through `open` and `close`;
// opening one dialog family closes the others.
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Record,
    Upload,
    Paywall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModalStore {
    pub record_open: bool,
    pub upload_open: bool,
    pub paywall_open: bool,
}

impl ModalStore {
    pub fn open(self, kind: ModalKind) -> Self {
        Self {
            record_open: kind == ModalKind::Record,
            upload_open: kind == ModalKind::Upload,
            paywall_open: kind == ModalKind::Paywall,
        }
    }

    pub fn close(self, kind: ModalKind) -> Self {
        match kind {
            ModalKind::Record => Self { record_open: false, ..self },
            ModalKind::Upload => Self { upload_open: false, ..self },
            ModalKind::Paywall => Self { paywall_open: false, ..self },
        }
    }

    pub fn close_all(self) -> Self {
        Self::default()
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Record => self.record_open,
            ModalKind::Upload => self.upload_open,
            ModalKind::Paywall => self.paywall_open,
        }
    }

    pub fn any_open(&self) -> bool {
        self.record_open || self.upload_open || self.paywall_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let store = ModalStore::default();
        assert!(!store.any_open());
    }

    #[test]
    fn opening_one_family_closes_the_others() {
        let store = ModalStore::default().open(ModalKind::Upload);
        assert!(store.upload_open);

        let store = store.open(ModalKind::Paywall);
        assert!(store.paywall_open);
        assert!(!store.upload_open);
        assert!(!store.record_open);
    }

    #[test]
    fn close_only_touches_its_own_flag() {
        let store = ModalStore::default().open(ModalKind::Record);
        assert_eq!(store.close(ModalKind::Upload), store);
        assert!(!store.close(ModalKind::Record).any_open());
    }

    #[test]
    fn close_all_dismisses_the_open_dialog() {
        let store = ModalStore::default().open(ModalKind::Paywall).close_all();
        assert_eq!(store, ModalStore::default());
    }
}
