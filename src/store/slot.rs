/// Fetch state of a single store slot
///
/// `NotRequested` and `Failed` both count as absent: the owning fetch hook will
/// issue a request on its next activation. `Loading` marks a request in flight
/// so that concurrent activations do not fire duplicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot<T> {
    #[default]
    NotRequested,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Slot<T> {
    /// Whether a fetch hook should request this slot's data
    pub fn needs_fetch(&self) -> bool {
        match self {
            Slot::NotRequested | Slot::Failed(_) => true,
            Slot::Loading | Slot::Loaded(_) => false,
        }
    }

    /// Loaded data, if any
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Slot::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.loaded().is_none()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Slot::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_fetch() {
        assert!(Slot::<Vec<u32>>::NotRequested.needs_fetch());
        assert!(Slot::<Vec<u32>>::Failed("timeout".to_string()).needs_fetch());
        assert!(!Slot::<Vec<u32>>::Loading.needs_fetch());
        assert!(!Slot::Loaded(Vec::<u32>::new()).needs_fetch());
    }

    #[test]
    fn test_empty_is_not_absent() {
        let empty: Slot<Vec<u32>> = Slot::Loaded(vec![]);
        assert!(!empty.is_absent());
        assert_eq!(empty.loaded(), Some(&vec![]));

        let unfetched: Slot<Vec<u32>> = Slot::default();
        assert!(unfetched.is_absent());
    }
}
