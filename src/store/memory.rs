use super::*;
use std::cell::RefCell;
use std::io::ErrorKind;
use std::rc::Rc;

/// Keeps contacts in memory. Clones share the same state, so a test can hand
/// one clone to a `ContactBook` and inspect what was saved through another.
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Rc<RefCell<MemState>>,
}

#[derive(Default)]
struct MemState {
    data: Vec<Contact>,
    saves: usize,
    failure: Option<ErrorKind>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().data = contacts;
        store
    }

    /// A store whose every load and save fails with `kind`.
    pub fn failing(kind: ErrorKind) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().failure = Some(kind);
        store
    }

    pub fn data(&self) -> Vec<Contact> {
        self.inner.borrow().data.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let state = self.inner.borrow();
        if let Some(kind) = state.failure {
            return Err(std::io::Error::from(kind).into());
        }
        Ok(state.data.clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut state = self.inner.borrow_mut();
        if let Some(kind) = state.failure {
            return Err(std::io::Error::from(kind).into());
        }
        state.data = contacts.to_vec();
        state.saves += 1;
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
