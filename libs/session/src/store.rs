use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::Result;

/// Client side persistent key/value storage holding the credential token.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a key that isn't there succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.as_ref().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.as_ref().remove(key)
    }
}

/// Shared in-memory store, clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    removals: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned())),
        );
        store
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn removals(&self) -> usize {
        self.removals.get()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.removals.set(self.removals.get() + 1);
        self.entries.borrow_mut().remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn it_removes_present_key() -> Result<()> {
        let store = MemoryStore::with([("Authorization", "abc123")]);

        store.remove("Authorization")?;

        assert!(!store.contains("Authorization"));
        assert_eq!(store.get("Authorization")?, None);

        Ok(())
    }

    #[test]
    fn it_removes_missing_key_without_error() -> Result<()> {
        let store = MemoryStore::new();

        store.remove("Authorization")?;

        assert!(store.snapshot().is_empty());
        assert_eq!(store.removals(), 1);

        Ok(())
    }

    #[test]
    fn it_shares_entries_between_clones() -> Result<()> {
        let store = MemoryStore::new();
        let other = store.clone();

        other.set("Authorization", "abc123")?;

        assert_eq!(store.get("Authorization")?, Some("abc123".to_owned()));

        Ok(())
    }
}
