use std::{cell::RefCell, rc::Rc};

use crate::Result;

/// Moves the current browsing context somewhere else entirely, replacing the
/// current history entry. Not an in-app route change.
pub trait Navigate {
    fn replace(&self, url: &str) -> Result<()>;
}

impl<T: Navigate + ?Sized> Navigate for Rc<T> {
    fn replace(&self, url: &str) -> Result<()> {
        self.as_ref().replace(url)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn replace(&self, url: &str) -> Result<()> {
        self.visited.borrow_mut().push(url.to_owned());

        Ok(())
    }
}
