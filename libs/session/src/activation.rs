use std::cell::Cell;

/// Lets a side effect fire once per mount, no matter how many times the
/// owning component renders.
#[derive(Debug, Default)]
pub struct Activation {
    fired: Cell<bool>,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Returns true when `f` was invoked.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self.fired.replace(true) {
            tracing::trace!("activation: already fired");
            return false;
        }

        f();

        true
    }
}
