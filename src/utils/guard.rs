//! Run a cleanup action when a scope ends, however it ends.
//!
//! `main` arms one guard per terminal mode it switches on, so an early `?`
//! during setup still puts the terminal back.

/// Calls its action exactly once, on drop.
pub struct OnDrop<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}
