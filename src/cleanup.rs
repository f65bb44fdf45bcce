//! Scoped cleanup for listeners and other acquired resources.
//!
//! Every registration (event listener, frame-driven animation, cursor
//! suppression) pushes a cleanup callback into the owning scope. Disposing
//! the scope runs them once, in reverse registration order, so resources
//! release in LIFO order and nothing dangles after unmount.

pub struct CleanupScope {
    cleanups: Vec<Box<dyn FnOnce()>>,
    disposed: bool,
}

impl CleanupScope {
    pub fn new() -> Self {
        Self {
            cleanups: Vec::new(),
            disposed: false,
        }
    }

    /// Register a callback to run when the scope is disposed. No-op after
    /// disposal.
    pub fn on_cleanup(&mut self, f: impl FnOnce() + 'static) {
        if !self.disposed {
            self.cleanups.push(Box::new(f));
        }
    }

    /// Number of registrations still awaiting cleanup. Useful for leak
    /// assertions: after disposal this returns to zero.
    pub fn len(&self) -> usize {
        self.cleanups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }

    /// Run all cleanups in reverse order. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for cleanup in self.cleanups.drain(..).rev() {
            cleanup();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for CleanupScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CleanupScope {
    fn drop(&mut self) {
        self.dispose();
    }
}
