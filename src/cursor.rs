//! Scoped suppression of the platform's native cursor.
//!
//! While a pointer-follow effect is mounted the platform cursor must be
//! hidden, and must come back exactly once when the effect goes away: on
//! explicit release or on drop, whichever happens first, including abnormal
//! unmount paths.

use std::rc::Rc;

use log::debug;

/// Host hook for hiding and restoring the platform cursor.
pub trait CursorHost {
    fn suppress_native_cursor(&self);
    fn restore_native_cursor(&self);
}

/// RAII guard over a suppressed cursor.
///
/// Acquiring the guard suppresses the cursor; the guard restores it exactly
/// once, on [`release`](CursorSuppression::release) or on drop.
pub struct CursorSuppression {
    host: Rc<dyn CursorHost>,
    released: bool,
}

impl CursorSuppression {
    pub fn acquire(host: Rc<dyn CursorHost>) -> Self {
        debug!("suppressing native cursor");
        host.suppress_native_cursor();
        Self {
            host,
            released: false,
        }
    }

    /// Restore the native cursor now. Safe to call more than once; later
    /// calls (and the eventual drop) do nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        debug!("restoring native cursor");
        self.host.restore_native_cursor();
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for CursorSuppression {
    fn drop(&mut self) {
        self.release();
    }
}
