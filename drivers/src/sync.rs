//! Shared backend handles.
//!
//! Every component on a board holds a clone of the same handle, so all
//! access to one physical board is serialised through one lock.

use std::sync::Arc;

pub use spin::{Mutex as SpinLock, MutexGuard as SpinLockGuard};

/// A backend shared between the components of one board.
pub type Shared<T> = Arc<SpinLock<T>>;

/// Wrap a backend for sharing.
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(SpinLock::new(value))
}
