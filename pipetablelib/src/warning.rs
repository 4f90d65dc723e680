//! Warn-once state for drawing an empty table.
//!
//! The state is owned by whoever creates it. Clones share the same flag, so
//! handing one [`EmptyTableWarning`] to several builders suppresses the
//! warning across all of them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Message logged the first time an empty table is drawn.
pub const EMPTY_TABLE_MESSAGE: &str = "header and rows are both empty, nothing to render";

/// Explicit "already warned" flag for the empty-table warning.
#[derive(Debug, Clone, Default)]
pub struct EmptyTableWarning {
    fired: Arc<AtomicBool>,
}

impl EmptyTableWarning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the warning unless it already fired. Returns whether it was logged.
    pub fn warn(&self) -> bool {
        if self.fired.swap(true, Ordering::Relaxed) {
            return false;
        }
        tracing::warn!("{}", EMPTY_TABLE_MESSAGE);
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }

    /// Re-arm the warning.
    pub fn reset(&self) {
        self.fired.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warns_once() {
        let warning = EmptyTableWarning::new();
        assert!(!warning.has_fired());
        assert!(warning.warn());
        assert!(!warning.warn());
        assert!(!warning.warn());
        assert!(warning.has_fired());
    }

    #[test]
    fn test_clones_share_state() {
        let warning = EmptyTableWarning::new();
        let shared = warning.clone();
        assert!(shared.warn());
        assert!(warning.has_fired());
        assert!(!warning.warn());
    }

    #[test]
    fn test_reset() {
        let warning = EmptyTableWarning::new();
        assert!(warning.warn());
        warning.reset();
        assert!(!warning.has_fired());
        assert!(warning.warn());
    }
}
