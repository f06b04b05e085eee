// SPDX-License-Identifier: MPL-2.0
//! Background scroll suppression as a scoped resource.
//!
//! The page (gallery) consults [`BackgroundScroll::behavior`] before honouring
//! scroll input. A viewer holds a [`ScrollLockGuard`] for as long as it is
//! mounted; dropping the guard restores whatever behaviour was in place when
//! it was acquired, whichever way the viewer goes away.

use std::cell::Cell;
use std::rc::Rc;

/// Whether the page behind the viewer may scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Locked,
}

/// Shared handle to the page scroll behaviour.
///
/// Cloning shares the same underlying cell. All access happens on the UI
/// thread, hence `Rc` rather than `Arc`.
#[derive(Debug, Clone, Default)]
pub struct BackgroundScroll {
    behavior: Rc<Cell<ScrollBehavior>>,
}

impl BackgroundScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior.get()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.behavior() == ScrollBehavior::Locked
    }

    /// Locks background scrolling until the returned guard is dropped.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn lock(&self) -> ScrollLockGuard {
        let previous = self.behavior.replace(ScrollBehavior::Locked);
        log::debug!("Background scroll locked (was {:?})", previous);
        ScrollLockGuard {
            behavior: Rc::clone(&self.behavior),
            previous,
        }
    }
}

/// Restores the previous scroll behaviour on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    behavior: Rc<Cell<ScrollBehavior>>,
    previous: ScrollBehavior,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.behavior.set(self.previous);
        log::debug!("Background scroll restored to {:?}", self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_and_release_restores_auto() {
        let scroll = BackgroundScroll::new();
        assert!(!scroll.is_locked());
        {
            let _guard = scroll.lock();
            assert!(scroll.is_locked());
        }
        assert_eq!(scroll.behavior(), ScrollBehavior::Auto);
    }

    #[test]
    fn nested_guards_release_in_reverse_order() {
        let scroll = BackgroundScroll::new();
        let outer = scroll.lock();
        let inner = scroll.lock();
        assert!(scroll.is_locked());

        drop(inner);
        assert!(scroll.is_locked());
        drop(outer);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn clones_share_the_same_state() {
        let scroll = BackgroundScroll::new();
        let page_view = scroll.clone();
        let _guard = scroll.lock();
        assert!(page_view.is_locked());
    }

    #[test]
    fn guard_released_during_unwind() {
        let scroll = BackgroundScroll::new();
        let shared = scroll.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = shared.lock();
            panic!("viewer torn down mid-gesture");
        }));
        assert!(result.is_err());
        assert!(!scroll.is_locked());
    }
}
