use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Cell holding view-model state that async loaders patch on completion.
///
/// Implemented for `RwSignal` (the app) and `Rc<RefCell<_>>` (plain Rust
/// callers). Both methods return `None` once the owner is gone, which happens
/// when a page unmounts while requests are still in flight.
pub trait SharedState<T> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> SharedState<T> for RwSignal<T> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> SharedState<T> for Rc<RefCell<T>> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
