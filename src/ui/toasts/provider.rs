// SPDX-License-Identifier: MPL-2.0
//! Ambient access to the toast manager.
//!
//! A `ToastProvider` owns the manager of one application tree. Code holding
//! the provider can pass a `ToastHandle` around explicitly; code that cannot
//! calls [`use_toast`] while a provider scope is entered on the current
//! thread. Outside any scope `use_toast` fails with
//! [`Error::OutsideProvider`] instead of handing back a detached manager.

use super::entry::{Entry, ToastId, ToastRequest};
use super::manager::Manager;
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

thread_local! {
    static SCOPES: RefCell<Vec<(u64, ToastHandle)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE: Cell<u64> = const { Cell::new(0) };
}

/// Shared, single-threaded access to a provider's manager.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    manager: Rc<RefCell<Manager>>,
}

impl ToastHandle {
    /// Appends a toast and returns its id.
    pub fn add_toast(&self, request: ToastRequest) -> ToastId {
        self.manager.borrow_mut().add(request)
    }

    /// Removes the toast with `id`; unknown ids are ignored.
    pub fn remove_toast(&self, id: ToastId) -> bool {
        self.manager.borrow_mut().remove(id)
    }

    /// Snapshot of the active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Entry> {
        self.manager.borrow().toasts().to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.manager.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manager.borrow().is_empty()
    }

    #[cfg(test)]
    fn same_provider(&self, other: &ToastHandle) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager)
    }
}

/// Owner of the toast manager for one application tree.
#[derive(Debug)]
pub struct ToastProvider {
    handle: ToastHandle,
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::from_manager(Manager::new())
    }
}

impl ToastProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider whose manager applies `default_duration`.
    #[must_use]
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self::from_manager(Manager::with_default_duration(default_duration))
    }

    fn from_manager(manager: Manager) -> Self {
        Self {
            handle: ToastHandle {
                manager: Rc::new(RefCell::new(manager)),
            },
        }
    }

    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        self.handle.clone()
    }

    /// Makes this provider the innermost ambient scope until the guard drops.
    ///
    /// Dropping a guard only ends its own scope; scopes entered after it
    /// stay active.
    #[must_use = "the scope ends as soon as the guard is dropped"]
    pub fn enter(&self) -> ProviderScope {
        let id = NEXT_SCOPE.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        SCOPES.with(|scopes| scopes.borrow_mut().push((id, self.handle.clone())));
        ProviderScope {
            id,
            _not_send: PhantomData,
        }
    }

    /// Runs `f` with this provider entered.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _scope = self.enter();
        f()
    }
}

/// Guard returned by [`ToastProvider::enter`].
#[derive(Debug)]
pub struct ProviderScope {
    id: u64,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            if let Some(pos) = scopes.iter().rposition(|(id, _)| *id == self.id) {
                scopes.remove(pos);
            }
        });
    }
}

/// Returns the handle of the innermost entered provider.
///
/// # Errors
///
/// Returns [`Error::OutsideProvider`] when no provider scope is active on
/// this thread.
pub fn use_toast() -> Result<ToastHandle> {
    SCOPES
        .with(|scopes| scopes.borrow().last().map(|(_, handle)| handle.clone()))
        .ok_or_else(|| {
            tracing::error!("toast API used outside of a ToastProvider");
            Error::OutsideProvider
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_toast_outside_provider_fails() {
        let err = use_toast().unwrap_err();
        assert_eq!(err, Error::OutsideProvider);
        assert_eq!(err.to_string(), "use_toast must be used within a ToastProvider");
    }

    #[test]
    fn use_toast_reaches_entered_provider() {
        let provider = ToastProvider::new();
        provider.scope(|| {
            let handle = use_toast().expect("inside provider");
            handle.add_toast(ToastRequest::success("Test message"));
        });

        let toasts = provider.handle().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message(), "Test message");
    }

    #[test]
    fn scope_ends_when_guard_drops() {
        let provider = ToastProvider::new();
        {
            let _scope = provider.enter();
            assert!(use_toast().is_ok());
        }
        assert!(use_toast().is_err());
    }

    #[test]
    fn innermost_scope_wins() {
        let outer = ToastProvider::new();
        let inner = ToastProvider::new();

        let _outer_scope = outer.enter();
        {
            let _inner_scope = inner.enter();
            assert!(use_toast().unwrap().same_provider(&inner.handle()));
        }
        assert!(use_toast().unwrap().same_provider(&outer.handle()));
    }

    #[test]
    fn outer_guard_dropped_first_keeps_inner_scope() {
        let outer = ToastProvider::new();
        let inner = ToastProvider::new();

        let outer_scope = outer.enter();
        let inner_scope = inner.enter();
        drop(outer_scope);

        assert!(use_toast().unwrap().same_provider(&inner.handle()));
        drop(inner_scope);
        assert!(use_toast().is_err());
    }

    #[test]
    fn handles_share_one_collection() {
        let provider = ToastProvider::new();
        let a = provider.handle();
        let b = provider.handle();

        let id = a.add_toast(ToastRequest::warning("shared"));
        assert_eq!(b.len(), 1);

        assert!(b.remove_toast(id));
        assert!(a.is_empty());
    }

    #[test]
    fn provider_default_duration_is_applied() {
        let provider = ToastProvider::with_default_duration(Duration::from_secs(3));
        let handle = provider.handle();
        handle.add_toast(ToastRequest::success("quick"));
        assert_eq!(handle.toasts()[0].duration(), Duration::from_secs(3));
    }
}
