// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active toasts.
//!
//! Only the provider in [`super::service`] mutates a `Store`; everything
//! else sees it through a shared reference.

use super::message::{NewToast, Toast, ToastId};

/// Active toasts in insertion order (oldest first).
#[derive(Debug, Default)]
pub struct Store {
    toasts: Vec<Toast>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `request` and appends it.
    pub(super) fn add(&mut self, request: NewToast) -> ToastId {
        let toast = Toast::from_request(request);
        let id = toast.id();
        self.toasts.push(toast);
        id
    }

    /// Removes the toast with `id`.
    ///
    /// Returns `true` if a record was removed. Unknown ids are a no-op.
    pub(super) fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id() != id);
        self.toasts.len() < before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.toasts.iter().map(Toast::id)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
