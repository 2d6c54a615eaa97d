// SPDX-License-Identifier: MPL-2.0
//! Notification service: the only way to add or remove toasts.
//!
//! The [`ToastProvider`] is built once at application start and owns the
//! [`Store`]. Components that need to raise toasts receive a cloned
//! [`Toaster`] handle. Handles only enqueue commands; the provider applies
//! them in order when the update loop calls [`ToastProvider::flush`].
//!
//! Every accepted command also signals the provider's [`Wakeup`], so a loop
//! that is otherwise idle learns it has commands to apply.

use super::message::{NewToast, ToastId};
use super::store::Store;
use crate::error::{Error, Result};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::{mpsc, Notify};

#[derive(Debug)]
enum Command {
    Add(NewToast),
    Remove(ToastId),
}

/// Store mutation produced by [`ToastProvider::flush`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added(ToastId),
    Removed(ToastId),
}

/// Signal raised whenever a handle enqueues a command.
///
/// Signals sent while nobody waits are kept, so a waiter that arrives late
/// still wakes. Clones of one wakeup hash equal.
#[derive(Debug, Clone)]
pub struct Wakeup(Arc<Notify>);

impl Wakeup {
    /// Resolves once at least one command was enqueued since the last wake.
    pub async fn notified(&self) {
        self.0.notified().await;
    }
}

impl Hash for Wakeup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

/// Owner of the active toast collection.
#[derive(Debug)]
pub struct ToastProvider {
    store: Store,
    sender: mpsc::UnboundedSender<Command>,
    receiver: mpsc::UnboundedReceiver<Command>,
    wakeup: Wakeup,
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastProvider {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            store: Store::new(),
            sender,
            receiver,
            wakeup: Wakeup(Arc::new(Notify::new())),
        }
    }

    /// Returns a handle that components use to add and remove toasts.
    #[must_use]
    pub fn toaster(&self) -> Toaster {
        Toaster {
            sender: self.sender.clone(),
            wakeup: self.wakeup.clone(),
        }
    }

    /// Returns the signal raised when handles enqueue commands.
    #[must_use]
    pub fn wakeup(&self) -> Wakeup {
        self.wakeup.clone()
    }

    /// Read-only view of the active toasts.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Applies every pending command in the order it was sent.
    ///
    /// Removals of ids that are not active produce no [`Change`].
    pub fn flush(&mut self) -> Vec<Change> {
        let mut changes = Vec::new();

        while let Ok(command) = self.receiver.try_recv() {
            match command {
                Command::Add(request) => {
                    let id = self.store.add(request);
                    tracing::debug!(%id, active = self.store.len(), "toast added");
                    changes.push(Change::Added(id));
                }
                Command::Remove(id) => {
                    if self.store.remove(id) {
                        tracing::debug!(%id, active = self.store.len(), "toast removed");
                        changes.push(Change::Removed(id));
                    }
                }
            }
        }

        changes
    }
}

/// Cloneable handle to a [`ToastProvider`].
#[derive(Debug, Clone)]
pub struct Toaster {
    sender: mpsc::UnboundedSender<Command>,
    wakeup: Wakeup,
}

impl Toaster {
    /// Requests a new toast.
    ///
    /// # Panics
    ///
    /// Panics if the provider that issued this handle has been dropped.
    pub fn add_toast(&self, request: NewToast) {
        if let Err(err) = self.try_add_toast(request) {
            panic!("add_toast: {err}");
        }
    }

    /// Requests removal of a toast. Unknown ids are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the provider that issued this handle has been dropped.
    pub fn remove_toast(&self, id: ToastId) {
        if let Err(err) = self.try_remove_toast(id) {
            panic!("remove_toast: {err}");
        }
    }

    pub fn try_add_toast(&self, request: NewToast) -> Result<()> {
        self.send(Command::Add(request))
    }

    pub fn try_remove_toast(&self, id: ToastId) -> Result<()> {
        self.send(Command::Remove(id))
    }

    fn send(&self, command: Command) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|_| Error::ProviderClosed)?;
        self.wakeup.0.notify_one();
        Ok(())
    }

    /// Returns whether the owning provider is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.sender.is_closed()
    }
}
