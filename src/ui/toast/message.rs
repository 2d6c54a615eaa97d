// SPDX-License-Identifier: MPL-2.0
//! Toast records and the request type used to create them.
//!
//! A [`Toast`] is immutable once built: the store only ever appends or
//! removes whole records.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a toast, stable for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Visual treatment of a toast. Has no effect on lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Accent color used for the border and icon.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_700,
            ToastKind::Success => palette::SUCCESS_700,
            ToastKind::Error => palette::ERROR_700,
        }
    }

    /// Card background color.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_50,
            ToastKind::Success => palette::SUCCESS_50,
            ToastKind::Error => palette::ERROR_50,
        }
    }
}

/// A toast request: everything but the identifier.
///
/// `kind` is optional on purpose so call sites can omit it; it resolves to
/// [`ToastKind::Info`] when the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToast {
    pub kind: Option<ToastKind>,
    pub title: String,
    pub description: Option<String>,
}

impl NewToast {
    /// Creates a request with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Info)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Error)
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An active toast record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    title: String,
    description: Option<String>,
}

impl Toast {
    /// Builds a record from a request, assigning a fresh id.
    pub(super) fn from_request(request: NewToast) -> Self {
        let NewToast {
            kind,
            title,
            description,
        } = request;

        Self {
            id: ToastId::new(),
            kind: kind.unwrap_or_default(),
            title,
            description,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
