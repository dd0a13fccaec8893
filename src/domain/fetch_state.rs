use strum::{AsRefStr, Display as StrumDisplay};

use super::catalog::Product;
use super::errors::CatalogError;

/// Where a one-shot fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T, E> {
    Pending,
    Succeeded(T),
    Failed(E),
}

/// Fieldless mirror of [`FetchState`] for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, StrumDisplay)]
pub enum FetchPhase {
    Pending,
    Succeeded,
    Failed,
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        FetchState::Pending
    }
}

impl<T, E> FetchState<T, E> {
    pub fn phase(&self) -> FetchPhase {
        match self {
            FetchState::Pending => FetchPhase::Pending,
            FetchState::Succeeded(_) => FetchPhase::Succeeded,
            FetchState::Failed(_) => FetchPhase::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Record the outcome of the fetch. Only a pending state moves; returns
    /// whether the result was applied.
    pub fn settle(&mut self, result: Result<T, E>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match result {
            Ok(value) => FetchState::Succeeded(value),
            Err(err) => FetchState::Failed(err),
        };
        true
    }
}

pub type CatalogState = FetchState<Vec<Product>, CatalogError>;

impl FetchState<Vec<Product>, CatalogError> {
    /// Products to display; empty unless the fetch succeeded.
    pub fn products(&self) -> &[Product] {
        self.value().map(Vec::as_slice).unwrap_or(&[])
    }
}
