//! Advisory diagnostics.
//!
//! Nothing in this crate fails hard. Questionable inputs degrade to a usable
//! result (an empty salt, or no mnemonic) and the reason is reported next to
//! the result as a [`Diagnostic`]. Every diagnostic is also logged as a
//! `tracing` warning when it is raised.

/// A non-fatal problem with an input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// No usable salt was supplied; an empty salt is used instead.
    #[error("invalid salt, no salt will be used (non secure)")]
    MissingSalt,

    /// The salt is shorter than recommended.
    #[error("salt should be larger, at least {min} characters (got {len})")]
    WeakSalt { len: usize, min: usize },

    /// The address argument was missing or not valid UTF-8 text.
    #[error("address argument should be a string")]
    NonTextAddress,
}

impl Diagnostic {
    pub(crate) fn raise(self) -> Self {
        tracing::warn!(target: "ipmnemonic", "{}", self);
        self
    }
}

/// A value paired with the diagnostics raised while producing it.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checked<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Checked<T> {
    pub(crate) fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Returns a reference to the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The diagnostics, in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if no diagnostic was raised.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Discards the diagnostics and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Splits into the value and the diagnostics.
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }

    /// Returns the value only if no diagnostic was raised, otherwise the first diagnostic.
    pub fn into_strict(self) -> Result<T, Diagnostic> {
        match self.diagnostics.into_iter().next() {
            Some(diagnostic) => Err(diagnostic),
            None => Ok(self.value),
        }
    }

    /// Maps the value, keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}
