// crates/toolgate-core/src/core/identifiers.rs
// ============================================================================
// Module: Toolgate Identifiers
// Description: Canonical identifiers for adapters, actions, and registrations.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout Toolgate.
//! An [`AdapterId`] is always stored in normalized form (trimmed, lower-cased)
//! because the normalized string is the registry lookup key; two registrations
//! that normalize to the same id address the same record. Action names are
//! opaque and compared verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Adapter Identifier
// ============================================================================

/// Error raised when an adapter identifier cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterIdError {
    /// Identifier was empty after trimming.
    #[error("adapter id must not be empty")]
    Empty,
}

/// Normalized adapter identifier used as the registry lookup key.
///
/// # Invariants
/// - Always trimmed and lower-cased; construction enforces normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdapterId(String);

impl AdapterId {
    /// Normalizes a raw identifier into its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterIdError::Empty`] when the input is empty after
    /// trimming.
    pub fn normalize(raw: &str) -> Result<Self, AdapterIdError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AdapterIdError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a title-cased display form of the identifier.
    ///
    /// Used as the display-name fallback when a registration carries no name.
    #[must_use]
    pub fn title_case(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut at_word_start = true;
        for ch in self.0.chars() {
            if ch.is_alphanumeric() {
                if at_word_start {
                    out.extend(ch.to_uppercase());
                } else {
                    out.push(ch);
                }
                at_word_start = false;
            } else {
                out.push(ch);
                at_word_start = true;
            }
        }
        out
    }
}

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Action Name
// ============================================================================

/// Named action exposed by an adapter, resolved to a route at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionName(String);

impl ActionName {
    /// Creates a new action name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the action name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ActionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Registration Token
// ============================================================================

/// Process-wide sequence backing registration tokens.
static REGISTRATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Opaque token distinguishing one registration from another.
///
/// # Invariants
/// - Tokens issued within a process are unique and monotonically increasing.
///   Wall-clock precision is not part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationToken(u64);

impl RegistrationToken {
    /// Issues the next registration token.
    #[must_use]
    pub fn next() -> Self {
        Self(REGISTRATION_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegistrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
