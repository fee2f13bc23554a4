// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Lifecycle of a single submission attempt.
//!
//! `Idle -> Pending -> {Success | Error}`, back to `Idle` on the next edit or
//! when another event is selected.

/// Status message shown after a successful POST.
pub const SUCCESS_MESSAGE: &str = "Registered successfully!";
/// Status message shown after a rejected or failed POST.
pub const FAILURE_MESSAGE: &str = "Submission failed!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Enter `Pending`. Returns `false` and leaves the state alone when a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = Self::Success(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    /// Return to `Idle` after an edit. An in-flight submission is kept.
    pub fn settle(&mut self) {
        if !self.is_pending() {
            *self = Self::Idle;
        }
    }

    /// Unconditional return to `Idle`, used when the form itself is replaced.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) | Self::Error(msg) => Some(msg),
            Self::Idle | Self::Pending => None,
        }
    }
}
