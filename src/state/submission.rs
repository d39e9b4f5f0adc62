//! Outcome of a login or registration form submission.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::time::Duration;

use leptos::prelude::{RwSignal, Set};

use crate::net::api::ApiError;
use crate::net::types::OperationResult;
use crate::util::command::{Command, Scheduler};
use crate::util::route::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
}

impl MessageStyle {
    /// Class applied to the `#message` element.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Server-supplied feedback line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub style: MessageStyle,
}

impl StatusMessage {
    pub fn from_result(result: &OperationResult) -> Self {
        Self {
            text: result.message.clone(),
            style: if result.success { MessageStyle::Success } else { MessageStyle::Error },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: StatusMessage,
    /// Delayed redirect, present only on success.
    pub command: Option<Command>,
}

impl FormOutcome {
    pub fn from_result(result: &OperationResult, on_success: &Route, delay: Duration) -> Self {
        let command = result
            .success
            .then(|| Command::NavigateAfter { to: on_success.href(), delay });
        Self { message: StatusMessage::from_result(result), command }
    }

    /// Hand the redirect (if any) to `scheduler` and return the message to show.
    pub fn dispatch(self, scheduler: &impl Scheduler) -> StatusMessage {
        if let Some(command) = self.command {
            scheduler.schedule(command);
        }
        self.message
    }
}

/// Store the message and run the redirect. A failed request is only logged;
/// whatever `#message` showed before stays.
pub fn apply_outcome(
    message: RwSignal<Option<StatusMessage>>,
    outcome: Result<FormOutcome, ApiError>,
    scheduler: &impl Scheduler,
    form: &str,
) {
    match outcome {
        Ok(outcome) => message.set(Some(outcome.dispatch(scheduler))),
        Err(err) => log::warn!("{form} request failed: {err}"),
    }
}
