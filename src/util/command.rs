//! Navigation commands and the scheduler that runs them.
//!
//! Pages never touch `window.location` directly. They return a [`Command`]
//! and hand it to a [`Scheduler`]; the browser scheduler performs the
//! navigation (after a timer for delayed commands) while tests record it.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Navigate immediately with a full page load.
    Navigate(String),
    /// Navigate once `delay` has elapsed.
    NavigateAfter { to: String, delay: Duration },
}

impl Command {
    pub fn target(&self) -> &str {
        match self {
            Self::Navigate(to) | Self::NavigateAfter { to, .. } => to,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Self::Navigate(_) => Duration::ZERO,
            Self::NavigateAfter { delay, .. } => *delay,
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, command: Command);
}

/// Runs commands against the real `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, command: Command) {
        #[cfg(feature = "csr")]
        {
            match command {
                Command::Navigate(to) => navigate(&to),
                Command::NavigateAfter { to, delay } => {
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(delay).await;
                        navigate(&to);
                    });
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("navigation to {} skipped outside the browser", command.target());
        }
    }
}

#[cfg(feature = "csr")]
fn navigate(to: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; cannot navigate to {to}");
        return;
    };
    log::info!("navigating to {to}");
    if let Err(err) = window.location().set_href(to) {
        log::warn!("navigation to {to} failed: {err:?}");
    }
}

/// Collects scheduled commands instead of running them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingScheduler {
    pub scheduled: std::cell::RefCell<Vec<Command>>,
}

#[cfg(test)]
impl Scheduler for RecordingScheduler {
    fn schedule(&self, command: Command) {
        self.scheduled.borrow_mut().push(command);
    }
}
