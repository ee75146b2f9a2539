//! Analyze Logs - View Model
//!
//! `FormController` owns the `InteractionState` signal and runs the
//! submission lifecycle: validate, raise the in-flight flag, call the
//! service, then store the result or raise a notice. The view only reads
//! the state.

use std::rc::Rc;

use leptos::prelude::*;

use super::model::{LogFile, SubmissionService};
use super::state::{InteractionState, Notice};

pub type StateSignal<F> = RwSignal<InteractionState<F>, LocalStorage>;

/// Surfaces notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to show notice: {}", notice.message());
            return;
        };
        if let Err(e) = window.alert_with_message(notice.message()) {
            log::warn!("failed to show notice {:?}: {:?}", notice, e);
        }
    }
}

/// How a `submit()` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Precondition failed, nothing was sent
    Rejected(Notice),
    /// Another submission is still in flight
    Busy,
    Succeeded,
    Failed,
    /// The view was disposed, the result went nowhere
    Discarded,
}

/// Holds the in-flight flag for one submission. Dropping the guard without
/// settling lowers the flag, so every exit path ends with the form idle.
struct InFlight<F: 'static> {
    state: StateSignal<F>,
    settled: bool,
}

impl<F: 'static> InFlight<F> {
    fn acquire(state: StateSignal<F>) -> Option<Self> {
        state.try_update(|s| s.start_submission())?;
        Some(Self {
            state,
            settled: false,
        })
    }

    fn is_live(&self) -> bool {
        self.state.try_with_untracked(|_| ()).is_some()
    }

    /// Returns false if the state is gone.
    fn settle(mut self, result: Option<serde_json::Value>) -> bool {
        self.settled = true;
        self.state
            .try_update(|s| s.finish_submission(result))
            .is_some()
    }
}

impl<F: 'static> Drop for InFlight<F> {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self.state.try_update(|s| s.finish_submission(None));
        }
    }
}

pub struct FormController<F: 'static, S, N> {
    state: StateSignal<F>,
    service: Rc<S>,
    notifier: Rc<N>,
}

impl<F: 'static, S, N> Clone for FormController<F, S, N> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            service: Rc::clone(&self.service),
            notifier: Rc::clone(&self.notifier),
        }
    }
}

impl<F, S, N> FormController<F, S, N>
where
    F: LogFile,
    S: SubmissionService<F>,
    N: Notifier,
{
    pub fn new(service: S, notifier: N) -> Self {
        Self::with_state(RwSignal::new_local(InteractionState::new()), service, notifier)
    }

    pub fn with_state(state: StateSignal<F>, service: S, notifier: N) -> Self {
        Self {
            state,
            service: Rc::new(service),
            notifier: Rc::new(notifier),
        }
    }

    pub fn state(&self) -> ReadSignal<InteractionState<F>, LocalStorage> {
        self.state.read_only()
    }

    pub fn select_file(&self, file: F) {
        log::debug!("selected {} ({} bytes)", file.file_name(), file.size_bytes());
        self.state.update(|s| s.select_file(file));
    }

    pub fn set_prompt(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.update(|s| s.set_prompt(text));
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let Some(busy) = self.state.try_with_untracked(|s| s.is_submitting()) else {
            return SubmitOutcome::Discarded;
        };
        if busy {
            log::warn!("submit ignored: a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        let Some(validated) = self.state.try_with_untracked(|s| s.validate()) else {
            return SubmitOutcome::Discarded;
        };
        let input = match validated {
            Ok(input) => input,
            Err(notice) => {
                self.notifier.notify(notice);
                return SubmitOutcome::Rejected(notice);
            }
        };

        let Some(in_flight) = InFlight::acquire(self.state) else {
            return SubmitOutcome::Discarded;
        };
        log::info!(
            "submitting {} ({} bytes) for analysis",
            input.file.file_name(),
            input.file.size_bytes()
        );

        match self.service.submit(&input.file, &input.prompt).await {
            Ok(value) => {
                if in_flight.settle(Some(value)) {
                    log::info!("analysis result received");
                    SubmitOutcome::Succeeded
                } else {
                    log::debug!("analysis result discarded: view is gone");
                    SubmitOutcome::Discarded
                }
            }
            Err(err) => {
                log::error!("analysis request failed: {}", err);
                if !in_flight.is_live() {
                    return SubmitOutcome::Discarded;
                }
                self.notifier.notify(Notice::ApiError);
                drop(in_flight);
                SubmitOutcome::Failed
            }
        }
    }
}
