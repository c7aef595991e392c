use crate::button::{ButtonContent, SubmitButton};
use crate::config::GuardConfig;
use crate::form::FormTarget;
use crate::timer::{Scheduler, TimerHandle};

/// Which of the guard's inputs was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// No form was submitted.
    Form,
    /// No button was found.
    Button,
    /// Neither was there.
    Both,
}

/// What [`SubmissionGuard::on_submit`] did.
///
/// Purely informational: a skipped submission is not an error and the surrounding
/// form submission proceeds either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The button was locked and a relock scheduled.
    Locked,
    /// Nothing was touched.
    Skipped(Missing),
}

/// Locks a submit button when its form is submitted.
///
/// On every submission the button is disabled, its content is replaced with a spinner
/// and the processing label, and one relock is scheduled to disable it again after
/// [`GuardConfig::relock_delay`]. The guard never enables a button.
///
/// At most one relock is outstanding: a new submission cancels the previous relock
/// before scheduling its own, and dropping the guard cancels whatever is pending.
pub struct SubmissionGuard<S: Scheduler> {
    config: GuardConfig,
    scheduler: S,
    pending: Option<TimerHandle>,
    submissions: u64,
}

impl<S: Scheduler> SubmissionGuard<S> {
    /// A guard with the default config.
    pub fn new(scheduler: S) -> Self {
        Self::with_config(GuardConfig::default(), scheduler)
    }

    /// A guard with a custom config.
    pub fn with_config(config: GuardConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            pending: None,
            submissions: 0,
        }
    }

    /// Handle a form submission.
    ///
    /// If either the form or the button is absent this is a silent no-op.
    pub fn on_submit<B: SubmitButton>(
        &mut self,
        form: Option<&FormTarget>,
        button: Option<&B>,
    ) -> GuardOutcome {
        let (form, button) = match (form, button) {
            (Some(form), Some(button)) => (form, button),
            (None, Some(_)) => return self.skip(Missing::Form),
            (Some(_), None) => return self.skip(Missing::Button),
            (None, None) => return self.skip(Missing::Both),
        };

        let mut button = button.clone();
        button.set_disabled(true);
        button.set_content(ButtonContent::loading(self.config.processing_label.clone()));

        self.cancel_pending();

        let delay = self.config.relock_delay();
        self.pending = Some(self.scheduler.schedule(
            delay,
            Box::new(move || {
                tracing::trace!("relocking submit button");
                button.set_disabled(true);
            }),
        ));

        self.submissions += 1;
        tracing::debug!(
            form = %form.id,
            button = %self.config.button_id,
            ?delay,
            "locked submit button"
        );

        GuardOutcome::Locked
    }

    /// Cancel the outstanding relock, if any. Returns whether one was cancelled.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(mut handle) => handle.cancel(),
            None => false,
        }
    }

    /// Whether a relock is scheduled and hasn't run yet.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(TimerHandle::is_pending)
    }

    /// Number of submissions that locked the button.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// The config this guard runs with.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    fn skip(&self, missing: Missing) -> GuardOutcome {
        tracing::debug!(?missing, "submit guard skipped");
        GuardOutcome::Skipped(missing)
    }
}

impl<S: Scheduler> Drop for SubmissionGuard<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<S: Scheduler> std::fmt::Debug for SubmissionGuard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionGuard")
            .field("config", &self.config)
            .field("pending", &self.pending)
            .field("submissions", &self.submissions)
            .finish()
    }
}
