use crate::scheduler::TaskScheduler;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use submit_guard::{
    ButtonContent, ButtonState, FormTarget, GuardConfig, GuardOutcome, SubmissionGuard,
    SubmitButton,
};

/// A `Signal<ButtonState>` the submission guard can lock.
///
/// Writes are skipped when they wouldn't change anything, so the relock doesn't
/// re-render an already disabled button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSignal(pub Signal<ButtonState>);

impl SubmitButton for ButtonSignal {
    fn is_disabled(&self) -> bool {
        self.0.peek().disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        if self.0.peek().disabled != disabled {
            self.0.write().disabled = disabled;
        }
    }

    fn set_content(&mut self, content: ButtonContent) {
        if self.0.peek().content != content {
            self.0.write().content = content;
        }
    }

    fn state(&self) -> ButtonState {
        (*self.0.peek()).clone()
    }
}

/// Guard state for one form, returned by [`use_submission_guard`].
#[derive(Clone)]
pub struct UseSubmissionGuard {
    button: Signal<ButtonState>,
    guard: Rc<RefCell<SubmissionGuard<TaskScheduler>>>,
}

impl UseSubmissionGuard {
    /// The button's state. Hand this to [`CheckoutButton`](crate::CheckoutButton).
    pub fn button(&self) -> Signal<ButtonState> {
        self.button
    }

    /// Lock the button for a submission of `form`.
    pub fn submit(&self, form: Option<&FormTarget>) -> GuardOutcome {
        self.guard
            .borrow_mut()
            .on_submit(form, Some(&ButtonSignal(self.button)))
    }

    /// Cancel the pending relock. The button stays disabled.
    pub fn cancel(&self) -> bool {
        self.guard.borrow_mut().cancel_pending()
    }

    /// Whether a relock is still scheduled.
    pub fn has_pending(&self) -> bool {
        self.guard.borrow().has_pending()
    }

    /// The config the guard was created with.
    pub fn config(&self) -> GuardConfig {
        self.guard.borrow().config().clone()
    }
}

/// Create a submission guard for a button initially showing `label`.
///
/// `config` and `label` are read once, when the component mounts; later values are ignored.
/// The pending relock is cancelled when the component unmounts.
///
/// ```rust
/// use checkout_ui::{use_submission_guard, CheckoutButton, FormTarget, GuardConfig};
/// use dioxus::prelude::*;
///
/// fn PayForm() -> Element {
///     let guard = use_submission_guard(GuardConfig::default(), "Pay now");
///     let button = guard.button();
///     let target = FormTarget::new("pay-form", "/pay", "Pay now");
///
///     rsx! {
///         form {
///             onsubmit: move |_| {
///                 guard.submit(Some(&target));
///             },
///             CheckoutButton { state: button }
///         }
///     }
/// }
/// ```
pub fn use_submission_guard(config: GuardConfig, label: impl Into<String>) -> UseSubmissionGuard {
    let label = label.into();
    let button = use_signal(move || ButtonState::new(label));
    let guard = use_hook(move || {
        Rc::new(RefCell::new(SubmissionGuard::with_config(
            config,
            TaskScheduler,
        )))
    });

    let on_unmount = guard.clone();
    use_drop(move || {
        if on_unmount.borrow_mut().cancel_pending() {
            tracing::trace!("cancelled relock on unmount");
        }
    });

    UseSubmissionGuard { button, guard }
}
