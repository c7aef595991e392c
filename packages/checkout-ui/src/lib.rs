//! Dioxus Checkout
//!
//! ## Overview
//! ------------
//! A checkout form whose submit button can't be pressed twice. Submitting the form disables the button, swaps
//! its label for a spinner and "Processing...", and re-asserts the lock a short moment later. The locking logic
//! lives in [`submit_guard`]; this crate wires it into Dioxus state:
//!
//! - [`ButtonSignal`] lets the guard drive a `Signal<ButtonState>`, so every lock re-renders the button.
//! - [`TaskScheduler`] runs the deferred relock as a Dioxus task, which the guard cancels on resubmission and
//!   the hook cancels on unmount.
//! - [`use_submission_guard`] owns the guard and the button signal for one form.
//!
//! ```rust, no_run
//! use checkout_ui::CheckoutForm;
//! use dioxus::prelude::*;
//!
//! fn app() -> Element {
//!     rsx! {
//!         CheckoutForm {
//!             p { "Order total: $42.00" }
//!         }
//!     }
//! }
//! ```

mod components;
mod hooks;
mod scheduler;

pub use components::*;
pub use hooks::*;
pub use scheduler::TaskScheduler;

pub use submit_guard::{ButtonContent, ButtonState, FormTarget, GuardConfig, GuardOutcome};
