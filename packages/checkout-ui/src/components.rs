use crate::hooks::use_submission_guard;
use dioxus::prelude::*;
use submit_guard::{ButtonState, FormTarget, GuardConfig, CHECKOUT_BUTTON_ID, SPINNER_CLASSES};

/// Small inline spinner shown in front of the processing label.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span {
            class: "{SPINNER_CLASSES}",
            role: "status",
            aria_hidden: "true",
        }
    }
}

/// The form's submit button, rendered from its [`ButtonState`].
#[component]
pub fn CheckoutButton(
    #[props(default = CHECKOUT_BUTTON_ID.to_string())] id: String,
    state: Signal<ButtonState>,
) -> Element {
    let ButtonState { disabled, content } = (*state.read()).clone();
    let loading = content.is_loading();

    rsx! {
        button {
            id: "{id}",
            r#type: "submit",
            class: "btn btn-primary w-100",
            disabled,
            if loading {
                Spinner {}
            }
            "{content}"
        }
    }
}

/// A checkout form that locks its submit button once submitted.
///
/// `children` are rendered above the button, typically the order summary, and can reach the
/// form's guard with `use_context::<UseSubmissionGuard>()`. The submission itself isn't
/// intercepted: the browser still posts the form to `target.action`.
///
/// `config` is read once at mount. The button id comes from that same snapshot, so it always
/// matches the guard's label and delay.
#[component]
pub fn CheckoutForm(
    #[props(default)] target: FormTarget,
    #[props(default)] config: GuardConfig,
    children: Element,
) -> Element {
    let guard = use_submission_guard(config, target.submit_label.clone());
    use_context_provider(|| guard.clone());
    let button = guard.button();

    let FormTarget { id, action, .. } = target.clone();
    let button_id = guard.config().button_id;

    rsx! {
        form {
            id: "{id}",
            action: "{action}",
            method: "post",
            onsubmit: move |_| {
                guard.submit(Some(&target));
            },
            {children}
            CheckoutButton { id: button_id, state: button }
        }
    }
}
