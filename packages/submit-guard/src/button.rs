use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The well-known id of the checkout button.
pub const CHECKOUT_BUTTON_ID: &str = "checkout-btn";

/// The label shown next to the spinner while a submission is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";

/// Classes of the small inline spinner rendered in front of the processing label.
pub const SPINNER_CLASSES: &str = "spinner-border spinner-border-sm me-2";

/// What a button currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonContent {
    /// Plain text label.
    Label(String),

    /// A spinner followed by a label.
    Loading {
        /// Text rendered after the spinner.
        label: String,
    },
}

impl ButtonContent {
    /// Spinner plus the given label.
    pub fn loading(label: impl Into<String>) -> Self {
        Self::Loading {
            label: label.into(),
        }
    }

    /// The text part of the content, with or without a spinner.
    pub fn label(&self) -> &str {
        match self {
            ButtonContent::Label(label) => label,
            ButtonContent::Loading { label } => label,
        }
    }

    /// Whether a spinner is shown.
    pub fn is_loading(&self) -> bool {
        matches!(self, ButtonContent::Loading { .. })
    }
}

impl fmt::Display for ButtonContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observable state of a submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    /// Whether the button ignores clicks.
    pub disabled: bool,

    /// What the button displays.
    pub content: ButtonContent,
}

impl ButtonState {
    /// An enabled button showing `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            disabled: false,
            content: ButtonContent::Label(label.into()),
        }
    }

    /// A disabled button showing the spinner and `label`.
    pub fn processing(label: impl Into<String>) -> Self {
        Self {
            disabled: true,
            content: ButtonContent::loading(label),
        }
    }
}

/// A reference to a button the guard can lock.
///
/// Implementors are cheap handles: the guard clones one into the deferred relock,
/// so every clone must point at the same underlying button.
pub trait SubmitButton: Clone + 'static {
    /// Current value of the `disabled` flag.
    fn is_disabled(&self) -> bool;

    /// Set the `disabled` flag.
    fn set_disabled(&mut self, disabled: bool);

    /// Replace what the button displays.
    fn set_content(&mut self, content: ButtonContent);

    /// Snapshot of the whole button.
    fn state(&self) -> ButtonState;
}

/// A plain shared button, for hosts that don't bring their own reactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedButton(Rc<RefCell<ButtonState>>);

impl SharedButton {
    /// A new, enabled button showing `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_state(ButtonState::new(label))
    }

    /// Wrap an existing state.
    pub fn from_state(state: ButtonState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    /// Whether two handles refer to the same button.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SubmitButton for SharedButton {
    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn set_content(&mut self, content: ButtonContent) {
        self.0.borrow_mut().content = content;
    }

    fn state(&self) -> ButtonState {
        self.0.borrow().clone()
    }
}
