use serde::{Deserialize, Serialize};

/// The form whose submission triggers the guard.
///
/// The guard itself only cares that a form is present. The fields are used by
/// renderers to build the `<form>` element and the button's initial label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTarget {
    /// Element id of the form.
    pub id: String,

    /// URL the form posts to.
    pub action: String,

    /// Label of the submit button before anything is submitted.
    pub submit_label: String,
}

impl FormTarget {
    /// A form posting to `action`.
    pub fn new(
        id: impl Into<String>,
        action: impl Into<String>,
        submit_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            submit_label: submit_label.into(),
        }
    }

    /// The cart page's checkout form.
    pub fn checkout() -> Self {
        Self::new("checkout-form", "/checkout", "Proceed to Checkout")
    }
}

impl Default for FormTarget {
    fn default() -> Self {
        Self::checkout()
    }
}
