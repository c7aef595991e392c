//! A cart page whose checkout button locks itself once the form is submitted.
//!
//! ```sh
//! dx serve --example checkout --features web
//! ```

use checkout_ui::CheckoutForm;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::initialize_default();
    dioxus::launch(app);
}

fn app() -> Element {
    rsx! {
        div { class: "container py-4",
            h1 { "Your cart" }
            CheckoutForm {
                ul { class: "list-group mb-3",
                    li { class: "list-group-item", "Espresso beans x2 $24.00" }
                    li { class: "list-group-item", "Pour-over kettle $18.00" }
                }
                p { class: "fw-bold", "Order total: $42.00" }
            }
        }
    }
}
