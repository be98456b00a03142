use dioxus::prelude::*;

use crate::components::{DonorForm, DonorFormMode};
use crate::validation::DonorInput;

#[component]
pub fn AddDonor() -> Element {
    rsx! {
        div { class: "container mx-auto py-6 px-4 max-w-2xl",
            h1 { class: "text-3xl font-bold mb-4 text-text-primary", "Register Donor" }
            p { class: "mb-6 text-text-secondary",
                "All fields are checked before anything is sent to the server."
            }
            div { class: "bg-background-card rounded-xl p-6 border border-border shadow-md",
                DonorForm { mode: DonorFormMode::Create, initial: DonorInput::default() }
            }
        }
    }
}
