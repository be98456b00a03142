use dioxus::prelude::*;

use crate::components::{DonorForm, DonorFormMode};
use crate::server::donors::fetch_donor;
use crate::validation::DonorInput;
use crate::Route;

#[component]
pub fn EditDonor(id: i64) -> Element {
    let donor = use_resource(move || async move { fetch_donor(id).await });

    let body = match &*donor.read_unchecked() {
        Some(Ok(Some(record))) => {
            let initial = DonorInput {
                name: record.name.clone(),
                blood_group: record.blood_group.clone(),
                phone: record.phone.clone(),
                email: record.email.clone(),
                address: record.address.clone(),
            };
            rsx! {
                div { class: "bg-background-card rounded-xl p-6 border border-border shadow-md",
                    DonorForm { mode: DonorFormMode::Edit(id), initial }
                }
            }
        }
        Some(Ok(None)) => rsx! {
            div { class: "text-center py-16 bg-background-card rounded-xl border border-border shadow-md",
                p { class: "text-xl font-medium text-text-primary", "Invalid donor ID" }
                p { class: "text-text-secondary mt-2",
                    Link { to: Route::Donors {}, class: "text-accent-teal hover:underline",
                        "Back to the donor list"
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "py-12 text-center",
                p { class: "text-accent-rose", "Could not load donor: {e}" }
            }
        },
        None => rsx! {
            div { class: "py-12 text-center",
                p { class: "text-text-secondary text-lg", "Loading..." }
            }
        },
    };

    rsx! {
        div { class: "container mx-auto py-6 px-4 max-w-2xl",
            h1 { class: "text-3xl font-bold mb-4 text-text-primary", "Edit Donor" }
            p { class: "mb-6 text-text-secondary", "Update the donor's details." }
            {body}
        }
    }
}
