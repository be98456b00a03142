use dioxus::prelude::*;
use futures_timer::Delay;
use server_fn::error::NoCustomError;

use crate::common::{push_toast, SubmitOutcome, ToastLevel, REDIRECT_DELAY};
use crate::server::donors::{create_donor, update_donor};
use crate::validation::{
    blood_group_is_valid, email_is_valid, name_is_valid, phone_is_valid, sanitize_phone,
    validate_donor, DonorInput, BLOOD_GROUPS,
};
use crate::Route;

const DEFAULT_SUCCESS: &str = "Operation successful";
const DEFAULT_ERROR: &str = "An error occurred";
const TRANSPORT_ERROR: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DonorFormMode {
    Create,
    Edit(i64),
}

/// Handle a finished submission. The toast is always pushed before any
/// redirect is scheduled; the redirect itself fires after a fixed delay.
/// Transport failures are logged and absorbed here, never re-thrown.
pub async fn resolve_submission(
    result: Result<SubmitOutcome, ServerFnError<NoCustomError>>,
    success_message: Option<&str>,
    redirect: Option<(Navigator, Route)>,
) {
    match result {
        Ok(outcome) if outcome.success => {
            push_toast(
                outcome
                    .display_message(success_message, DEFAULT_SUCCESS)
                    .to_string(),
                ToastLevel::Success,
            );
            if let Some((nav, target)) = redirect {
                Delay::new(REDIRECT_DELAY).await;
                nav.push(target);
            }
        }
        Ok(outcome) => {
            push_toast(
                outcome.display_message(None, DEFAULT_ERROR).to_string(),
                ToastLevel::Error,
            );
        }
        Err(e) => {
            tracing::error!("Form submission failed: {}", e);
            push_toast(TRANSPORT_ERROR, ToastLevel::Error);
        }
    }
}

/// Donor entry form shared by the add and edit views. Validates locally
/// before anything touches the network; after the first submit attempt the
/// per-field validity styling goes live.
#[component]
pub fn DonorForm(mode: DonorFormMode, initial: DonorInput) -> Element {
    let mut fields = use_signal({
        let initial = initial.clone();
        move || initial.clone()
    });
    let mut attempted = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let nav = navigator();

    // Validity class for a text field: neutral until a submit was attempted
    let field_class = move |valid: bool| {
        if !attempted() {
            ""
        } else if valid {
            "is-valid"
        } else {
            "is-invalid"
        }
    };

    // Read once per render; signal writes below re-render the form
    let current = fields();
    let name_class = field_class(name_is_valid(&current.name));
    let phone_class = field_class(phone_is_valid(&current.phone));
    let email_class = field_class(email_is_valid(&current.email));
    // A chosen group is marked valid right away, independent of the
    // submit-attempted state
    let group_class = if blood_group_is_valid(&current.blood_group) {
        "is-valid"
    } else if attempted() {
        "is-invalid"
    } else {
        ""
    };

    let onsubmit = move |e: Event<FormData>| {
        e.prevent_default();
        attempted.set(true);

        let input = fields();
        // An invalid form never reaches the network layer
        if !validate_donor(&input).is_empty() {
            return;
        }

        submitting.set(true);
        spawn(async move {
            let result = match mode {
                DonorFormMode::Create => create_donor(input).await,
                DonorFormMode::Edit(id) => update_donor(id, input).await,
            };
            submitting.set(false);
            resolve_submission(result, None, Some((nav, Route::Donors {}))).await;
        });
    };

    rsx! {
        form {
            class: "space-y-5",
            class: if attempted() { "was-validated" } else { "" },
            novalidate: true,
            onsubmit,

            // Name
            div {
                label { class: "block mb-1 text-sm font-medium text-text-secondary", r#for: "donor-name",
                    "Full name"
                }
                input {
                    id: "donor-name",
                    class: "form-field {name_class}",
                    r#type: "text",
                    placeholder: "Jane Doe",
                    value: "{current.name}",
                    oninput: move |e| fields.write().name = e.value(),
                }
                if attempted() && !name_is_valid(&current.name) {
                    p { class: "invalid-feedback", "Name should contain only letters and spaces" }
                }
            }

            // Blood group
            div {
                label { class: "block mb-1 text-sm font-medium text-text-secondary", r#for: "donor-blood-group",
                    "Blood group"
                }
                select {
                    id: "donor-blood-group",
                    class: "form-field {group_class}",
                    value: "{current.blood_group}",
                    onchange: move |e| fields.write().blood_group = e.value(),
                    option { value: "", "Select blood group" }
                    for group in BLOOD_GROUPS {
                        option { value: group, "{group}" }
                    }
                }
                if attempted() && !blood_group_is_valid(&current.blood_group) {
                    p { class: "invalid-feedback", "Invalid blood group" }
                }
            }

            // Phone
            div {
                label { class: "block mb-1 text-sm font-medium text-text-secondary", r#for: "donor-phone",
                    "Phone (10 digits)"
                }
                input {
                    id: "donor-phone",
                    class: "form-field {phone_class}",
                    r#type: "tel",
                    maxlength: "10",
                    placeholder: "0123456789",
                    value: "{current.phone}",
                    // Every keystroke rewrites the field to digits only
                    oninput: move |e| fields.write().phone = sanitize_phone(&e.value()),
                }
                if attempted() && !phone_is_valid(&current.phone) {
                    p { class: "invalid-feedback", "Phone number must be 10 digits" }
                }
            }

            // Email
            div {
                label { class: "block mb-1 text-sm font-medium text-text-secondary", r#for: "donor-email",
                    "Email"
                }
                input {
                    id: "donor-email",
                    class: "form-field {email_class}",
                    r#type: "email",
                    placeholder: "jane@example.com",
                    value: "{current.email}",
                    oninput: move |e| fields.write().email = e.value(),
                }
                if attempted() && !email_is_valid(&current.email) {
                    p { class: "invalid-feedback", "Invalid email address" }
                }
            }

            // Address
            div {
                label { class: "block mb-1 text-sm font-medium text-text-secondary", r#for: "donor-address",
                    "Address"
                }
                textarea {
                    id: "donor-address",
                    class: "form-field",
                    rows: "3",
                    placeholder: "Street, city",
                    value: "{current.address}",
                    oninput: move |e| fields.write().address = e.value(),
                }
            }

            button {
                class: "bg-accent-teal hover:bg-opacity-80 text-text-primary font-medium rounded-lg text-sm px-6 py-3 focus:outline-none transition-colors disabled:opacity-50",
                r#type: "submit",
                disabled: submitting(),
                if submitting() {
                    "Saving..."
                } else if matches!(mode, DonorFormMode::Create) {
                    "Add Donor"
                } else {
                    "Save Changes"
                }
            }
        }
    }
}
