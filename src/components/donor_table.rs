use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        bs_icons::BsSearch,
        fa_solid_icons::{FaPencil, FaTrash},
    },
    Icon,
};

use crate::common::{push_toast, ToastLevel};
use crate::components::Tooltip;
use crate::server::donors::{remove_donor, DonorRecord};
use crate::Route;

/// Whether a donor row stays visible for the given quick-filter text:
/// case-insensitive substring match over the row's full text. An empty
/// query matches everything. Stateless, recomputed per keystroke.
pub fn donor_matches(donor: &DonorRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let row_text = format!(
        "{} {} {} {} {} {}",
        donor.name,
        donor.blood_group,
        donor.phone,
        donor.email,
        donor.address,
        donor.registration_date
    );
    row_text.to_lowercase().contains(&query)
}

// Blocking yes/no prompt. Only the browser offers one; on other platforms
// the guard lets the action through.
mod prompt {
    #[cfg(feature = "web")]
    pub fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    #[cfg(not(feature = "web"))]
    pub fn confirm(_message: &str) -> bool {
        true
    }
}

/// Donor table with a per-keystroke quick filter and a confirmation guard
/// on the delete action. Hidden rows stay in the tree; only their
/// visibility changes.
#[component]
pub fn DonorTable(donors: Vec<DonorRecord>, on_deleted: EventHandler<i64>) -> Element {
    let mut filter = use_signal(String::new);
    let nav = navigator();

    let delete = move |donor_id: i64| {
        // Declining leaves the row untouched; accepting proceeds unmodified
        if !prompt::confirm("Are you sure you want to delete this donor?") {
            return;
        }
        spawn(async move {
            match remove_donor(donor_id).await {
                Ok(outcome) if outcome.success => {
                    push_toast(
                        outcome.display_message(None, "Donor deleted").to_string(),
                        ToastLevel::Success,
                    );
                    on_deleted.call(donor_id);
                }
                Ok(outcome) => {
                    // The row vanished between render and click
                    push_toast(
                        outcome.display_message(None, "An error occurred").to_string(),
                        ToastLevel::Warning,
                    );
                }
                Err(e) => {
                    tracing::error!("Delete failed: {}", e);
                    push_toast("An error occurred. Please try again.", ToastLevel::Error);
                }
            }
        });
    };

    rsx! {
        div { class: "bg-background-card rounded-xl border border-border shadow-md overflow-hidden",
            // Quick filter
            div { class: "p-4 border-b border-border flex items-center gap-2",
                Icon { icon: BsSearch, width: 16, height: 16, class: "text-text-muted" }
                input {
                    class: "form-field flex-1",
                    r#type: "search",
                    placeholder: "Filter donors...",
                    value: "{filter}",
                    oninput: move |e| filter.set(e.value()),
                }
            }

            table { class: "w-full text-sm text-left",
                thead { class: "text-xs uppercase text-text-muted bg-background-medium",
                    tr {
                        th { class: "px-4 py-3", "Name" }
                        th { class: "px-4 py-3", "Blood Group" }
                        th { class: "px-4 py-3", "Phone" }
                        th { class: "px-4 py-3", "Email" }
                        th { class: "px-4 py-3", "Registered" }
                        th { class: "px-4 py-3", "Eligible" }
                        th { class: "px-4 py-3", "Actions" }
                    }
                }
                tbody {
                    // Hidden rows keep their place in the table; only the
                    // inline display toggles with the filter
                    {
                        donors
                            .iter()
                            .cloned()
                            .map(|donor| {
                                let id = donor.id;
                                let row_style = if donor_matches(&donor, &filter()) {
                                    ""
                                } else {
                                    "display: none;"
                                };
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        class: "border-b border-border hover:bg-background-hover",
                                        style: "{row_style}",
                                        td { class: "px-4 py-3 text-text-primary font-medium", "{donor.name}" }
                                        td { class: "px-4 py-3",
                                            span { class: "px-2 py-1 rounded-full text-xs bg-accent-rose bg-opacity-20 text-accent-rose",
                                                "{donor.blood_group}"
                                            }
                                        }
                                        td { class: "px-4 py-3 text-text-secondary", "{donor.phone}" }
                                        td { class: "px-4 py-3 text-text-secondary", "{donor.email}" }
                                        td { class: "px-4 py-3 text-text-muted", "{donor.registration_date}" }
                                        td { class: "px-4 py-3",
                                            if donor.eligible {
                                                span { class: "text-accent-green", "Yes" }
                                            } else {
                                                span { class: "text-text-muted", "On cooldown" }
                                            }
                                        }
                                        td { class: "px-4 py-3",
                                            div { class: "flex gap-2",
                                                Tooltip { text: "Edit donor",
                                                    button {
                                                        class: "p-2 rounded-lg text-text-muted hover:text-text-primary hover:bg-background-medium transition-colors",
                                                        onclick: move |_| {
                                                            nav.push(Route::EditDonor { id });
                                                        },
                                                        Icon { icon: FaPencil, width: 14, height: 14 }
                                                    }
                                                }
                                                Tooltip { text: "Delete donor",
                                                    button {
                                                        class: "p-2 rounded-lg text-text-muted hover:text-accent-rose hover:bg-background-medium transition-colors",
                                                        onclick: move |_| delete(id),
                                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            })
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, group: &str, address: &str) -> DonorRecord {
        DonorRecord {
            id: 1,
            name: name.to_string(),
            blood_group: group.to_string(),
            phone: "0123456789".to_string(),
            email: "donor@example.com".to_string(),
            address: address.to_string(),
            registration_date: "2024-01-15".to_string(),
            last_donation: None,
            eligible: true,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(donor_matches(&record("Jane Doe", "O+", "Elm Street"), ""));
    }

    #[test]
    fn match_is_case_insensitive_across_fields() {
        let donor = record("Jane Doe", "AB-", "12 Elm Street");
        assert!(donor_matches(&donor, "jane"));
        assert!(donor_matches(&donor, "ELM"));
        assert!(donor_matches(&donor, "ab-"));
        assert!(donor_matches(&donor, "0123"));
        assert!(!donor_matches(&donor, "oak street"));
    }

    #[test]
    fn clearing_the_query_shows_the_row_again() {
        let donor = record("Jane Doe", "O+", "Elm Street");
        assert!(!donor_matches(&donor, "zzz"));
        assert!(donor_matches(&donor, ""));
    }
}
