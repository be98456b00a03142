use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{bs_icons::BsPersonPlusFill, fa_solid_icons::FaFileCsv},
    Icon,
};

use crate::common::{push_toast, ToastLevel};
use crate::components::donor_form::resolve_submission;
use crate::components::DonorTable;
use crate::server::donors::{export_donors_csv, list_donors, search_donor_records, DonorPage};
use crate::validation::BLOOD_GROUPS;
use crate::Route;

#[component]
pub fn Donors() -> Element {
    let mut page = use_signal(|| 1i64);
    let mut group = use_signal(String::new);
    let mut eligible_only = use_signal(|| false);

    let mut page_data = use_resource(move || {
        let group = group();
        let page = page();
        let eligible = eligible_only();
        async move {
            let filter = (!group.is_empty()).then_some(group);
            if eligible {
                // Eligible-only browsing skips pagination and shows the
                // whole matching set
                search_donor_records(String::new(), filter, true)
                    .await
                    .map(|donors| DonorPage {
                        total: donors.len() as i64,
                        page: 1,
                        per_page: (donors.len() as i64).max(1),
                        donors,
                    })
            } else {
                list_donors(page, filter).await
            }
        }
    });

    let export = move |_| {
        push_toast("Exporting donors...", ToastLevel::Info);
        spawn(async move {
            resolve_submission(export_donors_csv().await, None, None).await;
        });
    };

    let body = match &*page_data.read_unchecked() {
        Some(Ok(data)) => {
            let total_pages = if data.total == 0 {
                1
            } else {
                (data.total + data.per_page - 1) / data.per_page
            };
            let current = data.page;
            let total = data.total;
            if data.donors.is_empty() {
                rsx! {
                    div { class: "text-center py-16 bg-background-card rounded-xl border border-border shadow-md",
                        p { class: "text-xl font-medium text-text-primary", "No donors found" }
                        p { class: "text-text-secondary mt-2",
                            "Adjust the filters or register a new donor."
                        }
                    }
                }
            } else {
                rsx! {
                    DonorTable {
                        donors: data.donors.clone(),
                        on_deleted: move |_| page_data.restart(),
                    }

                    // Pagination
                    if !eligible_only() {
                        div { class: "flex items-center justify-between mt-4",
                            button {
                                class: "px-4 py-2 rounded-lg bg-background-medium text-text-primary border border-border hover:bg-background-hover transition-colors text-sm disabled:opacity-50",
                                disabled: current <= 1,
                                onclick: move |_| page.set(current - 1),
                                "Previous"
                            }
                            span { class: "text-sm text-text-muted",
                                "Page {current} of {total_pages} ({total} donors)"
                            }
                            button {
                                class: "px-4 py-2 rounded-lg bg-background-medium text-text-primary border border-border hover:bg-background-hover transition-colors text-sm disabled:opacity-50",
                                disabled: current >= total_pages,
                                onclick: move |_| page.set(current + 1),
                                "Next"
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "py-12 text-center",
                p { class: "text-accent-rose", "Could not load donors: {e}" }
            }
        },
        None => rsx! {
            div { class: "py-12 text-center",
                p { class: "text-text-secondary text-lg", "Loading..." }
            }
        },
    };

    rsx! {
        div { class: "container mx-auto py-6 px-4",
            div { class: "flex items-center justify-between mb-4",
                h1 { class: "text-3xl font-bold text-text-primary", "Donors" }
                div { class: "flex gap-2",
                    button {
                        class: "inline-flex items-center bg-background-medium text-text-primary px-4 py-2 rounded-lg border border-border hover:bg-background-hover transition-colors text-sm",
                        onclick: export,
                        Icon {
                            icon: FaFileCsv,
                            width: 14,
                            height: 14,
                            class: "mr-2",
                        }
                        "Export CSV"
                    }
                    Link {
                        to: Route::AddDonor {},
                        class: "inline-flex items-center bg-accent-teal text-text-invert px-4 py-2 rounded-lg hover:bg-opacity-80 transition-colors text-sm",
                        Icon {
                            icon: BsPersonPlusFill,
                            width: 14,
                            height: 14,
                            class: "mr-2",
                        }
                        "Add Donor"
                    }
                }
            }

            // Filters
            div { class: "flex flex-wrap items-center gap-4 mb-6",
                select {
                    class: "form-field w-48",
                    value: "{group}",
                    onchange: move |e| {
                        group.set(e.value());
                        page.set(1);
                    },
                    option { value: "", "All blood groups" }
                    for bg in BLOOD_GROUPS {
                        option { value: bg, "{bg}" }
                    }
                }
                label { class: "flex items-center gap-2 text-sm text-text-secondary cursor-pointer",
                    input {
                        r#type: "checkbox",
                        checked: eligible_only(),
                        onchange: move |e| eligible_only.set(e.checked()),
                    }
                    "Eligible only"
                }
            }

            {body}
        }
    }
}
