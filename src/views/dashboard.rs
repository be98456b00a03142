use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsDropletFill, BsPeopleFill},
    Icon,
};

use crate::server::donors::blood_group_stats;

#[component]
pub fn Dashboard() -> Element {
    let stats = use_resource(|| async move { blood_group_stats().await });

    rsx! {
        div { class: "container mx-auto py-6 px-4",
            h1 { class: "text-3xl font-bold mb-4 text-text-primary", "Dashboard" }
            p { class: "mb-6 text-text-secondary", "Registry overview by blood group." }

            match &*stats.read_unchecked() {
                Some(Ok(stats)) => rsx! {
                    // Summary cards
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-8",
                        div { class: "bg-background-card rounded-xl p-6 border border-border shadow-md flex items-center",
                            div { class: "w-12 h-12 bg-accent-teal bg-opacity-20 rounded-full flex items-center justify-center mr-4",
                                Icon {
                                    icon: BsPeopleFill,
                                    width: 22,
                                    height: 22,
                                    class: "text-accent-teal",
                                }
                            }
                            div {
                                p { class: "text-text-muted text-sm", "Total donors" }
                                p { class: "text-3xl font-bold text-text-primary", "{stats.total_donors}" }
                            }
                        }
                        div { class: "bg-background-card rounded-xl p-6 border border-border shadow-md flex items-center",
                            div { class: "w-12 h-12 bg-accent-rose bg-opacity-20 rounded-full flex items-center justify-center mr-4",
                                Icon {
                                    icon: BsDropletFill,
                                    width: 22,
                                    height: 22,
                                    class: "text-accent-rose",
                                }
                            }
                            div {
                                p { class: "text-text-muted text-sm", "Eligible today" }
                                p { class: "text-3xl font-bold text-text-primary", "{stats.eligible_donors}" }
                            }
                        }
                    }

                    // Per-group table
                    div { class: "bg-background-card rounded-xl border border-border shadow-md overflow-hidden",
                        table { class: "w-full text-sm text-left",
                            thead { class: "text-xs uppercase text-text-muted bg-background-medium",
                                tr {
                                    th { class: "px-4 py-3", "Blood Group" }
                                    th { class: "px-4 py-3", "Donors" }
                                    th { class: "px-4 py-3", "Eligible" }
                                }
                            }
                            tbody {
                                for group in stats.by_group.iter() {
                                    tr {
                                        key: "{group.group}",
                                        class: "border-b border-border hover:bg-background-hover",
                                        td { class: "px-4 py-3",
                                            span { class: "px-2 py-1 rounded-full text-xs bg-accent-rose bg-opacity-20 text-accent-rose",
                                                "{group.group}"
                                            }
                                        }
                                        td { class: "px-4 py-3 text-text-primary", "{group.count}" }
                                        td { class: "px-4 py-3 text-text-secondary", "{group.eligible}" }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "mt-4 text-xs text-text-muted", "Last updated {stats.last_updated}" }
                },
                Some(Err(e)) => rsx! {
                    div { class: "py-12 text-center",
                        p { class: "text-accent-rose", "Could not load statistics: {e}" }
                    }
                },
                None => rsx! {
                    div { class: "py-12 text-center",
                        p { class: "text-text-secondary text-lg", "Loading..." }
                    }
                },
            }
        }
    }
}
