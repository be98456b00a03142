use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsBarChartFill, BsPersonPlusFill, BsSearch},
    Icon,
};

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col",
            // Hero section
            div { class: "container mx-auto px-4 py-20 text-center",
                span { class: "text-6xl", "🩸" }
                h1 { class: "text-4xl md:text-5xl font-bold mb-6 mt-6 text-text-primary",
                    "Blood Donor Management"
                }
                p { class: "text-xl text-text-secondary mb-8 leading-relaxed max-w-2xl mx-auto",
                    "Register donors, track eligibility, and find the right blood group when it matters."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    Link {
                        to: Route::AddDonor {},
                        class: "inline-flex items-center justify-center bg-accent-teal text-text-invert px-6 py-3 rounded-lg shadow-sm hover:bg-opacity-80 transition-colors",
                        Icon {
                            icon: BsPersonPlusFill,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "Register a Donor"
                    }
                    Link {
                        to: Route::Donors {},
                        class: "inline-flex items-center justify-center bg-background-medium text-text-primary px-6 py-3 rounded-lg shadow-sm hover:bg-background-hover border border-border transition-colors",
                        Icon {
                            icon: BsSearch,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "Browse Donors"
                    }
                }
            }

            // Features section
            div { class: "bg-background-card border-t border-b border-border py-16",
                div { class: "container mx-auto px-4",
                    h2 { class: "text-3xl font-bold text-center mb-12 text-text-primary",
                        "What it does"
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        div { class: "p-6 rounded-xl border border-border bg-background-medium shadow-sm",
                            div { class: "w-12 h-12 bg-accent-teal bg-opacity-20 rounded-full flex items-center justify-center mb-4",
                                Icon {
                                    icon: BsPersonPlusFill,
                                    width: 22,
                                    height: 22,
                                    class: "text-accent-teal",
                                }
                            }
                            h3 { class: "text-xl font-semibold mb-2 text-text-primary",
                                "Donor Registry"
                            }
                            p { class: "text-text-secondary",
                                "Validated registration with blood group, contact details and donation history."
                            }
                        }
                        div { class: "p-6 rounded-xl border border-border bg-background-medium shadow-sm",
                            div { class: "w-12 h-12 bg-accent-amber bg-opacity-20 rounded-full flex items-center justify-center mb-4",
                                Icon {
                                    icon: BsBarChartFill,
                                    width: 22,
                                    height: 22,
                                    class: "text-accent-amber",
                                }
                            }
                            h3 { class: "text-xl font-semibold mb-2 text-text-primary",
                                "Eligibility Tracking"
                            }
                            p { class: "text-text-secondary",
                                "Donors go on a 90-day cooldown after each donation; the dashboard shows who can give today."
                            }
                        }
                        div { class: "p-6 rounded-xl border border-border bg-background-medium shadow-sm",
                            div { class: "w-12 h-12 bg-accent-rose bg-opacity-20 rounded-full flex items-center justify-center mb-4",
                                Icon {
                                    icon: BsSearch,
                                    width: 22,
                                    height: 22,
                                    class: "text-accent-rose",
                                }
                            }
                            h3 { class: "text-xl font-semibold mb-2 text-text-primary",
                                "Fast Search"
                            }
                            p { class: "text-text-secondary",
                                "Filter the registry by name, address or blood group as you type."
                            }
                        }
                    }
                }
            }
        }
    }
}
