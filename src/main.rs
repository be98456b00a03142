#![recursion_limit = "256"]

use dioxus::prelude::*;

use common::ToastStack;
use components::{Navbar, ToastHost};
use views::{AddDonor, Dashboard, Donors, EditDonor, Home};

mod common;
mod components;
mod database;
mod server;
mod validation;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/donors")]
    Donors {},
    #[route("/donors/new")]
    AddDonor {},
    #[route("/donors/:id/edit")]
    EditDonor { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "server")]
use database::init_database;

fn main() {
    // Initialize database if server feature is enabled
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new().unwrap().block_on(async {
            if let Err(e) = init_database().await {
                eprintln!("Database initialization error: {}", e);
                println!("Will continue with in-memory database");
            }
        });
    }

    // Launch the app based on target platform
    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::desktop().launch(App);
    }

    #[cfg(feature = "web")]
    {
        LaunchBuilder::web().launch(App);
    }

    #[cfg(not(any(feature = "desktop", feature = "web")))]
    {
        LaunchBuilder::new().launch(App);
    }
}

#[component]
fn App() -> Element {
    // Toast stack lives at the root so every view can push notifications.
    let toasts = use_signal(ToastStack::default);
    use_context_provider(|| toasts);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Router::<Route> {}
        ToastHost {}
    }
}
