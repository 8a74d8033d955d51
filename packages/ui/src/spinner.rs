use dioxus::prelude::*;

const SPINNER_CSS: Asset = asset!("/assets/styling/spinner.css");

/// Centered spinner shown while a section's data is in flight.
#[component]
pub fn LoadingSpinner(#[props(default = String::from("Loading..."))] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SPINNER_CSS }
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            span { class: "spinner-label", "{label}" }
        }
    }
}
