//! qpcr-web - Primer design form in the browser
//!
//! Renders the design form and binds the selection controllers onto the
//! rendered markup. The form posts to the design server like the
//! server-rendered page does.

use dioxus::prelude::*;
use qpcr_ui::web_dom::{bind_page, page_selection, WebDom};
use qpcr_ui::{FormLayout, PrimerDesignForm};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
fn App() -> Element {
    // A host page may embed a layout override; otherwise the defaults apply.
    let layout = use_hook(|| {
        WebDom::current()
            .map(|dom| dom.layout())
            .unwrap_or_default()
    });

    // Bind after the form is in the document.
    let bind_layout = layout.clone();
    use_effect(move || {
        let Some(dom) = WebDom::current() else {
            tracing::warn!("No document, design form left unbound");
            return;
        };
        bind_page(&dom, &bind_layout);
        if let Some(selection) = page_selection() {
            tracing::debug!(?selection, "Initial form selection");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-950 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "qPCR Primer Design" }
            PrimerDesignForm { layout: layout.clone() }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
