//! Console card for anyone who opens devtools on the page.

use super::CONTACT_EMAIL;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// ASCII brand mark for the browser console.
fn ascii_mark() -> String {
    format!(
        r#"
   ____                      _
  / ___| ___ _ __   ___ _ __(_) ___
 | |  _ / _ \ '_ \ / _ \ '__| |/ __|
 | |_| |  __/ | | |  __/ |  | | (__
  \____|\___|_| |_|\___|_|  |_|\___|

  Generic USD — one balance, all networks.
  generic.money | {CONTACT_EMAIL}
"#
    )
}

#[component]
pub fn ConsoleBrand() -> impl IntoView {
    // Print once on mount
    Effect::new(move || {
        print_console_card();
    });

    view! {}
}

fn print_console_card() {
    if let Some(_window) = web_sys::window() {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", ascii_mark())),
            &JsValue::from_str("color: #3f79ff; font-family: monospace; font-size: 11px;"),
        );

        web_sys::console::log_2(
            &JsValue::from_str("%cContracts, audits, and attestations are public by default."),
            &JsValue::from_str("color: #6d6f76;"),
        );

        web_sys::console::log_2(
            &JsValue::from_str(&format!("%cTalk to us: {CONTACT_EMAIL}")),
            &JsValue::from_str("color: #00b37e; font-weight: bold;"),
        );
    }
}
