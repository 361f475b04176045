use super::PARTNERS_EMAIL;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let partners_href = format!("mailto:{PARTNERS_EMAIL}");
    view! {
        <footer class="footer">
            <div class="container footer-row">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <img src="assets/brand-mark.svg" alt="Generic mark" />
                    </span>
                    <div>
                        <p class="footer-title">"Generic"</p>
                        <p class="footer-tagline">"Unified liquidity for Ethereum."</p>
                    </div>
                </div>
                <div class="footer-links">
                    <a href=partners_href class="footer-link">{PARTNERS_EMAIL}</a>
                </div>
            </div>
        </footer>
    }
}
