// Landing page sections

/// Outbound link targets used across the page (single source of truth).
pub const WHITEPAPER_URL: &str = "/whitepaper.pdf";
pub const APP_URL: &str = "https://app.generic.money";
pub const CONTACT_EMAIL: &str = "hello@generic.money";
pub const PARTNERS_EMAIL: &str = "partners@generic.money";

mod benefits;
mod console_brand;
mod divider;
mod faq;
mod footer;
mod hero;
mod narrative;
mod proof;
mod trust;

pub use benefits::BenefitGrid;
pub use console_brand::ConsoleBrand;
pub use divider::DividerMarquee;
pub use faq::FaqList;
pub use footer::Footer;
pub use hero::Hero;
pub use narrative::NarrativeTimeline;
pub use proof::ProofSection;
pub use trust::TrustStrip;

use crate::content::Blurb;
use leptos::prelude::*;

/// Card copy in either of its authored shapes: one paragraph, or an
/// ordered bullet list.
#[component]
pub(crate) fn BlurbCopy(body: Blurb) -> impl IntoView {
    match body {
        Blurb::Text(text) => view! { <p class="copy-text">{text}</p> }.into_any(),
        Blurb::Bullets(bullets) => view! {
            <ul class="copy-bullets">
                {bullets
                    .iter()
                    .copied()
                    .map(|bullet| view! {
                        <li>
                            <span class="copy-bullets__dot"></span>
                            <span>{bullet}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    }
}
