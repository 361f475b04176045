use crate::content::{LogoMark, TrustSignal, TRUST_SIGNALS};
use leptos::prelude::*;

#[component]
pub fn TrustStrip(#[prop(default = TRUST_SIGNALS)] signals: &'static [TrustSignal]) -> impl IntoView {
    view! {
        <section id="partners" class="trust">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Transparent Security"</p>
                    <h2 class="section-title">"Independent partners validate the programme"</h2>
                    <p class="section-description">
                        "Oversight partners are disclosed up front so risk, legal, and engineering "
                        "teams understand who operates each layer and how reviews are progressing."
                    </p>
                </div>
                <div class="trust-strip" aria-label="Oversight and infrastructure partners">
                    <div class="trust-strip__summary">
                        <span class="trust-strip__label">"Security by top players"</span>
                        <p class="trust-strip__quote">
                            "Controls-first architecture for cross-chain USD."
                        </p>
                    </div>
                    <div class="trust-strip__items">
                        {signals.iter().map(|signal| view! {
                            <div class="trust-strip__item">
                                <div class="trust-strip__logo">{mark_view(signal.mark)}</div>
                                <div class="trust-strip__meta">
                                    <span class="trust-strip__meta-label">{signal.label}</span>
                                    <span class="trust-strip__meta-value">{signal.value}</span>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Exactly one representation per signal; a signal authored without any art
/// leaves its slot empty.
fn mark_view(mark: Option<LogoMark>) -> impl IntoView {
    match mark {
        Some(LogoMark::Stack(logos)) => view! {
            <span class="trust-strip__logo-stack">
                {logos.iter().map(|logo| view! {
                    <img src=logo.src alt=logo.alt />
                }).collect::<Vec<_>>()}
            </span>
        }
        .into_any(),
        Some(LogoMark::Single(logo)) => view! { <img src=logo.src alt=logo.alt /> }.into_any(),
        Some(LogoMark::Text(text)) => {
            view! { <span class="trust-strip__logo-text">{text}</span> }.into_any()
        }
        None => view! { <span class="trust-strip__logo-empty"></span> }.into_any(),
    }
}
