use super::BlurbCopy;
use crate::content::BENEFIT_HIGHLIGHTS;
use leptos::prelude::*;

#[component]
pub fn BenefitGrid() -> impl IntoView {
    view! {
        <section class="benefits">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Benefits"</p>
                    <h2 class="section-title">
                        "Designed to keep projects and ecosystems aligned"
                    </h2>
                    <p class="section-description">
                        "From real-yield generation to rollout-ready integrations, GUSD prioritizes "
                        "clarity and differentiated controls so partners can activate capital with "
                        "confidence."
                    </p>
                </div>
                <div class="benefits-grid">
                    {BENEFIT_HIGHLIGHTS.iter().map(|benefit| view! {
                        <article class="benefit-card">
                            <span class="benefit-card__icon">
                                <img src=benefit.icon alt="" />
                            </span>
                            <h3 class="benefit-card__title">{benefit.title}</h3>
                            <BlurbCopy body=benefit.body />
                        </article>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
