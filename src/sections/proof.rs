use super::{BlurbCopy, CONTACT_EMAIL};
use crate::content::PROOF_COLUMNS;
use leptos::prelude::*;

#[component]
pub fn ProofSection() -> impl IntoView {
    let contact_href = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <section class="proof">
            <div class="container proof-grid">
                <div class="proof-main">
                    <div class="section-header">
                        <p class="section-eyebrow">"Proof"</p>
                        <h2 class="section-title">
                            "Transparency, controls, and separation of concerns by design"
                        </h2>
                        <p class="section-description">
                            "Each policy ships with verifiable artifacts, from contract audits and "
                            "buffer thresholds to real-time reporting feeds, so diligence teams can "
                            "confirm controls before launch."
                        </p>
                    </div>
                    <div class="proof-columns">
                        {PROOF_COLUMNS.iter().map(|column| view! {
                            <div class="proof-card">
                                <h3 class="proof-card__title">{column.title}</h3>
                                <BlurbCopy body=column.body />
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="proof-aside">
                    <div class="cta-panel">
                        <p class="cta-panel__title">"Need diligence materials?"</p>
                        <p class="cta-panel__description">
                            "Request the compliance pack for technical diagrams, monitoring hooks, "
                            "and documentation."
                        </p>
                        <a href=contact_href class="cta-panel__button">"Request the pack"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Blurb;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_declared_bullets_in_order() {
        let html = view! { <ProofSection /> }.to_html();

        let declared: usize = PROOF_COLUMNS
            .iter()
            .map(|column| match column.body {
                Blurb::Bullets(bullets) => bullets.len(),
                Blurb::Text(_) => 0,
            })
            .sum();
        assert_eq!(html.matches("<li>").count(), declared);

        let mut cursor = 0;
        for column in PROOF_COLUMNS {
            let Blurb::Bullets(bullets) = column.body else {
                continue;
            };
            for bullet in bullets {
                match html[cursor..].find(bullet) {
                    Some(at) => cursor += at + bullet.len(),
                    None => panic!("bullet {bullet:?} missing or out of order"),
                }
            }
        }
    }
}
