use super::BlurbCopy;
use crate::content::NARRATIVE_MILESTONES;
use leptos::prelude::*;

#[component]
pub fn NarrativeTimeline() -> impl IntoView {
    view! {
        <section class="narrative">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Yours"</p>
                    <h2 class="section-title">"Your whitelabel stablecoin made easy"</h2>
                    <p class="section-description">
                        "GUSD is structured so legal, risk, and product teams can agree on a single "
                        "lifecycle. Each step is auditable, codified, and synchronized across every "
                        "supported chain."
                    </p>
                </div>
                <div class="narrative-timeline">
                    {NARRATIVE_MILESTONES.iter().enumerate().map(|(index, milestone)| view! {
                        <div class="narrative-step">
                            <span class="narrative-step__index">{format!("{:02}", index + 1)}</span>
                            <div class="narrative-step__body">
                                <h3 class="narrative-step__title">{milestone.title}</h3>
                                <BlurbCopy body=milestone.body />
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
