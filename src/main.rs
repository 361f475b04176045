// GUSD landing page — Leptos 0.8, client-side rendered.

mod content;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBrand />
        <main>
            <Hero />
            <DividerMarquee />
            <TrustStrip />
            <NarrativeTimeline />
            <BenefitGrid />
            <ProofSection />
            <FaqList />
        </main>
        <Footer />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    // The page body minus the console greeting, which only makes sense in a
    // browser.
    fn page_sections() -> String {
        view! {
            <Hero />
            <DividerMarquee />
            <TrustStrip />
            <NarrativeTimeline />
            <BenefitGrid />
            <ProofSection />
            <FaqList />
            <Footer />
        }
        .to_html()
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = page_sections();
        let order = [
            "class=\"hero\"",
            "class=\"divider\"",
            "class=\"trust\"",
            "class=\"narrative\"",
            "class=\"benefits\"",
            "class=\"proof\"",
            "class=\"faq\"",
            "class=\"footer\"",
        ];

        let mut cursor = 0;
        for marker in order {
            match html[cursor..].find(marker) {
                Some(at) => cursor += at + marker.len(),
                None => panic!("{marker} missing or out of order"),
            }
        }
    }

    #[test]
    fn page_render_is_deterministic() {
        assert_eq!(page_sections(), page_sections());
    }
}
