use crate::content::marquee_sequence;
use leptos::prelude::*;

/// Scrolling strip between the hero and the trust section. The item list is
/// rendered twice so the animation can wrap at the halfway point.
#[component]
pub fn DividerMarquee() -> impl IntoView {
    view! {
        <div class="divider" aria-hidden="true">
            <div class="divider-track">
                {marquee_sequence().into_iter().map(|item| view! {
                    <span class="divider-item">
                        <span class="divider-item__icon">
                            <img src=item.icon alt="" />
                        </span>
                        {item.label}
                    </span>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DIVIDER_ITEMS;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_the_strip_twice_for_the_loop() {
        let html = view! { <DividerMarquee /> }.to_html();

        assert_eq!(
            html.matches("divider-item\"").count(),
            DIVIDER_ITEMS.len() * 2
        );
        for item in DIVIDER_ITEMS {
            assert_eq!(html.matches(item.label).count(), 2);
        }
    }

    #[test]
    fn render_is_deterministic() {
        let first = view! { <DividerMarquee /> }.to_html();
        let second = view! { <DividerMarquee /> }.to_html();
        assert_eq!(first, second);
    }
}
