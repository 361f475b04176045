use crate::content::{Faq, FAQS};
use leptos::prelude::*;

#[component]
pub fn FaqList(#[prop(default = FAQS)] faqs: &'static [Faq]) -> impl IntoView {
    view! {
        <section class="faq">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"FAQs"</p>
                    <h2 class="section-title">"It's yours, but we have some answers"</h2>
                </div>
                <div class="faq-list">
                    {faqs.iter().map(|faq| view! {
                        <div class="faq-item">
                            <h3 class="faq-item__question">{faq.question}</h3>
                            <p class="faq-item__answer">{faq.answer}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
