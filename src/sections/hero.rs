use super::{APP_URL, WHITEPAPER_URL};
use crate::content::{HERO_STATS, SETTLEMENT_HIGHLIGHTS};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <span class="hero-kicker">"Generic USD (GUSD)"</span>
                        <div class="hero-brand">
                            <img src="assets/full-logo-black.svg" alt="Generic logo" />
                        </div>
                        <h1 class="hero-title">
                            "Launch your native stablecoin,"
                            <br />
                            "no issuer needed"
                        </h1>
                        <p class="hero-description">
                            "Generic connects Ethereum's collateral to rollup liquidity with documented "
                            "controls, live strategies and audited reporting."
                        </p>
                        <div class="hero-actions">
                            <a
                                href=WHITEPAPER_URL
                                target="_blank"
                                rel="noreferrer"
                                class="btn btn-primary"
                            >
                                "Read the white paper"
                                <span class="btn-arrow">"→"</span>
                            </a>
                            <a href=APP_URL class="btn btn-secondary btn-disabled" title="Coming soon">
                                "Open app"
                                <span class="btn-tag">"Coming soon"</span>
                            </a>
                        </div>
                    </div>
                    <StageCard />
                </div>
                <div class="hero-stats">
                    {HERO_STATS.iter().map(|stat| view! {
                        <div class="hero-stat">
                            {stat.icon.map(|icon| view! {
                                <span class="hero-stat__icon">
                                    <img src=icon alt="" />
                                </span>
                            })}
                            <p class="hero-stat__value">{stat.value}</p>
                            <p class="hero-stat__label">{stat.label}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                    <div class="floating-chip">
                        <span class="floating-chip__icon">
                            <img src="assets/icons/refresh.svg" alt="" />
                        </span>
                        "Real-time reserves"
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Right-hand stage: the audit card with its settlement highlight rows.
#[component]
fn StageCard() -> impl IntoView {
    view! {
        <div class="hero-stage">
            <div class="hero-stage__window">
                <img src="assets/window.svg" alt="Generic liquidity viewport" />
            </div>
            <div class="hero-stage__orbit">
                <img src="assets/globe.svg" alt="Rollup footprint" />
            </div>
            <div class="hero-stage__orbit hero-stage__orbit--alt">
                <img src="assets/file.svg" alt="Onchain audit file" />
            </div>
            <div class="stage-card">
                <div class="stage-card__header">
                    <span>"In Audits"</span>
                    <span class="stage-card__badge">"Spearbit"</span>
                </div>
                <div class="stage-card__brand">
                    <span class="stage-card__mark">
                        <img src="assets/brand-mark.svg" alt="Generic mark" />
                    </span>
                    <div>
                        <p class="stage-card__kicker">"Transparent Operation"</p>
                        <p class="stage-card__title">"One balance, all networks."</p>
                    </div>
                </div>
                <div class="stage-card__copy">
                    <p>
                        "Canonical supply lives on Ethereum while mirrored balances only get "
                        "minted against backed assets."
                    </p>
                    <p>
                        "Collateral yield refills program buffers before streaming to "
                        "ecosystems and treasury."
                    </p>
                </div>
                <div class="stage-card__rows">
                    {SETTLEMENT_HIGHLIGHTS.iter().map(|row| view! {
                        <div class=format!("stage-row stage-row--{}", row.tone_class)>
                            <span>{row.primary}</span>
                            {row.secondary.map(|secondary| view! { <span>{secondary}</span> })}
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
