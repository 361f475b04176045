//! Static content registry for the GUSD landing page.
//!
//! Everything the page shows lives here as `'static` const data; sections
//! render by mapping over these arrays in declaration order.

/// (path, alt) pair for a partner or brand image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Art shown for one trust signal. Exactly one shape per signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoMark {
    /// Several partner marks stacked into one cluster.
    Stack(&'static [Logo]),
    /// A single partner mark.
    Single(Logo),
    /// No art available; the value renders as plain text.
    Text(&'static str),
}

impl LogoMark {
    /// Classifies loosely-shaped partner art into exactly one mark.
    /// A stacked set wins over a single logo, which wins over text.
    pub const fn resolve(
        stack: &'static [Logo],
        single: Option<Logo>,
        text: Option<&'static str>,
    ) -> Option<Self> {
        if !stack.is_empty() {
            return Some(LogoMark::Stack(stack));
        }
        match single {
            Some(logo) => Some(LogoMark::Single(logo)),
            None => match text {
                Some(fallback) => Some(LogoMark::Text(fallback)),
                None => None,
            },
        }
    }
}

/// One entry in the partner/auditor strip.
#[derive(Debug, PartialEq, Eq)]
pub struct TrustSignal {
    pub label: &'static str,
    pub value: &'static str,
    /// `None` means the entry was authored without any art; the slot
    /// renders empty rather than failing.
    pub mark: Option<LogoMark>,
}

/// Headline stat under the hero copy.
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

/// Row inside the hero stage card.
pub struct SettlementHighlight {
    pub primary: &'static str,
    pub secondary: Option<&'static str>,
    pub tone_class: &'static str,
}

/// Short label in the scrolling strip between sections.
#[derive(Debug, PartialEq, Eq)]
pub struct DividerItem {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Supporting copy for a card or timeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blurb {
    Text(&'static str),
    Bullets(&'static [&'static str]),
}

/// One step in the explanatory lifecycle timeline.
pub struct NarrativeMilestone {
    pub title: &'static str,
    pub body: Blurb,
}

/// One value-proposition card.
pub struct BenefitHighlight {
    pub title: &'static str,
    pub body: Blurb,
    pub icon: &'static str,
}

/// A column of verifiable controls in the proof section.
pub struct ProofColumn {
    pub title: &'static str,
    pub body: Blurb,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "Fully onchain",
        label: "Generic only uses onchain strategies, all our backings are transparent to users and clients",
        icon: None,
    },
    HeroStat {
        value: "1:1",
        label: "Fully collateralized ERC-4626 vaults with exposure limits",
        icon: None,
    },
    HeroStat {
        value: "Security first",
        label: "We only work with the best in the industry. Steakhouse is our curator and risk manager, audited by Spearbit.",
        icon: None,
    },
];

pub const SETTLEMENT_HIGHLIGHTS: &[SettlementHighlight] = &[
    SettlementHighlight {
        primary: "LayerZero and native settlement",
        secondary: Some("↺ Synced supply"),
        tone_class: "light",
    },
    SettlementHighlight {
        primary: "Real yield prime vaults",
        secondary: None,
        tone_class: "accent",
    },
];

pub const DIVIDER_ITEMS: &[DividerItem] = &[
    DividerItem {
        label: "Transparency report",
        icon: "assets/icons/file-text.svg",
    },
    DividerItem {
        label: "Policy-aligned liquidity",
        icon: "assets/icons/scale.svg",
    },
    DividerItem {
        label: "Transparent and independent attestations",
        icon: "assets/icons/badge-check.svg",
    },
    DividerItem {
        label: "LayerZero fast settlement",
        icon: "assets/icons/zap.svg",
    },
    DividerItem {
        label: "Native trustless settlement",
        icon: "assets/icons/lock.svg",
    },
    DividerItem {
        label: "Documented and open operations",
        icon: "assets/icons/notebook.svg",
    },
];

pub const TRUST_SIGNALS: &[TrustSignal] = &[
    TrustSignal {
        label: "Security Audit",
        value: "Spearbit",
        mark: LogoMark::resolve(
            &[],
            Some(Logo {
                src: "assets/spearbit-icon.svg",
                alt: "Spearbit audit badge",
            }),
            None,
        ),
    },
    TrustSignal {
        label: "Vault Manager",
        value: "Steakhouse Financial",
        mark: LogoMark::resolve(
            &[],
            Some(Logo {
                src: "assets/steakhouse-icon.svg",
                alt: "Steakhouse Financial icon",
            }),
            None,
        ),
    },
    TrustSignal {
        label: "Messaging Layer",
        value: "LayerZero",
        mark: LogoMark::resolve(
            &[],
            Some(Logo {
                src: "assets/layerzero-icon.svg",
                alt: "LayerZero icon",
            }),
            None,
        ),
    },
];

pub const NARRATIVE_MILESTONES: &[NarrativeMilestone] = &[
    NarrativeMilestone {
        title: "Review & customize",
        body: Blurb::Text(
            "Check the contracts and the docs, review our transparency reports and contact us to get to know how to make GUSD yours.",
        ),
    },
    NarrativeMilestone {
        title: "Mint with controls",
        body: Blurb::Text(
            "We'll deploy the whitelabel for you and we'll send the yield right where you tell us so it can be used to benefit your network.",
        ),
    },
    NarrativeMilestone {
        title: "Monitor & report",
        body: Blurb::Text(
            "Work with our team to define reporting cadences, escalation paths, and dashboards so your stakeholders stay informed at every step.",
        ),
    },
];

pub const BENEFIT_HIGHLIGHTS: &[BenefitHighlight] = &[
    BenefitHighlight {
        title: "Canonical across rollups",
        body: Blurb::Text(
            "Choose your preferred messaging channel to move balances across chains securely and fast.",
        ),
        icon: "assets/icons/layers.svg",
    },
    BenefitHighlight {
        title: "Native yield",
        body: Blurb::Text(
            "Onchain yields in prime vaults have consistently beaten offchain T-bills, while keeping funds backed by safe collaterals.",
        ),
        icon: "assets/icons/coin.svg",
    },
    BenefitHighlight {
        title: "Operational assurance",
        body: Blurb::Text(
            "Programmatic limits, change windows, and human sign-off protect every contract or policy update. From the team at Aragon that manages some of the most critical security councils in the industry.",
        ),
        icon: "assets/icons/shield.svg",
    },
    BenefitHighlight {
        title: "Integration ready",
        body: Blurb::Text(
            "Attestations and standardized APIs make it simple for exchanges and protocols to integrate.",
        ),
        icon: "assets/icons/plug.svg",
    },
];

pub const PROOF_COLUMNS: &[ProofColumn] = &[
    ProofColumn {
        title: "Controls you can verify",
        body: Blurb::Bullets(&[
            "Segregated collateral wallets with automated exposure thresholds.",
            "Real-time attestation feed comparing canonical and rollup balances.",
            "First-loss reserve absorbs volatility before user balances move.",
        ]),
    },
    ProofColumn {
        title: "Reporting that travels with you",
        body: Blurb::Bullets(&[
            "Real-time dashboards for supply, buffer health, and oracle status.",
            "Audit trail with change control diffs and incident communications.",
            "10% protocol fee disclosed with treasury distribution reporting.",
        ]),
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What makes GUSD different from bridged stablecoins?",
        answer: "While other stablecoins stay idle in your product not being capital efficient, GUSD will generate yield that will directly go to your network address.",
    },
    Faq {
        question: "How is collateral managed and audited?",
        answer: "Collateral lives in segregated ERC-4626 vaults managed by Steakhouse Financial. Spearbit and other reviewers assess contracts, and daily attestations confirm vault balances against circulating supply.",
    },
    Faq {
        question: "Where can I review the yield distribution policy?",
        answer: "All the generated yield is transferred to your designated address on a weekly period, while Generic keeps a fee of it to sustain the protocol.",
    },
];

/// Divider items doubled back-to-back so the marquee animation can wrap at
/// the halfway point without a visible seam.
pub fn marquee_sequence() -> Vec<&'static DividerItem> {
    DIVIDER_ITEMS.iter().chain(DIVIDER_ITEMS.iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ART: &[Logo] = &[
        Logo {
            src: "assets/a.svg",
            alt: "a",
        },
        Logo {
            src: "assets/b.svg",
            alt: "b",
        },
    ];

    const ONE: Logo = Logo {
        src: "assets/one.svg",
        alt: "one",
    };

    #[test]
    fn test_stack_wins_over_single_and_text() {
        let mark = LogoMark::resolve(ART, Some(ONE), Some("fallback"));
        assert_eq!(mark, Some(LogoMark::Stack(ART)));
    }

    #[test]
    fn test_single_wins_over_text() {
        let mark = LogoMark::resolve(&[], Some(ONE), Some("fallback"));
        assert_eq!(mark, Some(LogoMark::Single(ONE)));
    }

    #[test]
    fn test_text_is_last_resort() {
        let mark = LogoMark::resolve(&[], None, Some("N/A"));
        assert_eq!(mark, Some(LogoMark::Text("N/A")));
    }

    #[test]
    fn test_no_art_resolves_to_empty_slot() {
        assert_eq!(LogoMark::resolve(&[], None, None), None);
    }

    #[test]
    fn test_mixed_strip_resolves_one_shape_per_signal() {
        let strip = [
            TrustSignal {
                label: "Audits",
                value: "Two firms",
                mark: LogoMark::resolve(ART, None, None),
            },
            TrustSignal {
                label: "Vault Manager",
                value: "Steakhouse",
                mark: LogoMark::resolve(&[], Some(ONE), None),
            },
            TrustSignal {
                label: "Attestations",
                value: "N/A",
                mark: LogoMark::resolve(&[], None, Some("N/A")),
            },
        ];
        assert_eq!(strip.len(), 3);
        assert!(matches!(strip[0].mark, Some(LogoMark::Stack(set)) if set.len() == 2));
        assert!(matches!(strip[1].mark, Some(LogoMark::Single(logo)) if logo == ONE));
        assert_eq!(strip[2].mark, Some(LogoMark::Text("N/A")));
    }

    #[test]
    fn test_registry_signals_all_carry_art() {
        for signal in TRUST_SIGNALS {
            assert!(signal.mark.is_some(), "{} lost its mark", signal.value);
        }
    }

    #[test]
    fn test_marquee_doubles_the_divider_strip() {
        let seq = marquee_sequence();
        let count = DIVIDER_ITEMS.len();
        assert_eq!(seq.len(), count * 2);
        for i in 0..count {
            assert_eq!(seq[i], seq[i + count]);
        }
    }

    #[test]
    fn test_marquee_preserves_declaration_order() {
        let seq = marquee_sequence();
        for (item, declared) in seq.iter().zip(DIVIDER_ITEMS.iter()) {
            assert_eq!(*item, declared);
        }
    }

    #[test]
    fn test_marquee_is_deterministic() {
        assert_eq!(marquee_sequence(), marquee_sequence());
    }

    #[test]
    fn test_proof_columns_keep_bullets_in_declared_order() {
        for column in PROOF_COLUMNS {
            let Blurb::Bullets(bullets) = column.body else {
                panic!("{} should use the bulleted form", column.title);
            };
            assert_eq!(bullets.len(), 3);
        }
        let Blurb::Bullets(first) = PROOF_COLUMNS[0].body else {
            unreachable!();
        };
        assert!(first[0].starts_with("Segregated collateral"));
        assert!(first[2].starts_with("First-loss reserve"));
    }

    #[test]
    fn test_milestones_use_plain_copy() {
        assert_eq!(NARRATIVE_MILESTONES.len(), 3);
        for milestone in NARRATIVE_MILESTONES {
            assert!(matches!(milestone.body, Blurb::Text(_)));
        }
    }

    #[test]
    fn test_faqs_are_complete_pairs() {
        for faq in FAQS {
            assert!(!faq.question.is_empty());
            assert!(!faq.answer.is_empty());
        }
    }
}
