//! Static copy for every section, in render order.

use chrono::Datelike;

/// In-page scroll targets referenced by links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Product,
    Solutions,
    Pricing,
    Docs,
    GetStarted,
    Signup,
    Demo,
    Login,
}

impl Anchor {
    pub const ALL: [Anchor; 8] = [
        Anchor::Product,
        Anchor::Solutions,
        Anchor::Pricing,
        Anchor::Docs,
        Anchor::GetStarted,
        Anchor::Signup,
        Anchor::Demo,
        Anchor::Login,
    ];

    /// Element id, without `#`.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Product => "product",
            Anchor::Solutions => "solutions",
            Anchor::Pricing => "pricing",
            Anchor::Docs => "docs",
            Anchor::GetStarted => "get-started",
            Anchor::Signup => "signup",
            Anchor::Demo => "demo",
            Anchor::Login => "login",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Anchor::Product => "#product",
            Anchor::Solutions => "#solutions",
            Anchor::Pricing => "#pricing",
            Anchor::Docs => "#docs",
            Anchor::GetStarted => "#get-started",
            Anchor::Signup => "#signup",
            Anchor::Demo => "#demo",
            Anchor::Login => "#login",
        }
    }

    /// Whether a section on this page carries the id. The others are
    /// linked but not built yet; the browser ignores them.
    pub fn has_target(self) -> bool {
        matches!(self, Anchor::Product | Anchor::GetStarted)
    }
}

/// Color gradients used by badges and cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gradient {
    Indigo,
    Emerald,
    Amber,
    IndigoSoft,
    EmeraldSoft,
    AmberSoft,
}

impl Gradient {
    /// Tailwind `from-*/to-*` classes.
    pub fn classes(self) -> &'static str {
        match self {
            Gradient::Indigo => "from-indigo-500 to-purple-500",
            Gradient::Emerald => "from-emerald-500 to-teal-500",
            Gradient::Amber => "from-amber-500 to-orange-500",
            Gradient::IndigoSoft => "from-indigo-500/20 to-fuchsia-500/10",
            Gradient::EmeraldSoft => "from-emerald-500/20 to-teal-500/10",
            Gradient::AmberSoft => "from-amber-500/20 to-orange-500/10",
        }
    }
}

/// Agent card glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentIcon {
    Shield,
    Grid,
    Spark,
}

impl AgentIcon {
    pub fn path(self) -> &'static str {
        match self {
            AgentIcon::Shield => "M12 22s8-4 8-10V7l-8-5-8 5v5c0 6 8 10 8 10z",
            AgentIcon::Grid => "M3 12h7V3H3v9zm0 9h7v-7H3v7zm11 0h7v-9h-7v9zm0-18v7h7V3h-7z",
            AgentIcon::Spark => {
                "M12 8V4M12 20v-4M8 12H4m16 0h-4M6.3 6.3l2.8 2.8M14.9 14.9l2.8 2.8M6.3 17.7l2.8-2.8M14.9 9.1l2.8-2.8"
            }
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            AgentIcon::Shield => "text-indigo-400",
            AgentIcon::Grid => "text-emerald-400",
            AgentIcon::Spark => "text-amber-400",
        }
    }

    /// Spark is drawn with strokes, the others are filled shapes.
    pub fn is_stroked(self) -> bool {
        self == AgentIcon::Spark
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub anchor: Anchor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeEntry {
    pub text: &'static str,
    pub gradient: Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gradient: Gradient,
    pub icon: AgentIcon,
    pub stat: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiniStatEntry {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_LINKS: &[NavEntry] = &[
    NavEntry { label: "Product", anchor: Anchor::Product },
    NavEntry { label: "Solutions", anchor: Anchor::Solutions },
    NavEntry { label: "Pricing", anchor: Anchor::Pricing },
    NavEntry { label: "Docs", anchor: Anchor::Docs },
];

pub const HERO_BADGES: &[BadgeEntry] = &[
    BadgeEntry { text: "24/7 Automation", gradient: Gradient::Indigo },
    BadgeEntry { text: "Trained on Your Data", gradient: Gradient::Emerald },
    BadgeEntry { text: "Secure & Compliant", gradient: Gradient::Amber },
];

pub const HERO_CHECKLIST: &[&str] = &[
    "Onboard in minutes. ROI in days.",
    "No-code workflows or full API control.",
    "Reliable, explainable, and safe by design.",
];

pub const AGENT_CARDS: &[AgentCard] = &[
    AgentCard {
        title: "Support Agent",
        subtitle: "Resolves tickets in Zendesk",
        gradient: Gradient::IndigoSoft,
        icon: AgentIcon::Shield,
        stat: "92% deflection",
    },
    AgentCard {
        title: "Sales Agent",
        subtitle: "Books meetings in HubSpot",
        gradient: Gradient::EmeraldSoft,
        icon: AgentIcon::Grid,
        stat: "3.7x pipeline",
    },
    AgentCard {
        title: "Ops Agent",
        subtitle: "Syncs data across tools",
        gradient: Gradient::AmberSoft,
        icon: AgentIcon::Spark,
        stat: "99.9% accuracy",
    },
];

pub const MINI_STATS: &[MiniStatEntry] = &[
    MiniStatEntry { label: "Avg. handle time", value: "1m 12s" },
    MiniStatEntry { label: "Tasks/day", value: "12,400" },
    MiniStatEntry { label: "SLA met", value: "99.4%" },
];

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "Multi\u{2011}tool Actions",
        description: "Native integrations and APIs let agents operate across your stack.",
    },
    FeatureCard {
        title: "Guardrails",
        description: "Role, scope, and policy constraints keep outputs safe and on\u{2011}brand.",
    },
    FeatureCard {
        title: "Observability",
        description: "Full traces, metrics, and replays for every decision an agent makes.",
    },
];

pub const CTA_CHECKLIST: &[&str] = &[
    "No credit card required",
    "SOC 2 ready",
    "API & no\u{2011}code",
    "24/7 support",
];

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Product",
        items: &["Overview", "Agents", "Automation", "Security"],
    },
    LinkGroup {
        title: "Company",
        items: &["About", "Careers", "Contact"],
    },
    LinkGroup {
        title: "Resources",
        items: &["Docs", "Blog", "Status"],
    },
];

pub const COMPLIANCE_BADGES: &[&str] = &["GDPR", "SOC 2", "ISO 27001"];

pub const LEGAL_LINKS: &[&str] = &["Terms", "Privacy", "Security"];

/// Number of decorative dots around the agent stack.
pub const ORBIT_NODE_COUNT: usize = 8;

/// Calendar year from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(brand: &str, year: i32) -> String {
    format!("\u{a9} {} {}, Inc. All rights reserved.", year, brand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_in_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Product", "Solutions", "Pricing", "Docs"]);
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor.href()).collect();
        assert_eq!(hrefs, ["#product", "#solutions", "#pricing", "#docs"]);
    }

    #[test]
    fn hero_tables_have_three_entries() {
        assert_eq!(HERO_BADGES.len(), 3);
        assert_eq!(HERO_CHECKLIST.len(), 3);
        let titles: Vec<_> = AGENT_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Support Agent", "Sales Agent", "Ops Agent"]);
        assert_eq!(MINI_STATS.len(), 3);
    }

    #[test]
    fn feature_cards_in_order() {
        let titles: Vec<_> = FEATURE_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Multi\u{2011}tool Actions", "Guardrails", "Observability"]);
    }

    #[test]
    fn footer_groups_shape() {
        let shape: Vec<_> = FOOTER_GROUPS.iter().map(|g| (g.title, g.items.len())).collect();
        assert_eq!(shape, [("Product", 4), ("Company", 3), ("Resources", 3)]);
    }

    #[test]
    fn hrefs_match_ids() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }

    #[test]
    fn only_built_sections_are_targets() {
        let targets: Vec<_> = Anchor::ALL
            .into_iter()
            .filter(|a| a.has_target())
            .map(Anchor::id)
            .collect();
        assert_eq!(targets, ["product", "get-started"]);
    }

    #[test]
    fn copyright_carries_year() {
        assert_eq!(
            copyright_line("Agentic", 2025),
            "\u{a9} 2025 Agentic, Inc. All rights reserved."
        );
    }

    #[test]
    fn copyright_uses_clock_year() {
        let year = current_year();
        assert!(year >= 2025);
        assert!(copyright_line("Agentic", year).contains(&year.to_string()));
    }

    #[test]
    fn only_spark_is_stroked() {
        let stroked: Vec<_> = AGENT_CARDS.iter().map(|c| c.icon.is_stroked()).collect();
        assert_eq!(stroked, [false, false, true]);
    }
}
