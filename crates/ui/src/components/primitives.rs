//! Small building blocks shared by the pages.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Tech,
    Secondary,
    Outline,
}

impl BadgeVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Tech => "badge badge-tech",
            Self::Secondary => "badge badge-secondary",
            Self::Outline => "badge badge-outline",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: variant.class(), {children} }
    }
}

/// Panel with a border. `class` is appended to `card`.
#[component]
pub fn Card(#[props(default)] class: &'static str, children: Element) -> Element {
    let class = if class.is_empty() { "card".to_owned() } else { format!("card {class}") };
    rsx! {
        div { class, {children} }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Accent,
    Outline,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Accent => "button button-accent",
            Self::Outline => "button button-outline",
        }
    }
}

/// A link styled as a button.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[props(default)] variant: ButtonVariant,
    children: Element,
) -> Element {
    rsx! {
        a { class: variant.class(), href, {children} }
    }
}

/// Page hero: eyebrow badge, heading and an optional lead paragraph.
#[component]
pub fn PageHero(badge: &'static str, title: &'static str, #[props(default)] lead: &'static str) -> Element {
    rsx! {
        section { class: "section hero",
            div { class: "container narrow",
                Badge { "{badge}" }
                h1 { class: "hero-title", "{title}" }
                if !lead.is_empty() {
                    p { class: "lead", "{lead}" }
                }
            }
        }
    }
}

/// Centered section heading with a muted subtitle.
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { "{title}" }
            p { class: "muted", "{subtitle}" }
        }
    }
}

/// Wrapping row of badges.
#[component]
pub fn BadgeList(items: &'static [&'static str], #[props(default)] variant: BadgeVariant) -> Element {
    rsx! {
        div { class: "badge-list",
            for item in items.iter() {
                Badge { variant, "{item}" }
            }
        }
    }
}
