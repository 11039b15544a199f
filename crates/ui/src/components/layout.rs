use crate::components::icon::Glyph;
use dioxus::prelude::*;
use folio_domain::content::SocialLink;
use folio_domain::route::Route;

/// Brand mark: `<owner/>`.
#[component]
fn Brand(owner: String) -> Element {
    rsx! {
        a { class: "brand", href: "/",
            span { class: "accent", "<" }
            "{owner}"
            span { class: "accent", "/>" }
        }
    }
}

#[component]
pub fn Header(active: Route, owner: String) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-row",
                Brand { owner }
                nav { class: "site-nav", "aria-label": "Main",
                    for route in Route::NAVIGATION {
                        NavLink { route, active }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(route: Route, active: Route) -> Element {
    let current = route == active;
    let class = if current { "nav-link active" } else { "nav-link" };
    let aria_current = if current { "page" } else { "false" };

    rsx! {
        a {
            class,
            href: route.path(),
            "aria-current": aria_current,
            {route.label()}
        }
    }
}

#[component]
pub fn Footer(owner: String, tagline: String, social: &'static [SocialLink], year: i32) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    Brand { owner }
                    p { class: "muted small", "{tagline}" }
                }
                div {
                    h4 { "Navigation" }
                    nav { class: "footer-nav",
                        for route in Route::NAVIGATION {
                            a { class: "muted small", href: route.path(), {route.label()} }
                        }
                    }
                }
                div {
                    h4 { "Connect" }
                    div { class: "social-links",
                        for link in social.iter() {
                            a {
                                class: "social-link",
                                href: link.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": link.label,
                                Glyph { icon: link.icon }
                            }
                        }
                    }
                }
            }
            div { class: "container copyright",
                p { class: "muted small", "© {year} All rights reserved. Built with passion and clean code." }
            }
        }
    }
}

/// Header, page body and footer.
#[component]
pub fn Layout(
    active: Route,
    owner: String,
    tagline: String,
    social: &'static [SocialLink],
    year: i32,
    children: Element,
) -> Element {
    rsx! {
        div { class: "page",
            Header { active, owner: owner.clone() }
            main { class: "page-main", {children} }
            Footer { owner, tagline, social, year }
        }
    }
}
