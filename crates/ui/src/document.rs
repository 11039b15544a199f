//! Full HTML documents.
//!
//! Each render builds a fresh `VirtualDom`, renders it in place and drops it before
//! returning, so nothing here is held across an `.await`.

use crate::components::Layout;
use crate::pages::{
    AboutPage, ContactPage, ExperiencePage, HomePage, NotFoundPage, ProjectsPage, SkillsPage,
};
use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use folio_catalog::ProjectSelection;
use folio_domain::config::SiteSettings;
use folio_domain::constants::{SCRIPT_PATH, STYLESHEET_PATH};
use folio_domain::contact::ContactView;
use folio_domain::content::SiteContent;
use folio_domain::route::Route;

/// Footer blurb and meta description.
pub const TAGLINE: &str =
    "Senior Software Engineer specializing in backend systems, APIs, and scalable architectures.";

/// What to render, with the per-request state each page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Experience,
    Projects(ProjectSelection<'static>),
    Skills,
    Contact(ContactView),
    NotFound { path: String },
}

impl Page {
    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::About => Route::About,
            Self::Experience => Route::Experience,
            Self::Projects(_) => Route::Projects,
            Self::Skills => Route::Skills,
            Self::Contact(_) => Route::Contact,
            Self::NotFound { .. } => Route::NotFound,
        }
    }

    /// First part of `<title>`.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Page Not Found",
            other => other.route().label(),
        }
    }
}

/// Site-wide bits around every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub owner: String,
    pub site_title: String,
    /// Copyright year in the footer.
    pub year: i32,
}

impl Chrome {
    #[must_use]
    pub fn new(site: &SiteSettings, year: i32) -> Self {
        Self { owner: site.owner.clone(), site_title: site.title.clone(), year }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BodyProps {
    content: &'static SiteContent,
    page: Page,
    chrome: Chrome,
}

/// Everything inside `<body>`: the layout around the selected page.
#[allow(non_snake_case)]
fn Body(props: BodyProps) -> Element {
    let BodyProps { content, page, chrome } = props;
    let active = page.route();

    let body = match page {
        Page::Home => rsx! { HomePage { content } },
        Page::About => rsx! { AboutPage { content } },
        Page::Experience => rsx! { ExperiencePage { content } },
        Page::Projects(selection) => rsx! { ProjectsPage { selection } },
        Page::Skills => rsx! { SkillsPage { content } },
        Page::Contact(view) => rsx! { ContactPage { content, view } },
        Page::NotFound { path } => rsx! { NotFoundPage { path } },
    };

    rsx! {
        Layout {
            active,
            owner: chrome.owner,
            tagline: TAGLINE.to_owned(),
            social: content.social_links,
            year: chrome.year,
            {body}
        }
    }
}

/// Escapes text for an HTML text node or a quoted attribute value.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders `page` into a complete HTML document.
///
/// Pure: the same inputs always produce the same bytes. Only the body is a Dioxus tree;
/// the document shell around it is fixed markup.
#[must_use]
pub fn render_page(content: &'static SiteContent, page: Page, chrome: Chrome) -> String {
    let title = escape_html(&format!("{} | {}", page.title(), chrome.site_title));

    let mut dom = VirtualDom::new_with_props(Body, BodyProps { content, page, chrome });
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <meta name=\"description\" content=\"{description}\">\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">\
         </head><body>{body}<script src=\"{SCRIPT_PATH}\" defer></script></body></html>",
        description = escape_html(TAGLINE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
