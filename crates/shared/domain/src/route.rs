//! Route table of the site.

use serde::Serialize;

/// A page of the site. Every path outside the table resolves to [`Route::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
    NotFound,
}

impl Route {
    /// Routes in navigation order (header and footer).
    pub const NAVIGATION: [Self; 6] =
        [Self::Home, Self::About, Self::Experience, Self::Projects, Self::Skills, Self::Contact];

    /// Canonical path. `NotFound` has no entry in the table; `/404` is only a label for it.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Experience => "/experience",
            Self::Projects => "/projects",
            Self::Skills => "/skills",
            Self::Contact => "/contact",
            Self::NotFound => "/404",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
            Self::NotFound => "Not Found",
        }
    }

    #[must_use]
    pub const fn is_found(self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Maps a request path onto the table.
    ///
    /// Query strings and fragments are ignored, a single trailing slash is tolerated and
    /// matching is ASCII case-insensitive. Anything else is `NotFound`.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed,
            _ => path,
        };
        let path = if path.is_empty() { "/" } else { path };

        Self::NAVIGATION
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(path))
            .unwrap_or(Self::NotFound)
    }
}
