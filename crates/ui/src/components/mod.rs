pub mod icon;
pub mod layout;
pub mod primitives;

pub use icon::Glyph;
pub use layout::Layout;
pub use primitives::{Badge, BadgeList, BadgeVariant, ButtonLink, ButtonVariant, Card, PageHero, SectionHeading};
