mod about;
mod contact;
mod experience;
mod home;
mod not_found;
mod projects;
mod skills;

pub use about::AboutPage;
pub use contact::{BUSY_LABEL, ContactPage, SUBMIT_LABEL};
pub use experience::ExperiencePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
