mod about;
mod achievements;
mod certifications;
mod contact;
mod filter_bar;
mod footer;
mod hero;
mod icon;
mod navigation;
mod project_card;
mod project_grid;
mod project_modal;
mod projects;
mod reveal;
mod section_header;
mod skills;
mod theme_toggle;
mod toast;

pub use about::AboutSection;
pub use achievements::AchievementsSection;
pub use certifications::CertificationsSection;
pub use contact::ContactSection;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use hero::HeroSection;
pub use icon::{Icon, IconKind};
pub use navigation::Navigation;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use project_modal::ProjectModal;
pub use projects::ProjectsSection;
pub use reveal::{use_reveal, Reveal, RevealFrom};
pub use section_header::SectionHeader;
pub use skills::SkillsSection;
pub use theme_toggle::{stored_mode, ThemeToggle};
pub use toast::{provide_toasts, use_toasts, Toaster};
