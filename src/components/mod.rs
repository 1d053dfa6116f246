//! UI Components
//!
//! One file per page section, plus shared bits.

pub mod icons;
mod section_title;
mod site_header;
mod hero;
mod skills;
mod proficiency_chart;
mod experience;
mod projects;
mod contact;
mod scroll_top_button;

pub use section_title::SectionTitle;
pub use site_header::SiteHeader;
pub use hero::{Hero, Summary};
pub use skills::SkillsSection;
pub use proficiency_chart::ProficiencyChart;
pub use experience::ExperienceSection;
pub use projects::{ProjectCard, ProjectGallery};
pub use contact::{ContactSection, Footer};
pub use scroll_top_button::ScrollToTopButton;
