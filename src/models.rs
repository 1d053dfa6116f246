//! Page Models
//!
//! Static records rendered by the page.

/// A portfolio project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub techs: &'static [&'static str],
    pub achievement: Option<&'static str>,
    pub link: Option<&'static str>,
}

/// Outbound link rendered under a project card
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAffordance {
    pub href: &'static str,
    pub label: &'static str,
}

impl ProjectRecord {
    /// Link to render, if any. Blank links count as missing.
    pub fn link_affordance(&self) -> Option<LinkAffordance> {
        self.link
            .filter(|href| !href.trim().is_empty())
            .map(|href| LinkAffordance { href, label: "View project →" })
    }
}

/// Self-rated proficiency for one category, 0..=100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProficiencyEntry {
    pub category: &'static str,
    pub score: u8,
}

/// A labelled row of skill chips
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// One entry in the experience timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub org: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    GitHub,
    Instagram,
    Notion,
    Email,
}

/// Footer link
#[derive(Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
    pub label: &'static str,
}

impl ContactLink {
    /// Everything but mail opens in a new tab
    pub fn opens_new_context(&self) -> bool {
        self.kind != ContactKind::Email
    }
}
