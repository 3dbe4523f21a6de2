//! Compile-time site content.

pub mod achievements;
pub mod certifications;
pub mod profile;
pub mod projects;
pub mod skills;

use std::collections::HashSet;

use url::Url;

use crate::error::ContentError;

pub use achievements::{Achievement, AchievementIcon, ACHIEVEMENTS};
pub use certifications::{Certification, CERTIFICATIONS};
pub use projects::{Project, ProjectCategory, PROJECTS};
pub use skills::{Proficiency, Skill, SkillCategory, SKILLS};

/// Check the invariants the templates rely on: unique ids per list, levels
/// within 0-100 and absolute http(s) outbound links.
///
/// # Errors
///
/// Returns the first [`ContentError`] found.
pub fn validate() -> Result<(), ContentError> {
    unique_ids("project", PROJECTS.iter().map(|p| p.id))?;
    unique_ids("achievement", ACHIEVEMENTS.iter().map(|a| a.id))?;
    unique_ids("certification", CERTIFICATIONS.iter().map(|c| c.id))?;
    unique_ids("skill", SKILLS.iter().map(|s| s.name))?;

    for skill in SKILLS {
        if skill.level > 100 {
            return Err(ContentError::LevelOutOfRange {
                skill: skill.name,
                level: skill.level,
            });
        }
    }

    for project in PROJECTS {
        for url in [project.live_url, project.github_url].into_iter().flatten() {
            outbound_url(project.title, url)?;
        }
    }
    for cert in CERTIFICATIONS {
        outbound_url(cert.title, cert.verification_url)?;
    }
    for social in profile::SOCIAL_LINKS {
        outbound_url(social.label, social.href)?;
    }

    Ok(())
}

fn unique_ids(
    list: &'static str,
    ids: impl IntoIterator<Item = &'static str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { list, id });
        }
    }
    Ok(())
}

fn outbound_url(owner: &'static str, url: &'static str) -> Result<Url, ContentError> {
    let parsed = Url::parse(url).map_err(|source| ContentError::InvalidUrl { owner, url, source })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ContentError::UnsupportedScheme { owner, url }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let err = unique_ids("project", ["1", "2", "1"]).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateId {
                list: "project",
                id: "1"
            }
        );
    }

    #[test]
    fn relative_urls_are_rejected() {
        let err = outbound_url("badge", "/az-900.png").unwrap_err();
        assert!(matches!(err, ContentError::InvalidUrl { owner: "badge", .. }));
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        let err = outbound_url("mail", "mailto:someone@example.com").unwrap_err();
        assert_eq!(
            err,
            ContentError::UnsupportedScheme {
                owner: "mail",
                url: "mailto:someone@example.com"
            }
        );
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = ContentError::DuplicateId {
            list: "certification",
            id: "3",
        };
        assert_eq!(err.to_string(), "duplicate certification id: 3");
    }
}
