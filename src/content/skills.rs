use crate::state::{Categorized, Category, CategoryFilter};

use SkillCategory::{Backend, DevOps, Frontend, ToolsAi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    ToolsAi,
    DevOps,
}

impl Category for SkillCategory {
    const ALL: &'static [Self] = &[
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::ToolsAi,
        SkillCategory::DevOps,
    ];

    fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::ToolsAi => "Tools/AI",
            SkillCategory::DevOps => "DevOps",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

impl Categorized for Skill {
    type Category = SkillCategory;

    fn category(&self) -> SkillCategory {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn from_level(level: u8) -> Self {
        match level {
            90.. => Proficiency::Expert,
            75..=89 => Proficiency::Advanced,
            60..=74 => Proficiency::Intermediate,
            _ => Proficiency::Beginner,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Expert => "Expert",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Beginner => "Beginner",
        }
    }
}

impl Skill {
    pub fn proficiency(&self) -> Proficiency {
        Proficiency::from_level(self.level)
    }
}

pub fn filter_options() -> Vec<CategoryFilter<SkillCategory>> {
    CategoryFilter::options()
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub static SKILLS: &[Skill] = &[
    skill("React", 70, Frontend),
    skill("TypeScript", 70, Frontend),
    skill("Next.js", 70, Frontend),
    skill("Tailwind CSS", 70, Frontend),
    skill("Java", 70, Backend),
    skill("JavaScript", 80, Frontend),
    skill("Node.js", 80, Backend),
    skill("Python", 80, Backend),
    skill("PostgreSQL", 80, Backend),
    skill("MongoDB", 80, Backend),
    skill("GraphQL", 80, Backend),
    skill("REST APIs", 80, Backend),
    skill("Git/GitHub", 90, ToolsAi),
    skill("DS & Algo", 70, Backend),
    skill("Figma", 70, ToolsAi),
    skill("VS Code", 90, ToolsAi),
    skill("Docker", 70, DevOps),
    skill("AWS", 70, DevOps),
    skill("CI/CD", 70, DevOps),
    skill("Linux", 70, DevOps),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_thresholds() {
        assert_eq!(Proficiency::from_level(95).label(), "Expert");
        assert_eq!(Proficiency::from_level(80).label(), "Advanced");
        assert_eq!(Proficiency::from_level(65).label(), "Intermediate");
        assert_eq!(Proficiency::from_level(40).label(), "Beginner");
    }

    #[test]
    fn proficiency_boundaries() {
        assert_eq!(Proficiency::from_level(90), Proficiency::Expert);
        assert_eq!(Proficiency::from_level(89), Proficiency::Advanced);
        assert_eq!(Proficiency::from_level(75), Proficiency::Advanced);
        assert_eq!(Proficiency::from_level(74), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_level(60), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_level(59), Proficiency::Beginner);
        assert_eq!(Proficiency::from_level(0), Proficiency::Beginner);
        assert_eq!(Proficiency::from_level(100), Proficiency::Expert);
    }

    #[test]
    fn shipped_skills_span_every_category() {
        for &category in SkillCategory::ALL {
            assert!(SKILLS.iter().any(|s| s.category == category));
        }
    }

    #[test]
    fn vs_code_is_expert() {
        let vs_code = SKILLS.iter().find(|s| s.name == "VS Code").unwrap();
        assert_eq!(vs_code.proficiency(), Proficiency::Expert);
    }
}
