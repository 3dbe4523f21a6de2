/// A closed set of category tags.
pub trait Category: Copy + Eq + 'static {
    /// Every tag, in the order the filter bar shows them.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Anything tagged with exactly one category.
pub trait Categorized {
    type Category: Category;

    fn category(&self) -> Self::Category;
}

/// The active selection of a filter bar.
///
/// "Show everything" is its own variant so it can never collide with a
/// category that happens to be called "All".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

const ALL_LABEL: &str = "All";

impl<C: Category> CategoryFilter<C> {
    /// `All` followed by every category.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(C::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_LABEL {
            Some(Self::All)
        } else {
            C::from_label(label).map(Self::Only)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(c) => c.label(),
        }
    }

    /// Whether this button corresponds to the current selection.
    pub fn is_active(self, selected: Self) -> bool {
        self == selected
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    /// Stable subsequence of `items` matching the selection.
    pub fn apply<'a, T>(self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items.iter().filter(|i| self.matches(i.category())).collect()
    }
}

/// Filter by a raw label. Labels outside the set match nothing.
pub fn filter_by_label<'a, T>(items: &'a [T], label: &str) -> Vec<&'a T>
where
    T: Categorized,
{
    match CategoryFilter::<T::Category>::from_label(label) {
        Some(filter) => filter.apply(items),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{skills, ProjectCategory, SkillCategory, PROJECTS, SKILLS};

    #[test]
    fn all_returns_everything_in_order() {
        let filtered = CategoryFilter::<SkillCategory>::All.apply(SKILLS);
        let names: Vec<_> = filtered.iter().map(|s| s.name).collect();
        let expected: Vec<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn each_category_keeps_only_its_members_in_order() {
        for &category in SkillCategory::ALL {
            let filtered = CategoryFilter::Only(category).apply(SKILLS);
            assert!(filtered.iter().all(|s| s.category == category));

            let expected: Vec<_> = SKILLS
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.name)
                .collect();
            let names: Vec<_> = filtered.iter().map(|s| s.name).collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn backend_picks_up_entries_declared_out_of_group() {
        let names: Vec<_> = CategoryFilter::Only(SkillCategory::Backend)
            .apply(SKILLS)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names.first(), Some(&"Java"));
        assert!(names.contains(&"DS & Algo"));
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let filter = CategoryFilter::Only(SkillCategory::DevOps);
        assert_eq!(filter.apply(SKILLS), filter.apply(SKILLS));
    }

    #[test]
    fn unknown_label_yields_nothing() {
        assert!(filter_by_label(SKILLS, "Embedded").is_empty());
        assert!(filter_by_label(SKILLS, "").is_empty());
        assert_eq!(filter_by_label(SKILLS, "All").len(), SKILLS.len());
    }

    #[test]
    fn labels_round_trip() {
        for option in CategoryFilter::<SkillCategory>::options() {
            assert_eq!(CategoryFilter::from_label(option.label()), Some(option));
        }
        assert_eq!(
            CategoryFilter::<SkillCategory>::from_label("Tools/AI"),
            Some(CategoryFilter::Only(SkillCategory::ToolsAi))
        );
    }

    #[test]
    fn mobile_filter_is_empty_for_shipped_projects() {
        assert!(CategoryFilter::Only(ProjectCategory::Mobile)
            .apply(PROJECTS)
            .is_empty());
        assert_eq!(
            CategoryFilter::Only(ProjectCategory::WebApp).apply(PROJECTS).len(),
            1
        );
    }

    #[test]
    fn only_the_selected_button_is_active() {
        let selected = CategoryFilter::Only(SkillCategory::Backend);
        let active: Vec<_> = CategoryFilter::<SkillCategory>::options()
            .into_iter()
            .filter(|o| o.is_active(selected))
            .collect();
        assert_eq!(active, [selected]);
    }

    #[test]
    fn skill_options_start_with_all() {
        let labels: Vec<_> = skills::filter_options().iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Frontend", "Backend", "Tools/AI", "DevOps"]);
    }
}
