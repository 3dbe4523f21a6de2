use crate::state::{Categorized, Category, CategoryFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    WebApp,
    Dashboard,
    Mobile,
    MobileAndWeb,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        ProjectCategory::WebApp,
        ProjectCategory::Dashboard,
        ProjectCategory::Mobile,
        ProjectCategory::MobileAndWeb,
    ];

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::Dashboard => "Dashboard",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::MobileAndWeb => "Mobile & Web Application",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub tech_stack: &'static [&'static str],
    pub problem: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    pub image: &'static str,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub category: ProjectCategory,
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

/// Number of tech tags a card shows before collapsing the rest into `+N`.
pub const CARD_TECH_LIMIT: usize = 3;

impl Project {
    /// Tags shown on the card, plus how many were left out.
    pub fn card_tech(&self) -> (&'static [&'static str], usize) {
        let shown = self.tech_stack.len().min(CARD_TECH_LIMIT);
        (&self.tech_stack[..shown], self.tech_stack.len() - shown)
    }
}

/// Buttons offered above the gallery. "Mobile & Web Application" is not one
/// of them, so the Mobile button only matches projects tagged exactly Mobile.
pub fn filter_options() -> Vec<CategoryFilter<ProjectCategory>> {
    vec![
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::WebApp),
        CategoryFilter::Only(ProjectCategory::Dashboard),
        CategoryFilter::Only(ProjectCategory::Mobile),
    ]
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "E-Commerce Platform",
        summary: "A modern, full-featured e-commerce solution with AI-powered recommendations.",
        description: "Built a scalable e-commerce platform handling thousands of daily transactions with real-time inventory management and AI-powered product recommendations.",
        role: "Full Stack Developer",
        tech_stack: &["React", "Node.js", "PostgreSQL", "MongoDB", "AWS"],
        problem: "The client needed a scalable solution to replace their legacy system that couldn't handle peak traffic.",
        solution: "Implemented a microservices architecture with caching layers and CDN optimization.",
        results: "300% increase in page load speed, 50% reduction in cart abandonment.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
        live_url: Some("https://example.com"),
        github_url: Some("https://github.com"),
        category: ProjectCategory::WebApp,
    },
    Project {
        id: "2",
        title: "Finance and Expense Management System",
        summary: "Real-time analytics dashboard with ML-powered insights and predictions.",
        description: "Developed an analytics platform that processes millions of data points to provide actionable expense insights using machine learning models.",
        role: "Frontend Lead & ML Integration",
        tech_stack: &["Next.js", "Python", "TensorFlow", "D3.js", "MongoDB"],
        problem: "Business stakeholders needed real-time insights but data was scattered across multiple systems.",
        solution: "Created a unified dashboard with ML models for predictive analytics and anomaly detection.",
        results: "40% faster decision-making, identified results in cost savings.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        live_url: Some("https://example.com"),
        github_url: None,
        category: ProjectCategory::Dashboard,
    },
    Project {
        id: "3",
        title: "All-in-One Travel & Ticket Booking Platform",
        summary: "Unified travel and hotel booking system with real-time search, pricing, and seat selection.",
        description: "Developed a comprehensive travel booking platform that allows users to search, compare, and book flights, trains, buses, metro, and hotels in a single application with seamless payment and user experience.",
        role: "Full Stack Developer",
        tech_stack: &["React", "Node.js", "PostgreSQL", "Redis", "GraphQL", "Stripe"],
        problem: "Users had to rely on multiple apps for different travel modes and hotel bookings, leading to fragmented experience and inefficiencies.",
        solution: "Built an integrated multi-modal travel booking system with real-time availability, dynamic pricing, secure payments, and centralized booking management.",
        results: "50% reduction in booking time, 80% increase in user engagement, 1000 active users in first month.",
        image: "https://images.unsplash.com/photo-1542650742-d3150fb66298?w=800&q=80",
        live_url: None,
        github_url: Some("https://github.com"),
        category: ProjectCategory::MobileAndWeb,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_tech_truncates_to_three() {
        let travel = PROJECTS.iter().find(|p| p.id == "3").unwrap();
        let (shown, hidden) = travel.card_tech();
        assert_eq!(shown, ["React", "Node.js", "PostgreSQL"]);
        assert_eq!(hidden, 3);
    }

    #[test]
    fn short_stacks_have_no_overflow() {
        let (shown, hidden) = Project {
            tech_stack: &["Rust", "Leptos"],
            ..PROJECTS[0].clone()
        }
        .card_tech();
        assert_eq!(shown, ["Rust", "Leptos"]);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn filter_bar_omits_combined_category() {
        let labels: Vec<_> = filter_options().iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Web App", "Dashboard", "Mobile"]);
    }
}
