#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementIcon {
    Trophy,
    Award,
    Star,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub icon: AchievementIcon,
    pub kind: &'static str,
}

/// Timeline side for the entry at `index`; even entries sit on the left.
pub fn is_left(index: usize) -> bool {
    index % 2 == 0
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "1",
        title: "Google Developers Student Club Lead",
        description: "Led a student developer community, organized workshops, hackathons, and study jams, and mentored students in Google Cloud, Web, and DevOps technologies while driving community growth and partnerships.",
        date: "2023 - 2024",
        icon: AchievementIcon::Trophy,
        kind: "Leadership",
    },
    Achievement {
        id: "2",
        title: "Microsoft Learn Student Ambassador",
        description: "Conducted 50+ sessions on Azure, Cloud, and AI, promoted Microsoft technologies through workshops, and collaborated with mentors across the Microsoft ecosystem.",
        date: "2023 - 2024",
        icon: AchievementIcon::Trophy,
        kind: "Community",
    },
    Achievement {
        id: "3",
        title: "Freelance Software Engineer",
        description: "Delivered end-to-end MERN stack solutions for global clients, handling requirements, development, deployment, and support while building scalable, secure, and performance-optimized applications.",
        date: "2024 - Present",
        icon: AchievementIcon::Star,
        kind: "Experience",
    },
    Achievement {
        id: "4",
        title: "Frontend Developer Intern, Technocolabs",
        description: "Developed a responsive e-commerce web application using the MERN stack, integrated APIs, implemented real-time features, and delivered production-ready components in an Agile environment.",
        date: "Nov 2023 - Jan 2024",
        icon: AchievementIcon::Award,
        kind: "Internship",
    },
    Achievement {
        id: "5",
        title: "Google Cloud Arcade Facilitator",
        description: "Facilitated hands-on Generative AI learning sessions using Google Cloud, guided participants through labs and projects, and supported learners in building practical AI-powered solutions.",
        date: "2023",
        icon: AchievementIcon::Star,
        kind: "AI & Cloud",
    },
    Achievement {
        id: "6",
        title: "Future Skills Expert",
        description: "Completed an internship under the Government of Andhra Pradesh and JNTUK, where I developed Python-based project modules and conducted technical training sessions on programming and AI concepts, helping peers strengthen their foundational and practical skills.",
        date: "Jan 2024 - May 2024",
        icon: AchievementIcon::Star,
        kind: "Internship",
    },
];
