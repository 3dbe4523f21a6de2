//! Personal details and link lists used by the page chrome.

pub const NAME: &str = "Vasala Devi Pradeep";
pub const MONOGRAM: &str = "VDP";
pub const TAGLINE: &str = "Building digital experiences";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const PROFILE_IMAGE: &str = "/profile.png";

pub const EMAIL: &str = "vdpradeep11@gmail.com";
pub const LOCATION: &str = "Ramachandrapuram, Andhra Pradesh, India";
pub const PHONE: &str = "+91-7674923414";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_ITEMS: &[Link] = &[
    Link { label: "About", href: "#about" },
    Link { label: "Skills", href: "#skills" },
    Link { label: "Projects", href: "#projects" },
    Link { label: "Achievements", href: "#achievements" },
    Link { label: "Certifications", href: "#certifications" },
    Link { label: "Contact", href: "#contact" },
];

pub static FOOTER_LINKS: &[Link] = &[
    Link { label: "About", href: "#about" },
    Link { label: "Skills", href: "#skills" },
    Link { label: "Projects", href: "#projects" },
    Link { label: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: Social,
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { network: Social::GitHub, label: "GitHub", href: "https://github.com" },
    SocialLink { network: Social::LinkedIn, label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { network: Social::Twitter, label: "Twitter", href: "https://twitter.com" },
    SocialLink { network: Social::Instagram, label: "Instagram", href: "https://instagram.com" },
];

const CONTACT_SOCIALS: usize = 3;

/// The contact section leaves Instagram out. A shorter list is shown whole.
pub fn contact_socials() -> &'static [SocialLink] {
    SOCIAL_LINKS.get(..CONTACT_SOCIALS).unwrap_or(SOCIAL_LINKS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "20+", label: "Projects Completed" },
    Stat { value: "5+", label: "Happy Clients" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "💻", label: "Frontend Dev", description: "React, TypeScript, Next.js" },
    Highlight { icon: "⚙️", label: "Backend Dev", description: "Node.js, Python, APIs" },
    Highlight { icon: "🎨", label: "UI/UX Design", description: "Figma, Tailwind, Motion" },
    Highlight { icon: "☁️", label: "Cloud & DevOps", description: "Azure, Docker, CI/CD" },
];

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate full-stack developer who builds modern, fast, and user-friendly web applications. With over 3 years hands-on experience, I use technologies like React, Next.js, Node.js, and cloud platforms to create scalable and reliable solutions.",
    "My goal is to build products that not only look great but also deliver real value to users. I focus on clean, maintainable code, good design practices, and continuous learning to stay up to date with the latest technologies in web development.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_section_shows_first_three_networks() {
        let networks: Vec<_> = contact_socials().iter().map(|s| s.network).collect();
        assert_eq!(networks, [Social::GitHub, Social::LinkedIn, Social::Twitter]);
    }

    #[test]
    fn nav_and_footer_links_are_anchors() {
        for link in NAV_ITEMS.iter().chain(FOOTER_LINKS) {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.label);
        }
    }
}
