#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: &'static str,
    pub verification_url: &'static str,
    pub badge_image: &'static str,
    pub skills: &'static [&'static str],
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "1",
        title: "Azure Fundamentals",
        issuer: "Microsoft",
        date: "April 2023",
        credential_id: "E0C891D39D6D1B70",
        verification_url: "https://learn.microsoft.com/api/credentials/share/en-us/20A31A1261-4308/E0C891D39D6D1B70?sharingId=studentamb_199518",
        badge_image: "/az-900.png",
        skills: &["Cloud Concepts", "Azure Core Services", "Azure Security", "Cloud Pricing & Support"],
    },
    Certification {
        id: "2",
        title: "Google Cloud Digital Leader",
        issuer: "Google Cloud",
        date: "March 2024",
        credential_id: "16142ef0-e1e6-48bb-91c5-f1ddd377f78e",
        verification_url: "https://www.credly.com/earner/earned/badge/16142ef0-e1e6-48bb-91c5-f1ddd377f78e",
        badge_image: "/gcp-cdl.png",
        skills: &["Cloud Fundamentals", "Google Cloud Services", "Cloud Security Basics", "Data & AI Concepts"],
    },
    Certification {
        id: "3",
        title: "Azure Developer Associate",
        issuer: "Microsoft",
        date: "April 2024",
        credential_id: "B511CC133EBF8D9",
        verification_url: "https://learn.microsoft.com/en-us/users/20a31a1261-4308/credentials/b511cc133ebf8d9",
        badge_image: "/az-204.png",
        skills: &["Azure Functions", "REST APIs", "Azure Storage", "App Deployment"],
    },
    Certification {
        id: "4",
        title: "AWS Cloud Foundations",
        issuer: "Amazon Web Services",
        date: "June 2023",
        credential_id: "61edb98d-552f-4b5f-b859-c0bd4420243a",
        verification_url: "https://www.credly.com/earner/earned/badge/61edb98d-552f-4b5f-b859-c0bd4420243a",
        badge_image: "/aws-cloud.png",
        skills: &["EC2 & S3", "AWS Networking", "IAM Security", "Cloud Architecture Basics"],
    },
];
