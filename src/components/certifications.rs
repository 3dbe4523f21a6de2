use leptos::prelude::*;

use super::{Icon, IconKind, Reveal, SectionHeader};
use crate::content::{Certification, CERTIFICATIONS};

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class="section certifications">
            <div class="container">
                <SectionHeader
                    eyebrow="Credentials"
                    title="Professional"
                    highlight="Certifications"
                    blurb="Industry-recognized certifications validating my expertise and continuous learning."
                />

                <div class="cert-grid">
                    {CERTIFICATIONS
                        .iter()
                        .zip(0u32..)
                        .map(|(cert, index)| view! {
                            <Reveal delay_ms={index * 100}>
                                <CertificationCard cert=cert />
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification) -> impl IntoView {
    view! {
        <article class="cert-card">
            <div class="cert-card__badge">
                <img src=cert.badge_image alt=format!("{} badge", cert.title) loading="lazy" />
            </div>
            <div class="cert-card__body">
                <div class="cert-card__head">
                    <h3>{cert.title}</h3>
                    <Icon kind=IconKind::CheckCircle class="icon--accent" />
                </div>
                <p class="muted">{cert.issuer}</p>
                <p class="cert-card__issued">
                    "Issued " {cert.date} " • ID: " {cert.credential_id}
                </p>
                <div class="cert-card__skills">
                    {cert.skills.iter().map(|s| view! { <span class="tag">{*s}</span> }).collect_view()}
                </div>
                <a
                    href=cert.verification_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cert-card__verify"
                >
                    <Icon kind=IconKind::ExternalLink class="icon--xs" />
                    "Verify"
                </a>
            </div>
        </article>
    }
}
