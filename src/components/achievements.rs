use leptos::prelude::*;

use super::{Icon, IconKind, Reveal, RevealFrom, SectionHeader};
use crate::content::achievements::is_left;
use crate::content::ACHIEVEMENTS;

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <section id="achievements" class="section section--muted achievements">
            <div class="container container--narrow">
                <SectionHeader
                    eyebrow="Milestones"
                    title="Key"
                    highlight="Achievements"
                    blurb="Celebrating milestones and recognition along my journey as a developer."
                />

                <ol class="timeline">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(index, achievement)| {
                            let left = is_left(index);
                            let (from, item_class) = if left {
                                (RevealFrom::Left, "timeline__item timeline__item--left")
                            } else {
                                (RevealFrom::Right, "timeline__item timeline__item--right")
                            };
                            view! {
                                <li class=item_class>
                                    <div class="timeline__node">
                                        <Icon kind=achievement.icon />
                                    </div>
                                    <Reveal from=from class="timeline__card">
                                        <div class="timeline__meta">
                                            <span class="pill">{achievement.kind}</span>
                                            <span class="muted">
                                                <Icon kind=IconKind::Calendar class="icon--xs" />
                                                {achievement.date}
                                            </span>
                                        </div>
                                        <h3>{achievement.title}</h3>
                                        <p class="muted">{achievement.description}</p>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
