use leptos::{html, prelude::*};

use super::{use_reveal, FilterBar, Reveal, SectionHeader};
use crate::content::skills::filter_options;
use crate::content::{Skill, SkillCategory, SKILLS};
use crate::state::{Category, CategoryFilter};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (active, set_active) = signal(CategoryFilter::<SkillCategory>::All);
    let visible = Memo::new(move |_| active.get().apply(SKILLS));
    let count = Signal::derive(move || visible.with(Vec::len));

    view! {
        <section id="skills" class="section section--muted skills">
            <div class="container">
                <SectionHeader
                    eyebrow="My Skills"
                    title="Technologies I"
                    highlight="Work With"
                    blurb="A comprehensive toolkit for building modern web applications from concept to deployment."
                />

                <Reveal delay_ms=300>
                    <FilterBar
                        options=filter_options()
                        active=active
                        on_select=move |filter| set_active.set(filter)
                        count=count
                        noun="skills"
                    />
                </Reveal>

                <div class="skills__grid">
                    <For
                        each=move || visible.get()
                        key=|skill| skill.name
                        children=move |skill| view! { <SkillCard skill=skill /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let bar = NodeRef::<html::Div>::new();
    let revealed = use_reveal(bar);
    let level = skill.level;

    view! {
        <div class="skill-card">
            <div class="skill-card__head">
                <h4>{skill.name}</h4>
                <span class="pill">{skill.proficiency().label()}</span>
            </div>
            <div class="skill-card__track" node_ref=bar>
                <div
                    class="skill-card__bar"
                    style=move || format!("width: {}%", if revealed.get() { level } else { 0 })
                />
            </div>
            <div class="skill-card__foot">
                <span class="muted">{skill.category.label()}</span>
                <span>{level} "%"</span>
            </div>
        </div>
    }
}
