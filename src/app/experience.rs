use leptos::{html, prelude::*};

use crate::content::{ExperienceEntry, Section, EXPERIENCES, LEADERSHIP_PRINCIPLES};
use crate::motion::Entrance;

use super::section::{use_reveal, GridBackdrop, PrincipleCard, SectionHeader};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::Experience);

    view! {
        <section
            id=Section::Experience.anchor()
            node_ref=section_ref
            class="py-32 bg-white dark:bg-gray-900 relative overflow-hidden"
        >
            <GridBackdrop cell=60 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="EXPERIENCE"
                    subtitle="Internships, leadership roles and community work that shaped my journey"
                    revealed
                />

                <div class="relative max-w-5xl mx-auto mb-20">
                    // timeline spine
                    <div class="absolute left-8 top-0 bottom-0 w-1 bg-gradient-to-b from-purple-500 to-blue-500 rounded-full hidden md:block"></div>
                    <div class="space-y-12">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                let entrance = Entrance::slide_x(-50.0).stagger(200, 150, i);
                                view! {
                                    <div style=move || entrance.style(revealed.get())>
                                        <TimelineEntry entry />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <PrincipleCard
                    title="Leadership Philosophy"
                    blurb="Great outcomes come from teams that trust each other, share a vision and care about the people they build for."
                    principles=&LEADERSHIP_PRINCIPLES
                    revealed
                    delay_ms=1000
                />
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static ExperienceEntry) -> impl IntoView {
    let accent = entry.accent;
    view! {
        <div class="relative md:pl-24">
            <div class=format!(
                "hidden md:flex absolute left-0 top-6 w-16 h-16 rounded-2xl bg-gradient-to-br {} items-center justify-center text-2xl text-white shadow-lg",
                accent.gradient,
            )>{entry.glyph}</div>
            <div class=format!(
                "{} dark:bg-gray-800 border-2 {} rounded-3xl p-8 hover:shadow-xl transition-shadow duration-300",
                accent.bg,
                accent.border,
            )>
                <div class="flex flex-wrap items-start justify-between gap-4 mb-4">
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white">{entry.title}</h3>
                        <p class="text-lg font-medium text-purple-600">{entry.organization}</p>
                    </div>
                    <span class="flex items-center gap-2 px-4 py-2 bg-white dark:bg-gray-900 rounded-full text-sm font-bold text-gray-700 dark:text-gray-200 shadow-sm">
                        {entry.kind.glyph()}
                        {entry.kind.label()}
                    </span>
                </div>
                <div class="flex flex-wrap gap-6 text-sm text-gray-600 dark:text-gray-400 mb-4">
                    <span>"📅 " {entry.period}</span>
                    <span>"📍 " {entry.location}</span>
                </div>
                <p class="text-gray-700 dark:text-gray-300 leading-relaxed mb-6">{entry.description}</p>
                <ul class="grid grid-cols-1 md:grid-cols-2 gap-3">
                    {entry
                        .highlights
                        .iter()
                        .map(|highlight| {
                            view! {
                                <li class="flex items-start gap-2 text-gray-700 dark:text-gray-300">
                                    <span class="text-purple-500">"▸"</span>
                                    {*highlight}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
