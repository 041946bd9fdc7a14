use leptos::{html, prelude::*};

use crate::content::{Section, ACHIEVEMENTS, ACHIEVEMENT_PRINCIPLES, ACHIEVEMENT_STATS};
use crate::motion::Entrance;

use super::section::{use_reveal, GridBackdrop, PrincipleCard, SectionHeader};

#[component]
pub fn Achievements() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::Achievements);

    view! {
        <section
            id=Section::Achievements.anchor()
            node_ref=section_ref
            class="py-32 bg-gray-50 dark:bg-gray-800 relative overflow-hidden"
        >
            <GridBackdrop cell=50 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="ACHIEVEMENTS"
                    subtitle="Milestones from competitions, leadership and community work"
                    revealed
                />

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-16">
                    {ACHIEVEMENT_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            let entrance = Entrance::zoom(0.8).stagger(200, 100, i);
                            view! {
                                <div
                                    class="bg-white dark:bg-gray-900 border-2 border-gray-200 dark:border-gray-700 rounded-3xl p-6 text-center shadow-sm"
                                    style=move || entrance.style(revealed.get())
                                >
                                    <div class="text-4xl mb-3">{stat.glyph}</div>
                                    <div class="text-4xl font-black text-purple-600 mb-1">{stat.number}</div>
                                    <div class="text-gray-600 dark:text-gray-400 font-medium">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            let entrance = Entrance::fade_up(30.0).stagger(400, 100, i);
                            let accent = achievement.accent;
                            view! {
                                <div
                                    class=format!(
                                        "{} dark:bg-gray-900 border-2 {} rounded-3xl p-8 hover:-translate-y-2 hover:shadow-xl transition-all duration-300",
                                        accent.bg,
                                        accent.border,
                                    )
                                    style=move || entrance.style(revealed.get())
                                >
                                    <div class="flex items-center justify-between mb-6">
                                        <div class=format!(
                                            "w-16 h-16 rounded-2xl bg-gradient-to-br {} flex items-center justify-center text-3xl",
                                            accent.gradient,
                                        )>{achievement.glyph}</div>
                                        <span class="flex items-center gap-1 px-3 py-1 bg-white dark:bg-gray-800 rounded-full text-sm font-bold text-gray-700 dark:text-gray-200">
                                            {achievement.category.glyph()}
                                            {achievement.category.label()}
                                        </span>
                                    </div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-3">
                                        {achievement.title}
                                    </h3>
                                    <p class="text-gray-600 dark:text-gray-300 leading-relaxed">
                                        {achievement.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <PrincipleCard
                    title="Recognition & Growth"
                    blurb="Each milestone reflects the people I worked alongside and the lessons that carried into the next challenge."
                    principles=&ACHIEVEMENT_PRINCIPLES
                    revealed
                    delay_ms=900
                />
            </div>
        </section>
    }
}
