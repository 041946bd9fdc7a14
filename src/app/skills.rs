use leptos::{html, prelude::*};

use crate::content::{skill_category, Section, SKILLS_CALLOUT, SKILL_CATEGORIES};
use crate::motion::{grow_width, Entrance};

use super::section::{use_mounted, use_reveal, CalloutCard, GridBackdrop, SectionHeader};

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::Skills);
    let (active, set_active) = signal(0usize);

    let tabs = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <button
                    class=move || {
                        format!(
                            "px-6 py-3 rounded-2xl font-bold transition-all duration-300 {}",
                            if active.get() == i {
                                format!(
                                    "bg-gradient-to-r {} text-white shadow-lg scale-105",
                                    category.accent.gradient,
                                )
                            } else {
                                "bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-200"
                                    .to_string()
                            },
                        )
                    }
                    on:click=move |_| set_active.set(i)
                >
                    {category.title}
                </button>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Skills.anchor()
            node_ref=section_ref
            class="py-32 bg-gray-50 dark:bg-gray-800 relative overflow-hidden"
        >
            <GridBackdrop cell=40 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="SKILLS"
                    subtitle="A blend of technical expertise, creative vision and leadership"
                    revealed
                />

                <div
                    class="flex flex-wrap justify-center gap-4 mb-16"
                    style=move || Entrance::fade_up(20.0).delay_ms(200).style(revealed.get())
                >
                    {tabs}
                </div>

                {move || {
                    let index = active.get();
                    match skill_category(index) {
                        Ok(category) => {
                            let accent = category.accent;
                            // bars regrow from zero on every tab switch
                            let grown = use_mounted();
                            view! {
                                <div class=format!(
                                    "max-w-4xl mx-auto {} dark:bg-gray-900 border-2 {} rounded-3xl p-10 animate-rise-in",
                                    accent.bg,
                                    accent.border,
                                )>
                                    <h3 class="text-3xl font-black text-gray-900 dark:text-white mb-8">
                                        {category.title} " Skills"
                                    </h3>
                                    <div class="space-y-6">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(i, skill)| {
                                                let delay = 300 + 100 * u32::try_from(i).unwrap_or(0);
                                                view! {
                                                    <div>
                                                        <div class="flex justify-between mb-2 font-medium text-gray-800 dark:text-gray-200">
                                                            <span>{skill.name}</span>
                                                            <span>{skill.level} "%"</span>
                                                        </div>
                                                        <div class="h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                                                            <div
                                                                class=format!("h-full rounded-full {}", skill.color)
                                                                style=move || grow_width(skill.level, revealed.get() && grown.get(), delay)
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            log::warn!("{err}");
                            ().into_any()
                        }
                    }
                }}

                <div class="mt-20">
                    <CalloutCard callout=&SKILLS_CALLOUT revealed delay_ms=1000 />
                </div>
            </div>
        </section>
    }
}
