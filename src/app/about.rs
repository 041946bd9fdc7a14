use leptos::{html, prelude::*};

use crate::content::{AboutMode, Section, ABOUT_COUNTERS, PROFILE};
use crate::motion::Entrance;

use super::section::{use_reveal, GridBackdrop, SectionHeader};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::About);
    let (mode, set_mode) = signal(AboutMode::default());

    let mode_button = move |m: AboutMode| {
        let content = m.content();
        view! {
            <button
                class=move || {
                    format!(
                        "flex items-center gap-3 px-8 py-4 rounded-2xl font-bold text-lg transition-all duration-300 {}",
                        if mode.get() == m {
                            content.active_class
                        } else {
                            "bg-gray-100 text-gray-700 hover:bg-gray-200"
                        },
                    )
                }
                on:click=move |_| set_mode.set(m)
            >
                {content.label}
            </button>
        }
    };

    view! {
        <section
            id=Section::About.anchor()
            node_ref=section_ref
            class="py-32 bg-white dark:bg-gray-900 relative overflow-hidden"
        >
            <GridBackdrop cell=60 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="ABOUT"
                    subtitle="Discover the story behind the code and creativity"
                    revealed
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-start mb-20">
                    <div
                        class="space-y-8"
                        style=move || Entrance::slide_x(-50.0).delay_ms(200).style(revealed.get())
                    >
                        <div class="bg-white dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 rounded-3xl p-8 shadow-sm">
                            <div class="flex items-center gap-6 mb-6">
                                <img
                                    src=PROFILE.photo_url
                                    alt=PROFILE.full_name
                                    class="w-20 h-20 rounded-2xl object-cover"
                                />
                                <div>
                                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white">
                                        {PROFILE.full_name}
                                    </h3>
                                    <p class="text-purple-600 font-medium">{PROFILE.role}</p>
                                </div>
                            </div>
                            <p class="text-gray-700 dark:text-gray-300 leading-relaxed text-lg mb-6">
                                {PROFILE.bio}
                            </p>
                            <div class="flex items-center gap-2 text-green-600 font-medium">
                                <span class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></span>
                                "Available for opportunities"
                            </div>
                        </div>

                        <div class="bg-gradient-to-br from-purple-50 to-blue-50 border-2 border-purple-200 rounded-3xl p-8">
                            <blockquote class="text-xl font-medium text-gray-800 italic leading-relaxed mb-4">
                                "\u{201c}" {PROFILE.quote} "\u{201d}"
                            </blockquote>
                            <cite class="text-purple-600 font-medium">"My Design Philosophy"</cite>
                        </div>
                    </div>

                    <div
                        class="space-y-8"
                        style=move || Entrance::slide_x(50.0).delay_ms(400).style(revealed.get())
                    >
                        <div class="flex gap-4">
                            {AboutMode::ALL.into_iter().map(mode_button).collect_view()}
                        </div>

                        {move || {
                            let content = mode.get().content();
                            view! {
                                <div class="bg-white dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 rounded-3xl p-8 shadow-sm animate-rise-in">
                                    <div class="mb-6">
                                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white">
                                            {content.title}
                                        </h3>
                                        <p class="text-gray-600 dark:text-gray-400">{content.tagline}</p>
                                    </div>
                                    <p class="text-gray-700 dark:text-gray-300 leading-relaxed mb-6">
                                        {content.summary}
                                    </p>
                                    <div class="grid grid-cols-2 gap-3">
                                        {content
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="flex items-center gap-2 bg-gray-50 dark:bg-gray-900 rounded-xl px-4 py-3 font-medium text-gray-800 dark:text-gray-200">
                                                        <span class="text-purple-500">"★"</span>
                                                        {*skill}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        }}
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {ABOUT_COUNTERS
                        .iter()
                        .enumerate()
                        .map(|(i, counter)| {
                            let entrance = Entrance::fade_up(30.0).stagger(600, 100, i);
                            view! {
                                <div
                                    class="text-center bg-white dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 rounded-3xl p-8 shadow-sm hover:scale-105 transition-transform duration-300"
                                    style=move || entrance.style(revealed.get())
                                >
                                    <div class=format!("text-5xl font-black mb-2 {}", counter.color)>
                                        {counter.value} "+"
                                    </div>
                                    <div class="text-gray-600 dark:text-gray-400 font-medium">
                                        {counter.label}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
