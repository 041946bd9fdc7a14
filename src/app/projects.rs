use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::{Project, ProjectSelection, Section, PROJECTS};
use crate::motion::Entrance;

use super::scroll::set_body_scroll_locked;
use super::section::{use_reveal, GridBackdrop, SectionHeader};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::Projects);
    let selection = RwSignal::new(ProjectSelection::default());

    let is_open = Memo::new(move |_| selection.with(ProjectSelection::is_open));
    Effect::new(move |_| set_body_scroll_locked(is_open.get()));
    on_cleanup(|| set_body_scroll_locked(false));

    let close = move || {
        if selection.with_untracked(ProjectSelection::is_open) {
            selection.update(ProjectSelection::close);
        }
    };
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });

    let open = move |id: u32| {
        selection.update(|s| {
            if let Err(err) = s.open(id) {
                log::warn!("{err}");
            }
        })
    };

    view! {
        <section
            id=Section::Projects.anchor()
            node_ref=section_ref
            class="py-32 bg-white dark:bg-gray-900 relative overflow-hidden"
        >
            <GridBackdrop cell=60 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="PROJECTS"
                    subtitle="Innovative solutions built with modern technologies and creative thinking"
                    revealed
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let entrance = Entrance::fade_up(30.0).stagger(200, 100, i);
                            view! {
                                <div style=move || entrance.style(revealed.get())>
                                    <ProjectCard project on_open=move || open(project.id) />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selection
                    .get()
                    .selected()
                    .map(|project| view! { <ProjectDetail project on_close=close /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: impl Fn() + 'static) -> impl IntoView {
    let accent = project.accent;
    view! {
        <div class=format!(
            "h-full flex flex-col bg-white dark:bg-gray-800 border-2 {} rounded-3xl p-8 shadow-sm hover:shadow-xl hover:-translate-y-2 transition-all duration-300 group",
            accent.border,
        )>
            <div class=format!(
                "w-16 h-16 rounded-2xl bg-gradient-to-br {} flex items-center justify-center text-3xl mb-6 group-hover:scale-110 transition-transform duration-300",
                accent.gradient,
            )>{project.glyph}</div>
            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-3">{project.title}</h3>
            <p class="text-gray-600 dark:text-gray-300 leading-relaxed mb-6 flex-1">
                {project.description}
            </p>
            <Tags tags=project.tags />
            <div class="flex gap-3 mt-6">
                <button
                    class="flex-1 px-4 py-3 bg-gray-900 dark:bg-white text-white dark:text-gray-900 font-bold rounded-xl hover:scale-105 transition-transform duration-300"
                    on:click=move |_| on_open()
                >
                    "View Details"
                </button>
                <a
                    href=project.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-4 py-3 border-2 border-gray-200 dark:border-gray-600 rounded-xl text-xl hover:scale-105 transition-transform duration-300"
                    aria-label="Source on GitHub"
                >
                    <i class="devicon-github-original"></i>
                </a>
            </div>
        </div>
    }
}

#[component]
fn Tags(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="px-3 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-200 rounded-full text-sm font-medium">
                            {*tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full-screen overlay for one project. A click on the backdrop closes it,
/// a click inside the panel does not.
#[component]
fn ProjectDetail(project: &'static Project, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm p-6 animate-fade-in"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close()
        >
            <div
                class="relative max-w-2xl w-full max-h-[90vh] overflow-y-auto bg-white dark:bg-gray-800 rounded-3xl p-10 shadow-2xl animate-rise-in"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center gap-4 mb-6">
                    <div class=format!(
                        "w-14 h-14 rounded-2xl bg-gradient-to-br {} flex items-center justify-center text-2xl",
                        project.accent.gradient,
                    )>{project.glyph}</div>
                    <h3 class="text-3xl font-black text-gray-900 dark:text-white">{project.title}</h3>
                </div>
                <Tags tags=project.tags />
                <p class="text-gray-700 dark:text-gray-300 leading-relaxed text-lg my-6">
                    {project.description}
                </p>
                <h4 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Key Features"</h4>
                <ul class="space-y-3 mb-8">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-start gap-3 text-gray-700 dark:text-gray-300">
                                    <span class="text-purple-500 font-bold">"✓"</span>
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-4">
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 flex items-center justify-center gap-2 px-6 py-3 bg-gray-900 dark:bg-white text-white dark:text-gray-900 font-bold rounded-xl hover:scale-105 transition-transform duration-300"
                    >
                        <i class="devicon-github-original"></i>
                        "View on GitHub"
                    </a>
                    <button
                        class="px-6 py-3 border-2 border-gray-200 dark:border-gray-600 font-bold rounded-xl text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors duration-300"
                        on:click=move |_| on_close()
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
