use leptos::prelude::*;

use crate::content::{Section, NAV_ITEMS, PROFILE, SOCIAL_LINKS};

use super::scroll::scroll_to_section;

/// Stamped by build.rs so server and client render the same year.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 pt-20 pb-10 relative overflow-hidden">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-12">
                    <div>
                        <div class="flex items-center gap-3 mb-4">
                            <div class="bg-gradient-to-br from-purple-500 to-purple-600 p-3 rounded-2xl text-white font-mono font-bold">
                                "</>"
                            </div>
                            <span class="font-display font-bold text-xl text-white">
                                {PROFILE.first_name}
                                <span class="text-purple-400">{PROFILE.last_name}</span>
                            </span>
                        </div>
                        <p class="leading-relaxed">{PROFILE.tagline}</p>
                    </div>

                    <div>
                        <h4 class="text-white font-bold text-lg mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{}", item.target.anchor())
                                                class="hover:text-purple-400 transition-colors duration-300"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    scroll_to_section(item.target, item.offset);
                                                }
                                            >
                                                {item.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-bold text-lg mb-4">"Connect"</h4>
                        <div class="flex flex-wrap gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    let external = link.is_external();
                                    view! {
                                        <a
                                            href=link.url
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            aria-label=link.name
                                            class="w-11 h-11 rounded-xl bg-gray-800 hover:bg-purple-600 text-white text-xl flex items-center justify-center transition-colors duration-300"
                                        >
                                            {if link.glyph.starts_with("devicon") {
                                                view! { <i class=link.glyph></i> }.into_any()
                                            } else {
                                                link.glyph.into_any()
                                            }}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-sm">
                        "© " {BUILD_YEAR} " " {PROFILE.full_name} ". Made with ♥ and lots of coffee."
                    </p>
                    <a
                        href="#home"
                        class="text-sm font-medium hover:text-purple-400 transition-colors duration-300"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(Section::Home, 0.0);
                        }
                    >
                        "Back to Top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
