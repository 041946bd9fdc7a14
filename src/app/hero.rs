use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::config::SITE;
use crate::content::{social_link, Section, PROFILE};
use crate::motion::{Entrance, Typewriter};

use super::particles::ParticleBackground;
use super::scroll::scroll_to_section;
use super::section::use_mounted;

#[component]
pub fn Hero() -> impl IntoView {
    let mounted = use_mounted();
    let typewriter = StoredValue::new(Typewriter::new(
        PROFILE.rotating_words,
        SITE.typewriter_hold_ticks(),
    ));
    let (typed, set_typed) = signal(String::new());
    let _ = use_interval_fn(
        move || {
            typewriter.update_value(|tw| tw.tick());
            set_typed.set(typewriter.with_value(|tw| tw.text().to_string()));
        },
        SITE.typewriter_tick_ms,
    );

    let reveal = move |entrance: Entrance| move || entrance.style(mounted.get());
    let header_offset = -SITE.header_px;

    let github = social_link("GitHub");
    let linkedin = social_link("LinkedIn");

    view! {
        <section
            id=Section::Home.anchor()
            class="relative min-h-screen bg-gradient-to-br from-purple-600 via-purple-700 to-purple-800 overflow-hidden"
        >
            <div class="absolute inset-0 opacity-20">
                <div
                    class="absolute inset-0"
                    style="background-image:linear-gradient(rgba(255,255,255,0.1) 1px,transparent 1px),linear-gradient(90deg,rgba(255,255,255,0.1) 1px,transparent 1px);background-size:50px 50px;"
                ></div>
                <ParticleBackground />
                <div class="absolute top-20 left-20 w-64 h-40 border-2 border-white/30 rounded-lg p-4 animate-float">
                    <div class="w-full h-4 bg-white/20 rounded mb-2"></div>
                    <div class="w-3/4 h-4 bg-white/20 rounded mb-2"></div>
                    <div class="w-1/2 h-4 bg-white/20 rounded"></div>
                </div>
                <div class="absolute top-40 right-32 w-48 h-32 border-2 border-white/30 rounded-lg p-3 animate-float-slow">
                    <div class="w-full h-3 bg-white/20 rounded mb-1"></div>
                    <div class="w-2/3 h-3 bg-white/20 rounded"></div>
                </div>
                <div class="absolute top-60 right-20 w-16 h-16 border-2 border-white/30 rounded-xl flex items-center justify-center text-white/60 font-mono animate-spin-slow">
                    "</>"
                </div>
            </div>

            <div class="absolute top-8 right-8 z-20" style=reveal(Entrance::slide_x(50.0).delay_ms(1500))>
                <a
                    href=PROFILE.hire_me_url
                    class="px-8 py-3 bg-white text-purple-700 font-bold rounded-full hover:bg-gray-100 transition-all duration-300 shadow-lg hover:shadow-xl transform hover:scale-105"
                >
                    "HIRE ME"
                </a>
            </div>

            <div class="container mx-auto px-6 relative z-10 flex items-center min-h-screen">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center w-full">
                    <div class="space-y-8" style=reveal(Entrance::slide_x(-100.0).duration_ms(1000))>
                        <h1
                            class="text-5xl md:text-7xl lg:text-8xl font-display font-black text-white leading-tight"
                            style=reveal(Entrance::fade_up(50.0).delay_ms(300))
                        >
                            "I AM"
                            <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-white to-purple-200">
                                {PROFILE.full_name.to_uppercase().rsplit_once(' ').map(|(first, _)| first.to_string())}
                            </span>
                            <br />
                            <span class="text-3xl md:text-5xl lg:text-6xl text-purple-200 font-medium">
                                {PROFILE.full_name.to_uppercase().rsplit_once(' ').map(|(_, last)| last.to_string())}
                            </span>
                        </h1>

                        <div
                            class="text-2xl md:text-3xl lg:text-4xl font-bold text-white h-16"
                            style=reveal(Entrance::fade().delay_ms(600))
                        >
                            <span>{typed}</span>
                            <span class="animate-pulse">"|"</span>
                        </div>

                        <p
                            class="text-xl md:text-2xl text-purple-100 max-w-2xl leading-relaxed"
                            style=reveal(Entrance::fade().delay_ms(900))
                        >
                            {PROFILE.intro}
                        </p>

                        <div
                            class="flex flex-col sm:flex-row gap-4"
                            style=reveal(Entrance::fade_up(20.0).delay_ms(1200))
                        >
                            <a
                                href=PROFILE.resume_url
                                download=""
                                class="flex items-center justify-center gap-3 px-8 py-4 bg-white text-purple-700 font-bold rounded-xl hover:bg-gray-100 transition-all duration-300 shadow-lg hover:shadow-xl transform hover:scale-105"
                            >
                                "⬇ DOWNLOAD RESUME"
                            </a>
                            <a
                                href="#projects"
                                class="flex items-center justify-center gap-3 px-8 py-4 bg-transparent border-2 border-white text-white font-bold rounded-xl hover:bg-white hover:text-purple-700 transition-all duration-300 cursor-pointer transform hover:scale-105"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to_section(Section::Projects, header_offset);
                                }
                            >
                                "VIEW PORTFOLIO"
                            </a>
                        </div>

                        <div class="flex gap-6" style=reveal(Entrance::fade().delay_ms(1500))>
                            {[github, linkedin]
                                .into_iter()
                                .flatten()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="p-4 bg-white/10 backdrop-blur-sm border border-white/20 rounded-full hover:bg-white/20 transition-all duration-300 transform hover:scale-110 text-white text-2xl"
                                            aria-label=link.name
                                        >
                                            <i class=link.glyph></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class="relative flex justify-center lg:justify-end"
                        style=reveal(Entrance::slide_x(100.0).duration_ms(1000).delay_ms(500))
                    >
                        <div class="relative">
                            <div class="w-80 h-80 md:w-96 md:h-96 rounded-full overflow-hidden border-4 border-white/20 shadow-2xl">
                                <img
                                    src=PROFILE.photo_url
                                    alt=PROFILE.full_name
                                    class="w-full h-full object-cover filter grayscale hover:grayscale-0 transition-all duration-500"
                                />
                            </div>
                            <div class="absolute -top-4 -right-4 w-16 h-16 bg-white rounded-2xl shadow-lg flex items-center justify-center text-purple-600 text-2xl animate-spin-slow">
                                "⚡"
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 z-10"
                style=reveal(Entrance::fade().duration_ms(1000).delay_ms(2000))
            >
                <a
                    href="#about"
                    class="flex flex-col items-center text-white hover:text-purple-200 transition-colors cursor-pointer"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(Section::About, header_offset);
                    }
                >
                    <div class="w-6 h-10 border-2 border-current rounded-full flex justify-center mb-2">
                        <div class="w-1 h-3 bg-current rounded-full mt-2 animate-float"></div>
                    </div>
                    <span class="animate-bounce">"↓"</span>
                    <span class="mt-2 text-sm font-medium">"SCROLL"</span>
                </a>
            </div>
        </section>
    }
}
