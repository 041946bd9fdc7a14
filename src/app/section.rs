use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::content::{Callout, Principle, Section};
use crate::motion::{Entrance, Reveal};

/// Becomes `true` the first time enough of `target` scrolls into view, and
/// stays `true`.
pub fn use_reveal(target: NodeRef<html::Section>, section: Section) -> Signal<bool> {
    let reveal = Reveal::new(section.reveal_threshold());
    let threshold = reveal.threshold();
    let latch = StoredValue::new(reveal);
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if latch.with_value(Reveal::is_revealed) {
                return;
            }
            let fraction = entries
                .iter()
                .filter(|entry| entry.is_intersecting())
                .map(|entry| entry.intersection_ratio())
                .fold(0.0, f64::max);
            let mut flipped = false;
            latch.update_value(|latch| flipped = latch.observe(fraction));
            if flipped {
                log::debug!("revealed #{}", section.anchor());
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // nothing left to watch for
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    revealed.into()
}

/// `true` one frame after mount, so mount-time transitions have a start pose.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || set_mounted.set(true));
    });
    mounted.into()
}

#[component]
pub fn SectionHeader(
    title: &'static str,
    subtitle: &'static str,
    revealed: Signal<bool>,
) -> impl IntoView {
    let entrance = Entrance::fade_up(30.0);
    view! {
        <div class="text-center mb-20" style=move || entrance.style(revealed.get())>
            <div class="inline-block relative">
                <h2 class="text-6xl md:text-8xl font-black text-gray-900 dark:text-white mb-4 tracking-tight">
                    {title}
                </h2>
                <div
                    class="absolute -bottom-2 left-0 h-2 bg-gradient-to-r from-purple-500 to-blue-500 rounded-full"
                    style=move || {
                        format!(
                            "width:{};transition:width 1000ms ease-out 500ms;",
                            if revealed.get() { "100%" } else { "0%" },
                        )
                    }
                ></div>
            </div>
            <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto mt-8 leading-relaxed">
                {subtitle}
            </p>
        </div>
    }
}

/// Faint grid drawn behind a section.
#[component]
pub fn GridBackdrop(#[prop(default = 60)] cell: u32) -> impl IntoView {
    let style = format!(
        "background-image:linear-gradient(rgba(139,92,246,0.1) 1px,transparent 1px),linear-gradient(90deg,rgba(139,92,246,0.1) 1px,transparent 1px);background-size:{cell}px {cell}px;"
    );
    view! {
        <div class="absolute inset-0 opacity-5 pointer-events-none">
            <div class="absolute inset-0" style=style></div>
        </div>
    }
}

/// Closing card of a section: heading, blurb and two principles.
#[component]
pub fn PrincipleCard(
    title: &'static str,
    blurb: &'static str,
    principles: &'static [Principle],
    revealed: Signal<bool>,
    #[prop(default = 800)] delay_ms: u32,
) -> impl IntoView {
    let entrance = Entrance::fade_up(30.0).delay_ms(delay_ms);
    view! {
        <div class="max-w-5xl mx-auto" style=move || entrance.style(revealed.get())>
            <div class="bg-white dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 rounded-3xl p-12 shadow-sm">
                <h3 class="text-3xl font-black text-gray-900 dark:text-white mb-6 text-center">
                    {title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 leading-relaxed text-lg mb-10 text-center">
                    {blurb}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {principles
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="bg-gray-50 dark:bg-gray-900 border-2 border-gray-200 dark:border-gray-700 rounded-2xl p-6 hover:scale-[1.02] transition-transform duration-300">
                                    <h4 class="text-xl font-bold text-gray-900 dark:text-white mb-3">
                                        {p.title}
                                    </h4>
                                    <p class="text-gray-600 dark:text-gray-300">{p.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// A [`Callout`] card. `featured` renders the filled brand variant used for
/// links out, otherwise a plain card with badges.
#[component]
pub fn CalloutCard(
    callout: &'static Callout,
    revealed: Signal<bool>,
    #[prop(default = 200)] delay_ms: u32,
    #[prop(optional)] featured: bool,
) -> impl IntoView {
    let entrance = Entrance::fade_up(30.0).delay_ms(delay_ms);
    let (card, body_tone) = if featured {
        (
            "bg-gradient-to-br from-[#0077B5] to-[#004182] text-white shadow-xl hover:shadow-2xl",
            "text-blue-100",
        )
    } else {
        (
            "bg-white dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 shadow-sm text-center",
            "text-gray-600 dark:text-gray-300",
        )
    };
    let glyph = if callout.glyph.starts_with("devicon") {
        view! { <i class=format!("{} text-5xl", callout.glyph)></i> }.into_any()
    } else {
        view! { <span class="text-6xl text-purple-500">{callout.glyph}</span> }.into_any()
    };
    let badge_tones = ["bg-purple-100 text-purple-700", "bg-blue-100 text-blue-700"];

    view! {
        <div class="flex justify-center" style=move || entrance.style(revealed.get())>
            <div class=format!(
                "relative max-w-3xl w-full rounded-3xl p-12 overflow-hidden transition-all duration-500 {card}",
            )>
                <div class=if featured { "flex items-center gap-4 mb-8" } else { "mb-6" }>
                    <div class=if featured { "p-4 bg-white/20 rounded-2xl backdrop-blur-sm" } else { "" }>
                        {glyph}
                    </div>
                    <div>
                        <h3 class=if featured {
                            "text-3xl font-black mb-2"
                        } else {
                            "text-3xl font-black text-gray-900 dark:text-white mt-6"
                        }>{callout.title}</h3>
                        {(!callout.subtitle.is_empty())
                            .then(|| view! { <p class=format!("text-lg {body_tone}")>{callout.subtitle}</p> })}
                    </div>
                </div>
                <p class=format!("text-lg leading-relaxed mb-8 {body_tone}")>{callout.body}</p>
                {callout
                    .link
                    .map(|link| {
                        let external = link.is_external();
                        view! {
                            <a
                                href=link.url
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                                class="inline-flex items-center gap-3 px-8 py-4 bg-white text-[#0077B5] rounded-2xl font-bold text-lg shadow-lg hover:shadow-xl hover:scale-105 transition-all duration-300"
                            >
                                {link.label}
                                " ↗"
                            </a>
                        }
                    })}
                <div class="flex justify-center gap-4">
                    {callout
                        .badges
                        .iter()
                        .zip(badge_tones.into_iter().cycle())
                        .map(|(badge, tone)| {
                            view! {
                                <span class=format!("px-6 py-3 rounded-xl font-medium {tone}")>{*badge}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
