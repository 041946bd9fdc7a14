use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SITE;
use crate::contact::{ContactFormMachine, Field, SubmitPhase};
use crate::content::{Section, PROFILE, SOCIAL_LINKS};
use crate::motion::Entrance;

use super::section::{use_reveal, GridBackdrop, SectionHeader};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::Contact);
    let machine = RwSignal::new(ContactFormMachine::new());
    let phase = Memo::new(move |_| machine.with(ContactFormMachine::phase));

    // one timer walks the machine through its timed phases
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| machine.update(ContactFormMachine::advance),
        Signal::derive(move || phase.get().dwell_ms(&SITE).unwrap_or_default() as f64),
    );
    Effect::new(move |_| match phase.get().dwell_ms(&SITE) {
        Some(_) => start(()),
        None => stop(),
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // a resubmit during the banner restarts the timer through the phase change
        if let Some(Err(err)) = machine.try_update(ContactFormMachine::submit) {
            log::info!("contact form not sent: {err}");
        }
    };

    let input = move |field: Field, label: &'static str, kind: &'static str, placeholder: &'static str| {
        let value = move || machine.with(|m| m.form().get(field).to_string());
        view! {
            <label class="block">
                <span class="block text-sm font-bold text-gray-700 dark:text-gray-200 mb-2">{label}</span>
                <input
                    type=kind
                    name=field.name()
                    required=true
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| machine.update(|m| m.set(field, event_target_value(&ev)))
                    class="w-full px-5 py-4 bg-gray-50 dark:bg-gray-900 border-2 border-gray-200 dark:border-gray-700 rounded-xl text-gray-900 dark:text-white focus:border-purple-500 focus:outline-none transition-colors duration-300"
                />
            </label>
        }
    };

    view! {
        <section
            id=Section::Contact.anchor()
            node_ref=section_ref
            class="py-32 bg-white dark:bg-gray-900 relative overflow-hidden"
        >
            <GridBackdrop cell=60 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="CONTACT"
                    subtitle="Have a project in mind or just want to say hello? My inbox is always open."
                    revealed
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 max-w-6xl mx-auto">
                    <div
                        class="space-y-8"
                        style=move || Entrance::slide_x(-50.0).delay_ms(200).style(revealed.get())
                    >
                        <div>
                            <h3 class="text-3xl font-black text-gray-900 dark:text-white mb-4">
                                "Let's Talk Business"
                            </h3>
                            <p class="text-gray-600 dark:text-gray-300 leading-relaxed text-lg">
                                "Whether it's a design, a product or an idea that needs a team, I'd love to hear about it."
                            </p>
                        </div>

                        <div class="space-y-4">
                            <ContactRow glyph="✉" label="Email" href=format!("mailto:{}", PROFILE.email) text=PROFILE.email />
                            <ContactRow glyph="☎" label="Phone" href=format!("tel:{}", PROFILE.phone) text=PROFILE.phone_display />
                            <ContactRow glyph="📍" label="Location" href=String::new() text=PROFILE.location />
                        </div>

                        <div class="flex flex-wrap gap-4">
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
                                            class=format!(
                                                "w-14 h-14 rounded-2xl bg-gradient-to-br {} text-white text-2xl flex items-center justify-center hover:scale-110 transition-transform duration-300 shadow-lg",
                                                link.accent.gradient,
                                            )
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

                    <div style=move || Entrance::slide_x(50.0).delay_ms(400).style(revealed.get())>
                        <form
                            class="bg-white dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 rounded-3xl p-10 shadow-sm space-y-6"
                            on:submit=on_submit
                        >
                            <Show when=move || phase.get() == SubmitPhase::Success>
                                <div class="flex items-center gap-3 px-5 py-4 bg-green-50 border-2 border-green-200 rounded-xl text-green-700 font-medium animate-rise-in">
                                    <span class="text-xl">"✓"</span>
                                    "Thanks! Your message has been sent. I'll get back to you soon."
                                </div>
                            </Show>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {input(Field::Name, "Your Name", "text", "John Doe")}
                                {input(Field::Email, "Your Email", "email", "john@example.com")}
                            </div>
                            {input(Field::Subject, "Subject", "text", "Project inquiry")}

                            <label class="block">
                                <span class="block text-sm font-bold text-gray-700 dark:text-gray-200 mb-2">
                                    "Message"
                                </span>
                                <textarea
                                    name=Field::Message.name()
                                    required=true
                                    rows="6"
                                    placeholder="Tell me about your project..."
                                    prop:value=move || machine.with(|m| m.form().get(Field::Message).to_string())
                                    on:input=move |ev| machine.update(|m| m.set(Field::Message, event_target_value(&ev)))
                                    class="w-full px-5 py-4 bg-gray-50 dark:bg-gray-900 border-2 border-gray-200 dark:border-gray-700 rounded-xl text-gray-900 dark:text-white focus:border-purple-500 focus:outline-none transition-colors duration-300 resize-none"
                                ></textarea>
                            </label>

                            <button
                                type="submit"
                                disabled=move || phase.get() == SubmitPhase::Submitting
                                class="w-full flex items-center justify-center gap-3 px-8 py-4 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-bold rounded-xl shadow-lg hover:shadow-xl hover:scale-[1.02] transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || match phase.get() {
                                    SubmitPhase::Submitting => {
                                        view! {
                                            <span class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                                            "Sending..."
                                        }
                                            .into_any()
                                    }
                                    _ => "Send Message ➤".into_any(),
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One line of contact details. An empty `href` renders plain text.
#[component]
fn ContactRow(glyph: &'static str, label: &'static str, href: String, text: &'static str) -> impl IntoView {
    let body = if href.is_empty() {
        view! { <span class="text-lg font-medium text-gray-900 dark:text-white">{text}</span> }.into_any()
    } else {
        view! {
            <a href=href class="text-lg font-medium text-gray-900 dark:text-white hover:text-purple-600 transition-colors">
                {text}
            </a>
        }
            .into_any()
    };
    view! {
        <div class="flex items-center gap-4 p-5 bg-gray-50 dark:bg-gray-800 border-2 border-gray-200 dark:border-gray-700 rounded-2xl">
            <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-purple-500 to-blue-500 text-white text-xl flex items-center justify-center">
                {glyph}
            </div>
            <div>
                <div class="text-sm text-gray-500 dark:text-gray-400">{label}</div>
                {body}
            </div>
        </div>
    }
}
