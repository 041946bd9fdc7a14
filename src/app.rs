mod about;
mod achievements;
mod certifications;
mod contact;
mod experience;
mod footer;
mod hero;
mod loading;
mod navbar;
mod particles;
mod projects;
mod scroll;
mod scroll_to_top;
mod section;
mod skills;
mod theme;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SITE;
use crate::content::{Section, PROFILE};
use crate::nav::section_request;

use about::About;
use achievements::Achievements;
use certifications::Certifications;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use loading::LoadingScreen;
use navbar::Navbar;
use projects::Projects;
use scroll::scroll_to_section;
use scroll_to_top::ScrollToTop;
use skills::Skills;
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{} | {}", PROFILE.full_name, PROFILE.tagline) />
        <Meta name="description" content=PROFILE.intro />
        <Meta name="build-time" content=env!("BUILD_TIME") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio. Shows the loading screen for a fixed time, then
/// mounts every section at once.
#[component]
fn HomePage() -> impl IntoView {
    let loading = RwSignal::new(true);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| loading.set(false), SITE.loading_ms as f64);
    // effects only run in the browser, so the server always renders the gate
    Effect::new(move |_| start(()));

    let hash = use_location().hash;
    Effect::new(move |_| {
        if loading.get() {
            return;
        }
        let fragment = hash.get_untracked();
        if fragment.is_empty() {
            return;
        }
        match fragment.parse::<Section>() {
            Ok(section) => {
                let req = section_request(section, &SITE);
                // sections mount in this same tick
                request_animation_frame(move || scroll_to_section(req.target, req.offset));
            }
            Err(err) => log::warn!("ignoring URL fragment: {err}"),
        }
    });

    view! {
        <ThemeProvider>
            <AnimatedShow
                when=loading
                show_class="animate-fade-in"
                hide_class="animate-fade-out"
                hide_delay=Duration::from_millis(SITE.loading_fade_ms)
            >
                <LoadingScreen />
            </AnimatedShow>
            <Show when=move || !loading.get()>
                <div class="min-h-screen bg-white dark:bg-gray-900 transition-colors duration-300">
                    <Navbar />
                    <main>
                        <Hero />
                        <About />
                        <Skills />
                        <Projects />
                        <Certifications />
                        <Experience />
                        <Achievements />
                        <Contact />
                    </main>
                    <Footer />
                    <ScrollToTop />
                </div>
            </Show>
        </ThemeProvider>
    }
}
