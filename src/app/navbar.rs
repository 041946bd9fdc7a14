use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::SITE;
use crate::content::{NavItem, Section, NAV_ITEMS, PROFILE};
use crate::nav::{active_section, spy_line, NavState};

use super::scroll::{scroll_to_section, section_bounds};
use super::theme::use_theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new(&SITE));
    let (active, set_active) = signal(Some(Section::Home));
    let (_, scroll_y) = use_window_scroll();
    let theme = use_theme();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let mut next = nav.get_untracked();
        next.on_scroll(y);
        if next != nav.get_untracked() {
            nav.set(next);
        }
        let spied = active_section(&section_bounds(), spy_line(&SITE));
        if spied != active.get_untracked() {
            set_active.set(spied);
        }
    });

    let scrolled = move || nav.with(NavState::is_scrolled);
    let menu_open = move || nav.with(NavState::is_menu_open);

    let go = move |item: &'static NavItem| {
        if let Some(req) = nav.try_update(|n| n.select(item)) {
            scroll_to_section(req.target, req.offset);
        }
    };

    let nav_link = move |item: &'static NavItem, mobile: bool| {
        let is_active = move || active.get() == Some(item.target);
        let class = move || {
            let base = if mobile {
                "block py-3 px-4 rounded-xl transition-all duration-300 text-lg font-medium hover:text-purple-600 hover:bg-gray-50"
            } else {
                "font-medium transition-colors duration-300 cursor-pointer relative group"
            };
            let tone = match (mobile, is_active(), scrolled()) {
                (_, true, _) => "text-purple-600",
                (true, false, _) | (false, false, true) => "text-gray-700 dark:text-gray-200",
                (false, false, false) => "text-white hover:text-purple-200",
            };
            format!("{base} {tone}")
        };
        view! {
            <li>
                <a
                    href=format!("#{}", item.target.anchor())
                    class=class
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(item);
                    }
                >
                    {item.label}
                    {(!mobile)
                        .then(|| {
                            view! {
                                <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-purple-600 group-hover:w-full transition-all duration-300 rounded-full"></span>
                            }
                        })}
                </a>
            </li>
        }
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 animate-drop-in {}",
                if scrolled() {
                    "bg-white/90 dark:bg-gray-900/90 backdrop-blur-md border-b border-gray-200 dark:border-gray-700 py-3 shadow-soft"
                } else {
                    "bg-transparent py-5"
                },
            )
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a
                    href="#home"
                    class="flex items-center space-x-3 cursor-pointer group"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(Section::Home, 0.0);
                    }
                >
                    <div class="bg-gradient-to-br from-purple-500 to-purple-600 p-3 rounded-2xl shadow-medium text-white font-mono font-bold group-hover:rotate-[360deg] group-hover:scale-110 transition-transform duration-500">
                        "</>"
                    </div>
                    <span class=move || {
                        format!(
                            "font-display font-bold text-xl group-hover:text-purple-600 transition-colors duration-300 {}",
                            if scrolled() { "text-gray-900 dark:text-white" } else { "text-white" },
                        )
                    }>
                        {PROFILE.first_name}
                        <span class="text-purple-600">{PROFILE.last_name}</span>
                    </span>
                </a>

                <nav class="hidden md:flex items-center space-x-8">
                    <ul class="flex space-x-8">
                        {NAV_ITEMS.iter().map(|item| nav_link(item, false)).collect_view()}
                    </ul>
                    <button
                        class="p-2 rounded-xl border border-white/20 hover:scale-110 transition-transform duration-300"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || theme.theme.get().glyph()}
                    </button>
                </nav>

                <div class="md:hidden flex items-center gap-2">
                    <button
                        class="p-3 rounded-2xl transition-all duration-300 shadow-soft"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || theme.theme.get().glyph()}
                    </button>
                    <button
                        class=move || {
                            format!(
                                "p-3 rounded-2xl transition-all duration-300 shadow-soft hover:scale-110 active:scale-95 {}",
                                if scrolled() {
                                    "bg-white border border-gray-200 hover:bg-gray-50 text-gray-900"
                                } else {
                                    "bg-white/10 backdrop-blur-sm border border-white/20 hover:bg-white/20 text-white"
                                },
                            )
                        }
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=menu_open>
                    <div class="absolute top-full left-0 right-0 bg-white/95 dark:bg-gray-900/95 backdrop-blur-md border-b border-gray-200 md:hidden shadow-soft animate-rise-in">
                        <ul class="flex flex-col p-4 space-y-2">
                            {NAV_ITEMS.iter().map(|item| nav_link(item, true)).collect_view()}
                        </ul>
                    </div>
                </Show>
            </div>
        </header>
    }
}
