use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::SITE;

use super::scroll::scroll_to_y;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let visible = Memo::new(move |_| y.get() > SITE.scroll_top_visible_px);

    view! {
        <button
            class=move || {
                format!(
                    "fixed bottom-8 right-8 z-40 w-14 h-14 rounded-2xl bg-gradient-to-br from-purple-500 to-blue-500 text-white text-2xl shadow-lg hover:scale-110 transition-all duration-300 {}",
                    if visible.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-4 pointer-events-none"
                    },
                )
            }
            aria-label="Scroll to top"
            aria-hidden=move || (!visible.get()).to_string()
            on:click=move |_| scroll_to_y(0.0)
        >
            "↑"
        </button>
    }
}
