use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex flex-col items-center justify-center bg-gray-50 dark:bg-gray-900 z-50">
            <div class="w-24 h-24 rounded-full border-t-4 border-b-4 border-purple-500 animate-spin-slow"></div>
            <div class="mt-8 font-display font-bold text-2xl text-purple-500 animate-rise-in">
                "Loading Portfolio"
            </div>
        </div>
    }
}
