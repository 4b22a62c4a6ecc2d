use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::app::icons::{Icon, IconKind};

/// Floating button that appears once the page has scrolled past 500px and
/// smooth-scrolls back to the top.
#[component]
pub fn BackToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = move || scroll_y.get() > 500.0;

    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        {move || {
            visible()
                .then(|| {
                    view! {
                        <button
                            on:click=scroll_to_top
                            class="fixed bottom-8 right-8 z-50 w-14 h-14 bg-gradient-to-r from-purple-600/80 to-pink-600/80 backdrop-blur-2xl rounded-full flex items-center justify-center text-white shadow-2xl hover:shadow-purple-500/50 hover:scale-110 transition-all duration-300 group border border-white/20"
                            aria-label="Back to top"
                        >
                            <Icon
                                kind=IconKind::ArrowUp
                                size=22
                                class="group-hover:-translate-y-1 transition-transform duration-200"
                            />
                            <div class="absolute inset-0 bg-gradient-to-r from-purple-600/60 to-pink-600/60 rounded-full blur-2xl opacity-60 group-hover:opacity-100 transition-opacity duration-300"></div>
                        </button>
                    }
                })
        }}
    }
}
