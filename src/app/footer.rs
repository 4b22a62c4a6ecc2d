use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::app::icons::{Icon, IconKind};
use crate::app::MONOGRAM;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <footer class="relative bg-gray-900/50 border-t border-gray-800/50 overflow-hidden">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/2 left-1/4 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/2 right-1/4 w-96 h-96 bg-pink-500/5 rounded-full blur-3xl animate-pulse"></div>
            </div>
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent"></div>

            <div class="container mx-auto px-6 py-16 relative z-10">
                <div class="flex flex-col items-center justify-center text-center space-y-8">
                    <div class="flex items-center space-x-4">
                        <div class="relative w-16 h-16 bg-gradient-to-br from-purple-500 via-pink-500 to-cyan-500 rounded-2xl flex items-center justify-center overflow-hidden">
                            <div class="absolute inset-0 bg-gradient-to-br from-purple-600 via-pink-600 to-cyan-600 animate-spin-slow"></div>
                            <div class="relative z-10 flex items-center justify-center">
                                <div class="text-white font-bold text-2xl font-jetbrains">{MONOGRAM}</div>
                                <div class="absolute top-1 right-1 text-white/80">
                                    <Icon kind=IconKind::Sparkles size=10 />
                                </div>
                            </div>
                            <div class="absolute inset-0 bg-gradient-to-br from-purple-500 via-pink-500 to-cyan-500 rounded-2xl blur-xl opacity-50 animate-pulse"></div>
                        </div>
                        <div class="text-left">
                            <h3 class="text-2xl font-bold text-white">"Sathish Dusharla"</h3>
                            <p class="text-gray-400 flex items-center space-x-2">
                                <Icon kind=IconKind::Code size=16 />
                                <span>"Full Stack Developer"</span>
                            </p>
                        </div>
                    </div>

                    <p class="text-gray-400 text-lg max-w-2xl leading-relaxed">
                        "Building the future with code, one innovation at a time. Passionate about creating solutions that make a difference."
                    </p>

                    <button
                        on:click=scroll_to_top
                        class="group flex items-center space-x-2 px-6 py-3 bg-gradient-to-r from-purple-500/10 to-pink-500/10 border border-purple-500/20 rounded-full text-purple-400 hover:border-purple-500/40 hover:scale-105 transition-all duration-300"
                    >
                        <Icon
                            kind=IconKind::ArrowUp
                            size=16
                            class="group-hover:-translate-y-1 transition-transform duration-200"
                        />
                        <span class="font-medium">"Back to Top"</span>
                    </button>

                    <div class="pt-8 border-t border-gray-800/50 w-full">
                        <p class="text-gray-500 text-sm">
                            {format!("© {year} Sathish Dusharla. Crafted with passion and precision.")}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
