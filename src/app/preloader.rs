use leptos::prelude::*;

use crate::app::icons::{Icon, IconKind};
use crate::app::MONOGRAM;

// Placement is derived from the index so server and client render the same
// particle field.
fn particle_style(index: usize) -> String {
    let left = (index * 67) % 100;
    let top = (index * 43) % 100;
    let duration = 2.0 + ((index * 31) % 30) as f64 / 10.0;
    let delay = ((index * 53) % 20) as f64 / 10.0;
    format!("left: {left}%; top: {top}%; animation-duration: {duration}s; animation-delay: {delay}s;")
}

/// Opaque splash screen shown while the intro timer runs. The routed page
/// stays mounted underneath, so this is decoration only.
#[component]
pub fn Preloader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-gray-900 flex items-center justify-center z-50 overflow-hidden">
            <div class="absolute inset-0 opacity-10">
                <div
                    class="absolute inset-0"
                    style="background-image: linear-gradient(rgba(168, 85, 247, 0.3) 1px, transparent 1px), linear-gradient(90deg, rgba(168, 85, 247, 0.3) 1px, transparent 1px); background-size: 50px 50px;"
                ></div>
            </div>

            {(0..15)
                .map(|index| {
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-purple-400 rounded-full animate-twinkle"
                            style=particle_style(index)
                        ></div>
                    }
                })
                .collect_view()}

            <div class="relative flex flex-col items-center">
                <div class="relative mb-8">
                    <div class="relative w-32 h-32 bg-gradient-to-br from-purple-500 via-pink-500 to-cyan-500 rounded-2xl flex items-center justify-center overflow-hidden">
                        <div class="absolute inset-0 bg-gradient-to-br from-purple-600 via-pink-600 to-cyan-600 animate-spin-slow"></div>
                        <div class="relative z-10 flex items-center justify-center">
                            <div class="text-white font-bold text-5xl font-jetbrains">{MONOGRAM}</div>
                            <div class="absolute top-2 right-2 text-white/80">
                                <Icon kind=IconKind::Sparkles size=18 />
                            </div>
                        </div>
                        <div class="absolute inset-0 bg-gradient-to-br from-purple-500 via-pink-500 to-cyan-500 rounded-2xl blur-xl opacity-50 animate-pulse"></div>
                    </div>
                </div>

                <div class="text-center">
                    <h2 class="text-2xl font-bold text-white mb-2 animate-pulse">"Sathish Dusharla"</h2>
                    <p class="text-purple-400 font-medium animate-pulse">"Full Stack Developer"</p>
                </div>

                <div class="flex space-x-2 mt-8">
                    {(0..3)
                        .map(|index| {
                            view! {
                                <div
                                    class="w-3 h-3 bg-gradient-to-r from-purple-400 to-pink-400 rounded-full animate-loader-dot"
                                    style=format!("animation-delay: {}ms;", index * 200)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="w-64 h-1 bg-gray-800 rounded-full mt-8 overflow-hidden">
                    <div class="h-full bg-gradient-to-r from-purple-500 to-pink-500 rounded-full preloader-progress"></div>
                </div>
            </div>
        </div>
    }
}
