use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use leptos_use::{use_event_listener, use_window};

use super::icons::{Icon, IconKind};

const SOCIAL_LINKS: &[(IconKind, &str, &str, &str)] = &[
    (
        IconKind::Github,
        "https://github.com/sathishdusharla",
        "GitHub",
        "hover:text-gray-300",
    ),
    (
        IconKind::Linkedin,
        "https://linkedin.com/in/sathishdusharla",
        "LinkedIn",
        "hover:text-blue-400",
    ),
    (
        IconKind::Twitter,
        "https://x.com/thedusharla",
        "Twitter",
        "hover:text-cyan-400",
    ),
    (
        IconKind::Instagram,
        "https://instagram.com/thedusharla",
        "Instagram",
        "hover:text-pink-400",
    ),
];

/// Particle placement is derived from the index so server and client render
/// the same field.
fn particle_style(index: usize) -> String {
    let size = 2.0 + ((index * 37) % 60) as f64 / 10.0;
    let left = ((index * 61) % 100) as f64;
    let top = ((index * 83) % 100) as f64;
    let duration = 15.0 + ((index * 47) % 250) as f64 / 10.0;
    let delay = ((index * 29) % 80) as f64 / 10.0;
    format!(
        "left: {left}%; top: {top}%; width: {size}px; height: {size}px; \
         background: radial-gradient(circle, rgba(168, 85, 247, 0.8), rgba(236, 72, 153, 0.6), rgba(6, 182, 212, 0.4)); \
         box-shadow: 0 0 {glow}px rgba(168, 85, 247, 0.5); \
         animation-duration: {duration}s; animation-delay: {delay}s;",
        glow = size * 3.0,
    )
}

/// Landing view: intro badge, animated name, CTAs, social links and a radial
/// glow that follows the pointer.
#[component]
pub fn Hero() -> impl IntoView {
    let (mouse, set_mouse) = signal((0.0_f64, 0.0_f64));
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev: web_sys::MouseEvent| {
        set_mouse((ev.client_x() as f64, ev.client_y() as f64));
    });

    let scroll_to_about = move |_| {
        if let Some(anchor) = document().get_element_by_id("about") {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            anchor.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    let navigate = use_navigate();
    let view_resume = move |_| navigate("/resume", NavigateOptions::default());

    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-black/95 via-gray-950/90 to-black/95 backdrop-blur-3xl"></div>

            {(0..30)
                .map(|index| {
                    view! {
                        <div
                            class="absolute rounded-full opacity-60 animate-float"
                            style=particle_style(index)
                        ></div>
                    }
                })
                .collect_view()}

            <div
                class="fixed top-0 left-0 w-[600px] h-[600px] pointer-events-none z-0 transition-transform duration-500 ease-out"
                style=move || {
                    let (x, y) = mouse();
                    format!("transform: translate({}px, {}px);", x - 300.0, y - 300.0)
                }
            >
                <div class="w-full h-full bg-gradient-radial from-purple-500/30 via-pink-500/20 to-transparent rounded-full blur-3xl"></div>
            </div>

            <div class="max-w-3xl xl:max-w-4xl mx-auto px-4 sm:px-8 xl:px-0 z-10 relative">
                <div class="relative bg-black/40 backdrop-blur-2xl border border-white/10 rounded-3xl p-8 shadow-2xl">
                    <div class="absolute inset-0 bg-gradient-to-br from-purple-500/10 via-transparent to-pink-500/10 rounded-3xl"></div>

                    <div class="text-left relative z-10">
                        <div class="inline-flex items-center space-x-2 bg-black/60 backdrop-blur-xl border border-white/20 rounded-full px-6 py-2 mb-8 shadow-lg">
                            <span class="animate-spin-slow text-purple-400">
                                <Icon kind=IconKind::Code size=16 />
                            </span>
                            <span class="text-purple-300 text-sm font-medium">
                                "Software Engineer & Full Stack Developer"
                            </span>
                            <span class="animate-pulse text-pink-400">
                                <Icon kind=IconKind::Sparkles size=12 />
                            </span>
                        </div>

                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-extrabold mb-8 leading-tight text-left">
                            <span class="block text-gray-200 mb-2">"Hi, I'm"</span>
                            <span class="block hero-name text-5xl md:text-7xl lg:text-8xl font-extrabold">
                                "Sathish Dusharla"
                            </span>
                        </h1>

                        <div class="mb-12">
                            <div class="bg-black/30 backdrop-blur-xl border border-white/10 rounded-2xl p-6">
                                <p class="text-lg md:text-xl text-gray-300 max-w-4xl mx-0 leading-relaxed text-left">
                                    "A passionate "
                                    <span class="text-purple-400 font-semibold">
                                        "Computer Science student"
                                    </span>
                                    " crafting secure, scalable systems with "
                                    <span class="text-pink-400 font-semibold">
                                        "AI-powered solutions"
                                    </span>
                                    " and modern technologies."
                                </p>
                            </div>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4 justify-start items-center mb-12">
                            <button
                                on:click=scroll_to_about
                                class="group relative px-8 py-4 bg-gradient-to-r from-purple-600/80 to-pink-600/80 backdrop-blur-xl rounded-full text-white font-semibold overflow-hidden text-base border border-white/20 shadow-2xl hover:from-purple-700/90 hover:to-pink-700/90 transition-all duration-300"
                            >
                                <span class="relative z-10 flex items-center space-x-2">
                                    <span>"Explore My Work"</span>
                                    <Icon kind=IconKind::ArrowDown size=16 />
                                </span>
                            </button>

                            <button
                                on:click=view_resume
                                class="group px-8 py-4 bg-black/60 backdrop-blur-xl border-2 border-white/30 rounded-full text-gray-200 font-semibold hover:border-purple-500/60 hover:text-white transition-all duration-300 text-base shadow-xl"
                            >
                                <span class="flex items-center space-x-2">
                                    <span>"View Resume"</span>
                                    <Icon kind=IconKind::ArrowUp size=16 />
                                </span>
                            </button>
                        </div>

                        <div class="flex justify-start space-x-4 mb-16">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(icon, href, label, hover)| {
                                    view! {
                                        <a
                                            href=*href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=*label
                                            class=format!(
                                                "group w-12 h-12 bg-black/60 backdrop-blur-xl border border-white/20 rounded-full flex items-center justify-center text-gray-400 transition-all duration-300 {hover} shadow-lg",
                                            )
                                        >
                                            <Icon kind=*icon size=18 />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="absolute -bottom-24 left-1/2 transform -translate-x-1/2">
                    <button
                        on:click=scroll_to_about
                        class="group flex flex-col items-center space-y-3 text-gray-400 hover:text-white transition-colors duration-300"
                    >
                        <span class="text-sm font-medium">"Scroll to explore"</span>
                        <div class="w-6 h-10 bg-black/60 backdrop-blur-xl border-2 border-white/30 rounded-full flex justify-center group-hover:border-purple-500/60 transition-colors duration-300 shadow-lg">
                            <div class="w-1.5 h-4 bg-gradient-to-b from-purple-400 to-pink-400 rounded-full mt-2 animate-scroll-dot"></div>
                        </div>
                    </button>
                </div>
            </div>
        </div>
    }
}
