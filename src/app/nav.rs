use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use super::icons::{Icon, IconKind};
use super::MONOGRAM;
use crate::sections::{resolve_active, section_gradient, SectionMetrics, SECTIONS};

/// Reads anchor offsets from the live document on every query, so layout
/// shifts are picked up by the next scroll event.
struct DomAnchors;

impl SectionMetrics for DomAnchors {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        document()
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|el| el.offset_top() as f64)
    }
}

fn section_icon(id: &str) -> IconKind {
    match id {
        "about" => IconKind::User,
        "education" => IconKind::GraduationCap,
        "skills" => IconKind::Atom,
        "projects" => IconKind::Layers,
        "experience" => IconKind::Briefcase,
        "contact" => IconKind::Mail,
        _ => IconKind::Sparkles,
    }
}

/// Section rail, overlay menu and the section-colored top line.
///
/// Mounted only on the single-page route; the scroll tracker and its listener
/// go away with the component, and a fresh mount starts back at the first
/// registered section.
#[component]
pub fn Navigation() -> impl IntoView {
    let (active_section, set_active_section) = signal(SECTIONS[0].id);
    let (sidebar_open, set_sidebar_open) = signal(false);

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        // last matching section wins; above the first anchor the previous
        // value is kept
        if let Some(id) = resolve_active(&DomAnchors, SECTIONS, scroll_y.get()) {
            set_active_section(id);
        }
    });

    // no-op when the anchor is missing: the menu stays open and the active
    // section stays put
    let scroll_to_section = move |id: &'static str| {
        let Some(anchor) = document().get_element_by_id(id) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
        set_sidebar_open(false);
        set_active_section(id);
    };

    let navigate = use_navigate();
    let go_to_resume = {
        let navigate = navigate.clone();
        move |_| {
            set_sidebar_open(false);
            navigate("/resume", NavigateOptions::default());
        }
    };
    let go_to_resume_rail = move |_| {
        set_sidebar_open(false);
        navigate("/resume", NavigateOptions::default());
    };

    view! {
        <div class=move || {
            format!(
                "fixed top-0 left-0 right-0 h-[3px] z-[60] bg-gradient-to-r top-glow {}",
                section_gradient(active_section()),
            )
        }></div>

        <button
            class="fixed top-6 left-6 z-[100] flex items-center justify-center w-11 h-11 rounded-full bg-black/80 backdrop-blur-2xl md:hidden shadow-2xl border border-white/20"
            on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
            aria-label=move || {
                if sidebar_open() { "Close navigation" } else { "Open navigation" }
            }
        >
            {move || {
                if sidebar_open() {
                    Either::Left(view! { <Icon kind=IconKind::X size=28 class="text-purple-400" /> })
                } else {
                    Either::Right(
                        view! { <Icon kind=IconKind::Menu size=28 class="text-purple-400" /> },
                    )
                }
            }}
        </button>

        {move || {
            sidebar_open()
                .then(|| {
                    view! {
                        <div
                            class="fixed inset-0 z-[99] bg-black/80 backdrop-blur-xl md:hidden"
                            on:click=move |_| set_sidebar_open(false)
                        >
                            <aside
                                class="absolute left-0 top-0 h-full w-4/5 max-w-xs bg-black/90 backdrop-blur-2xl shadow-2xl flex flex-col justify-between border-r border-white/20"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <div class="flex flex-col gap-2 px-6 pt-20">
                                    {SECTIONS
                                        .iter()
                                        .map(|section| {
                                            let id = section.id;
                                            view! {
                                                <button
                                                    on:click=move |_| scroll_to_section(id)
                                                    class=move || {
                                                        let state = if active_section() == id {
                                                            "bg-gradient-to-r from-purple-500/60 to-pink-500/60 text-white border-white/30 shadow-xl"
                                                        } else {
                                                            "text-gray-300 hover:bg-white/10 border-transparent hover:border-white/20"
                                                        };
                                                        format!(
                                                            "flex items-center gap-4 py-3 px-3 rounded-xl text-lg font-medium transition-all backdrop-blur-xl border {state}",
                                                        )
                                                    }
                                                >
                                                    <Icon kind=section_icon(id) size=22 />
                                                    <span>{section.label}</span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="px-6 pb-8">
                                    <div class="border-t border-white/20 mb-4"></div>
                                    <button
                                        on:click=go_to_resume.clone()
                                        class="flex items-center gap-3 text-gray-300 hover:text-white text-lg w-full py-3 px-3 rounded-xl hover:bg-white/10 transition-all backdrop-blur-xl"
                                    >
                                        <Icon kind=IconKind::FileText size=22 />
                                        <span>"Resume"</span>
                                    </button>
                                </div>
                            </aside>
                        </div>
                    }
                })
        }}

        <nav class="hidden md:flex fixed left-0 top-1/2 -translate-y-1/2 z-50 flex-col items-center py-4 px-1 bg-black/80 backdrop-blur-2xl rounded-[2.5rem] m-2 shadow-2xl border border-white/20 w-[70px] h-[420px] lg:w-[90px] lg:h-[600px] lg:py-6 lg:px-2">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-500/10 via-transparent to-pink-500/10 rounded-[2.5rem] pointer-events-none"></div>

            <div class="mb-6 lg:mb-8 flex flex-col items-center relative z-10">
                <AnimatedLogo />
            </div>

            <div class="flex flex-col items-center gap-4 lg:gap-5 flex-1 relative z-10">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        view! {
                            <button
                                on:click=move |_| scroll_to_section(id)
                                class=move || {
                                    let state = if active_section() == id {
                                        "text-white bg-gradient-to-r from-purple-500/60 to-pink-500/60 border-white/30 rail-active-glow"
                                    } else {
                                        "text-gray-400 hover:text-white bg-white/5 border-white/10 hover:bg-white/10 hover:border-white/20"
                                    };
                                    format!(
                                        "flex items-center justify-center w-9 h-9 lg:w-10 lg:h-10 rounded-xl transition-all backdrop-blur-xl border shadow-lg {state}",
                                    )
                                }
                                aria-label=section.label
                            >
                                <Icon kind=section_icon(id) size=22 />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex flex-col items-center mt-4 lg:mt-6 w-full relative z-10">
                <div class="w-7 h-px lg:w-8 bg-white/20 my-2 lg:my-3"></div>
                <button
                    on:click=go_to_resume_rail
                    class="flex items-center justify-center w-9 h-9 lg:w-10 lg:h-10 rounded-xl transition-all text-gray-400 hover:text-white bg-white/5 border border-white/10 hover:bg-white/10 hover:border-white/20 backdrop-blur-xl shadow-lg"
                    aria-label="Resume"
                >
                    <Icon kind=IconKind::FileText size=22 />
                </button>
            </div>
        </nav>
    }
}

/// Monogram logo that smooth-scrolls back to the top of the page.
#[component]
fn AnimatedLogo() -> impl IntoView {
    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <button
            class="relative w-12 h-12 bg-gradient-to-br from-purple-500 via-pink-500 to-cyan-500 rounded-2xl flex items-center justify-center overflow-hidden cursor-pointer backdrop-blur-xl border border-white/20 shadow-2xl hover:scale-105 transition-transform"
            on:click=scroll_to_top
            aria-label="Go to top"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-purple-600 via-pink-600 to-cyan-600 animate-spin-slow"></div>
            <div class="relative z-10 flex items-center justify-center">
                <span class="text-white font-bold text-xl font-jetbrains">{MONOGRAM}</span>
                <span class="absolute -top-1 -right-2 text-white/80">
                    <Icon kind=IconKind::Sparkles size=12 />
                </span>
            </div>
        </button>
    }
}
