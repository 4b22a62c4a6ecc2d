use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::icons::{Icon, IconKind};
use super::MONOGRAM;
use crate::slides::{advance, Fragment, SlideIcon, ROTATION_INTERVAL_MS, SLIDES};

fn tab_icon(icon: SlideIcon) -> IconKind {
    match icon {
        SlideIcon::Code => IconKind::Code,
        SlideIcon::Sparkles => IconKind::Sparkles,
        SlideIcon::Users => IconKind::Users,
        SlideIcon::Lightbulb => IconKind::Lightbulb,
    }
}

fn fragment_view(fragment: &Fragment) -> impl IntoView {
    match fragment {
        Fragment::Plain(text) => EitherOf3::A(*text),
        Fragment::Accent(text) => EitherOf3::B(
            view! { <span class="bg-cyan-600/80 text-white px-1 rounded font-medium">{*text}</span> },
        ),
        Fragment::Strong(text) => EitherOf3::C(
            view! { <span class="bg-emerald-600/80 text-white px-1 rounded font-medium">{*text}</span> },
        ),
    }
}

/// Slide presenter that advances on a fixed interval for as long as the
/// section is mounted. Picking a tab only moves the index; the interval keeps
/// its own phase and is dropped with the component scope.
#[component]
pub fn About() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    let Pausable { .. } = use_interval_fn(
        move || set_active.update(|index| *index = advance(*index, SLIDES.len())),
        ROTATION_INTERVAL_MS,
    );

    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 z-0">
                <div class="absolute inset-0 bg-gradient-to-br from-black/80 via-purple-950/60 to-black/80"></div>
                <div class="absolute inset-0 bg-black/70"></div>
                <div class="absolute inset-0 bg-gradient-to-t from-transparent via-black/5 to-black/15"></div>
            </div>
            <div class="absolute inset-0 opacity-15 pointer-events-none z-10 about-grid"></div>

            <div class="w-full z-30 relative">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 mt-8 mb-8 w-full">
                    <div class="text-center mb-8 sm:mb-12">
                        <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-extrabold mb-2 sm:mb-4 tracking-tight drop-shadow-2xl">
                            <span class="text-gray-100 drop-shadow-lg">"About "</span>
                            <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent drop-shadow-lg">
                                "Me"
                            </span>
                        </h2>
                        <p class="text-sm sm:text-base md:text-lg text-gray-200 max-w-2xl mx-auto font-light drop-shadow-lg">
                            "Full Stack Developer | AI Enthusiast | Student Leader | Building for Impact"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 sm:gap-8 items-stretch w-full">
                        <div class="flex flex-col h-full">
                            <div class="bg-black/40 border border-gray-400/30 rounded-2xl p-4 sm:p-6 shadow-2xl flex flex-col h-full justify-between backdrop-blur-md">
                                <div>
                                    <div class="flex items-center gap-3 mb-3">
                                        <span class="inline-flex items-center justify-center rounded-lg bg-gradient-to-r from-purple-600 to-pink-600 text-white w-8 h-8 shadow-lg">
                                            {move || {
                                                view! { <Icon kind=tab_icon(SLIDES[active()].icon) size=18 /> }
                                            }}
                                        </span>
                                        <span class="text-lg sm:text-xl font-bold text-purple-200 drop-shadow-md">
                                            {move || SLIDES[active()].label}
                                        </span>
                                    </div>
                                    <div class="text-gray-100 text-sm sm:text-base md:text-lg leading-relaxed mb-2 text-left drop-shadow-lg">
                                        {move || {
                                            SLIDES[active()].body.iter().map(fragment_view).collect_view()
                                        }}
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="flex flex-col h-full">
                            <div class=move || {
                                format!(
                                    "relative w-full h-full rounded-2xl overflow-hidden {} shadow-2xl flex flex-col justify-between backdrop-blur-md min-h-[300px] sm:min-h-[350px]",
                                    SLIDES[active()].panel,
                                )
                            }>
                                <div class="p-4 sm:p-5 flex flex-col items-center justify-center h-full">
                                    <span class="block leading-tight text-white font-extrabold text-xl md:text-3xl mb-2 text-center drop-shadow-lg">
                                        {move || {
                                            SLIDES[active()]
                                                .motto
                                                .iter()
                                                .map(|line| view! { <span class="block">{*line}</span> })
                                                .collect_view()
                                        }}
                                    </span>
                                    <span class="absolute bottom-3 right-4 text-white font-extrabold text-xl sm:text-2xl select-none tracking-widest drop-shadow-lg">
                                        {MONOGRAM}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="flex flex-wrap justify-center gap-2 sm:gap-3 md:gap-4 mt-6 sm:mt-8">
                        {SLIDES
                            .iter()
                            .enumerate()
                            .map(|(index, slide)| {
                                view! {
                                    <button
                                        on:click=move |_| set_active(index)
                                        class=move || {
                                            let state = if active() == index {
                                                "bg-gradient-to-r from-purple-600/30 to-pink-600/30 text-purple-200 border-purple-400/50 shadow-purple-500/25"
                                            } else {
                                                "bg-black/20 text-gray-200 border-gray-400/30 hover:bg-black/30 hover:border-purple-400/40"
                                            };
                                            format!(
                                                "flex items-center gap-2 px-3 sm:px-4 md:px-5 py-2 rounded-xl text-xs sm:text-sm md:text-base font-medium border transition backdrop-blur-md shadow-lg {state}",
                                            )
                                        }
                                    >
                                        <Icon kind=tab_icon(slide.icon) size=18 />
                                        <span class="hidden sm:inline">{slide.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
