use leptos::prelude::*;

use crate::app::icons::{Icon, IconKind};

struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    gradient: &'static str,
    live: &'static str,
    github: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "BlockvoteX",
        category: "Decentralized Platform",
        description: "A secure and transparent decentralized voting system built to redefine how organizations conduct elections. Features blockchain technology for tamper-proof governance with admin dashboard and real-time results.",
        tech: &["React", "Solidity", "Web3.js", "Node.js", "MongoDB"],
        gradient: "from-blue-500 to-purple-600",
        live: "https://blockvotex.netlify.app/",
        github: "https://github.com/sathishdusharla/BlockvoteX.git",
    },
    Project {
        title: "NavSight",
        category: "AI-Powered Indoor Navigation",
        description: "An AI-powered indoor navigation solution designed to empower visually impaired individuals with real-time voice guidance and obstacle recognition using computer vision and machine learning.",
        tech: &["Python", "OpenCV", "Django", "AI", "Computer Vision"],
        gradient: "from-green-500 to-teal-600",
        live: "https://www.jetir.org/view?paper=JETIR2505010",
        github: "https://github.com/sathishdusharla/NavSight.git",
    },
    Project {
        title: "StegaVault",
        category: "Steganography Security System",
        description: "A steganography-based secure communication system that leverages DCT algorithm to embed encrypted messages within digital images for undetectable transmission of sensitive information.",
        tech: &["Python", "Django", "DCT Algorithm", "Cryptography"],
        gradient: "from-purple-500 to-pink-600",
        live: "https://github.com/sathishdusharla/StegaVault.git",
        github: "https://github.com/sathishdusharla/StegaVault.git",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 z-0">
                <div class="absolute inset-0 bg-gradient-to-br from-black/80 via-purple-950/60 to-black/80"></div>
                <div class="absolute inset-0 bg-black/70"></div>
                <div class="absolute inset-0 bg-gradient-to-t from-transparent via-black/5 to-black/15"></div>
            </div>

            <div class="absolute inset-0 opacity-15 pointer-events-none z-10">
                <div
                    class="absolute inset-0 backdrop-blur-[1px] animate-grid-drift"
                    style="background-image: linear-gradient(rgba(168, 85, 247, 0.15) 1px, transparent 1px), linear-gradient(90deg, rgba(168, 85, 247, 0.15) 1px, transparent 1px); background-size: 40px 40px; filter: drop-shadow(0 0 10px rgba(168, 85, 247, 0.3));"
                ></div>
            </div>

            <div class="w-full z-30 relative">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 mt-8 mb-12">
                    <div class="text-center mb-8 sm:mb-12">
                        <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-extrabold mb-2 sm:mb-4 tracking-tight drop-shadow-2xl">
                            <span class="text-gray-100 drop-shadow-lg">"Featured "</span>
                            <span
                                class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent drop-shadow-lg"
                                style="filter: drop-shadow(0 0 20px rgba(168, 85, 247, 0.5));"
                            >
                                "Projects"
                            </span>
                        </h2>
                        <p class="text-sm sm:text-base md:text-lg text-gray-200 max-w-xl mx-auto font-light drop-shadow-lg">
                            "Explore my latest work showcasing innovative solutions and cutting-edge technologies."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-1 gap-6 lg:gap-8">
                        {PROJECTS.iter().map(project_card).collect_view()}
                    </div>

                    <div class="text-center mt-8">
                        <a
                            href="https://github.com/sathishdusharla"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block px-6 py-2 border-2 border-purple-400/60 rounded-full text-purple-200 font-semibold text-sm hover:bg-purple-500 hover:text-white transition-all duration-300 hover:scale-105 active:scale-95 backdrop-blur-md shadow-lg"
                        >
                            "View All Projects"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

// Art panel in place of a screenshot: the project gradient, a faint grid and
// an oversized initial.
fn project_card(project: &'static Project) -> impl IntoView {
    let initial = project.title.chars().next().unwrap_or('\u{2022}');

    view! {
        <div class="group relative">
            <div class=format!(
                "absolute inset-0 bg-gradient-to-r {} rounded-2xl blur-2xl opacity-20 group-hover:opacity-30 transition-opacity duration-300",
                project.gradient,
            )></div>

            <div class="relative bg-black/40 backdrop-blur-md border border-gray-400/30 rounded-2xl overflow-hidden group-hover:border-gray-300/40 transition-all duration-300 shadow-2xl">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-0">
                    <div class="relative h-48 sm:h-56 lg:h-auto overflow-hidden">
                        <div class=format!(
                            "absolute inset-0 bg-gradient-to-br {} transition-transform duration-300 group-hover:scale-105",
                            project.gradient,
                        )></div>
                        <div
                            class="absolute inset-0 opacity-20"
                            style="background-image: linear-gradient(rgba(255, 255, 255, 0.25) 1px, transparent 1px), linear-gradient(90deg, rgba(255, 255, 255, 0.25) 1px, transparent 1px); background-size: 40px 40px;"
                        ></div>
                        <div class="absolute inset-0 flex items-center justify-center">
                            <span class="text-6xl sm:text-7xl font-bold text-white/25 font-jetbrains select-none">
                                {initial}
                            </span>
                        </div>

                        <div class="absolute top-4 left-4 w-10 h-10 sm:w-12 sm:h-12 rounded-xl bg-black/20 flex items-center justify-center shadow-lg border border-white/20 backdrop-blur-md">
                            <span class="text-white font-bold text-base sm:text-lg font-jetbrains">{initial}</span>
                        </div>

                        <div class="absolute inset-0 bg-black/40 flex items-center justify-center space-x-3 lg:opacity-0 lg:group-hover:opacity-100 transition-opacity duration-300">
                            <a
                                href=project.live
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-8 h-8 sm:w-9 sm:h-9 bg-black/20 backdrop-blur-md rounded-full flex items-center justify-center text-white hover:bg-black/30 transition-all duration-200 hover:scale-110 active:scale-95 shadow-lg"
                                aria-label="Open live project"
                            >
                                <Icon kind=IconKind::Eye size=14 />
                            </a>
                            <a
                                href=project.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-8 h-8 sm:w-9 sm:h-9 bg-black/20 backdrop-blur-md rounded-full flex items-center justify-center text-white hover:bg-black/30 transition-all duration-200 hover:scale-110 active:scale-95 shadow-lg"
                                aria-label="Open source repository"
                            >
                                <Icon kind=IconKind::Github size=14 />
                            </a>
                        </div>
                    </div>

                    <div class="p-4 sm:p-5 lg:p-7 flex flex-col justify-center">
                        <div class="mb-2">
                            <span class=format!(
                                "inline-block px-2 py-0.5 text-xs font-semibold rounded-full bg-gradient-to-r {} text-white shadow-lg drop-shadow-sm",
                                project.gradient,
                            )>{project.category}</span>
                        </div>

                        <h3 class="text-base sm:text-lg md:text-xl font-bold text-gray-100 mb-2 group-hover:text-transparent group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-pink-400 group-hover:bg-clip-text transition-all duration-300 drop-shadow-md">
                            {project.title}
                        </h3>

                        <p class="text-gray-100 text-xs sm:text-sm md:text-base leading-relaxed mb-3 drop-shadow-sm">
                            {project.description}
                        </p>

                        <div class="flex flex-wrap gap-1 mb-4">
                            {project
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-2 py-0.5 bg-black/20 border border-gray-400/30 rounded-full text-xs text-gray-200 hover:text-white hover:border-gray-300/50 transition-all duration-200 backdrop-blur-sm shadow-lg">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex space-x-2">
                            <a
                                href=project.live
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-2 px-3 sm:px-4 py-2 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full text-white font-semibold text-xs hover:from-purple-700 hover:to-pink-700 transition-all duration-300 hover:scale-105 active:scale-95 shadow-2xl backdrop-blur-md"
                            >
                                <Icon kind=IconKind::Eye size=12 />
                                <span>"View"</span>
                            </a>
                            <a
                                href=project.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-2 px-3 sm:px-4 py-2 border border-gray-400/50 rounded-full text-gray-100 font-semibold text-xs hover:border-gray-300/70 hover:text-white transition-all duration-300 hover:scale-105 active:scale-95 backdrop-blur-md shadow-lg"
                            >
                                <Icon kind=IconKind::Github size=12 />
                                <span>"Code"</span>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
