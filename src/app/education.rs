use leptos::prelude::*;

use crate::app::icons::{Icon, IconKind};

struct Entry {
    degree: &'static str,
    institution: &'static str,
    institution_url: &'static str,
    duration: &'static str,
    score: &'static str,
    description: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        degree: "B.Tech in Computer Science and Engineering",
        institution: "Anurag University",
        institution_url: "https://anurag.edu.in/",
        duration: "2023 \u{2013} Present",
        score: "9.15 CGPA (up to Semester 3)",
        description: "Gaining a strong foundation in computer science and engineering by building real-world projects, mastering algorithms, and developing scalable systems. Actively involved in coding, research, and technical communities.",
    },
    Entry {
        degree: "Board of Intermediate Education (MPC)",
        institution: "Saigouthami Junior College",
        institution_url: "https://www.saigouthamijuniorcollege.com/",
        duration: "2023",
        score: "97.2%",
        description: "Focused on Mathematics, Physics, and Chemistry, developing analytical thinking and a passion for problem-solving.",
    },
    Entry {
        degree: "Board of Secondary Education (X, SSC)",
        institution: "Montessori High School",
        institution_url: "https://montessorihighschool.com/",
        duration: "2021",
        score: "100.0%",
        description: "Sparked my passion for technology and innovation, nurturing curiosity, logical thinking, and a lifelong love for learning.",
    },
];

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden px-2 sm:px-4">
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent"></div>

            <div class="w-full">
                <div class="max-w-2xl sm:max-w-4xl mx-auto px-2 sm:px-8 xl:px-0 mt-10 sm:mt-16 mb-10 sm:mb-20">
                    <div class="text-center mb-8 sm:mb-12">
                        <h2 class="text-2xl xs:text-3xl md:text-5xl font-extrabold mb-2 sm:mb-4 tracking-tight">
                            <span class="text-gray-200">"My "</span>
                            <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent drop-shadow-lg">
                                "Education"
                            </span>
                        </h2>
                        <p class="text-sm xs:text-base md:text-lg text-gray-400 font-light max-w-2xl mx-auto">
                            "My academic journey and milestones that shaped my technical foundation."
                        </p>
                    </div>
                    <div class="flex flex-col gap-6 sm:gap-8">
                        {ENTRIES
                            .iter()
                            .map(|entry| {
                                let initial = entry.institution.chars().next().unwrap_or('\u{2022}');
                                view! {
                                    <div class="relative group bg-gray-800/70 backdrop-blur-md border border-gray-700 rounded-2xl p-4 sm:p-6 flex flex-col sm:flex-row items-center gap-4 sm:gap-6 shadow-lg hover:shadow-purple-400/10 transition-shadow duration-300">
                                        <div class="absolute inset-0 bg-gradient-to-r from-purple-500/20 to-pink-500/20 rounded-2xl blur-xl group-hover:blur-2xl opacity-70 pointer-events-none transition-all duration-300"></div>
                                        <div class="flex-shrink-0 z-10">
                                            <div class="w-12 h-12 xs:w-16 xs:h-16 rounded-xl bg-gradient-to-br from-purple-500/30 to-pink-500/30 border border-gray-700 shadow flex items-center justify-center text-purple-200 font-bold text-xl font-jetbrains">
                                                {initial}
                                            </div>
                                        </div>
                                        <div class="flex-1 w-full z-10">
                                            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-1">
                                                <a
                                                    href=entry.institution_url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-base xs:text-lg font-semibold text-purple-200 hover:underline flex items-center gap-1"
                                                >
                                                    {entry.degree}
                                                    <Icon
                                                        kind=IconKind::ExternalLink
                                                        size=14
                                                        class="inline-block ml-1 opacity-70"
                                                    />
                                                </a>
                                                <div class="flex flex-col sm:items-end text-right mt-2 sm:mt-0">
                                                    <span class="text-purple-300 text-xs">{entry.duration}</span>
                                                    <span class="text-purple-300 text-xs font-semibold">{entry.score}</span>
                                                </div>
                                            </div>
                                            <div class="text-purple-400 text-xs xs:text-sm mb-1">{entry.institution}</div>
                                            <div class="text-gray-300 text-xs xs:text-sm md:text-sm font-light">
                                                {entry.description}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent"></div>
        </div>
    }
}
