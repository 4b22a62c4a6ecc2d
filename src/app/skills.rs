use leptos::prelude::*;

use crate::app::icons::{Icon, IconKind};

struct Category {
    title: &'static str,
    icon: IconKind,
    skills: &'static [&'static str],
    color: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category {
        title: "Frontend",
        icon: IconKind::Globe,
        skills: &["React", "TypeScript", "JavaScript", "HTML5", "CSS3", "Tailwind CSS"],
        color: "from-blue-500 to-cyan-500",
    },
    Category {
        title: "Backend",
        icon: IconKind::Terminal,
        skills: &["Python", "Java", "Go", "Node.js", "Django", "Express.js"],
        color: "from-green-500 to-emerald-500",
    },
    Category {
        title: "Database",
        icon: IconKind::Database,
        skills: &["MySQL", "MongoDB", "Oracle SQL", "PostgreSQL"],
        color: "from-purple-500 to-violet-500",
    },
    Category {
        title: "Cloud & DevOps",
        icon: IconKind::Cloud,
        skills: &["AWS", "Docker", "CI/CD", "Linux", "Shell Scripting"],
        color: "from-orange-500 to-red-500",
    },
    Category {
        title: "Programming",
        icon: IconKind::Code,
        skills: &["Python", "Java", "C++", "C", "Go", "JavaScript"],
        color: "from-pink-500 to-rose-500",
    },
    Category {
        title: "Tools & Others",
        icon: IconKind::Cpu,
        skills: &["Git", "VS Code", "IntelliJ IDEA", "Postman", "Figma"],
        color: "from-indigo-500 to-purple-500",
    },
];

const STATS: &[(&str, &str)] = &[
    ("15+", "Technologies"),
    ("3+", "Years Learning"),
    ("10+", "Projects Built"),
    ("100%", "Passion"),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden px-2 sm:px-4">
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent"></div>

            <div class="w-full">
                <div class="max-w-2xl sm:max-w-3xl xl:max-w-4xl mx-auto px-2 sm:px-4 xl:px-0 mt-10 sm:mt-12">
                    <div class="text-center mb-8 sm:mb-12">
                        <h2 class="text-2xl xs:text-3xl md:text-5xl font-extrabold mb-2 sm:mb-4 tracking-tight">
                            <span class="text-gray-300">"Developer "</span>
                            <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                                "Arsenal"
                            </span>
                        </h2>
                        <p class="text-sm xs:text-base md:text-lg text-gray-400 max-w-2xl mx-auto font-light">
                            "A comprehensive toolkit of technologies and frameworks I use to build amazing digital experiences."
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class="group relative">
                                        <div class=format!(
                                            "absolute inset-0 bg-gradient-to-r {} rounded-2xl blur-xl opacity-20 group-hover:opacity-30 transition-opacity duration-300",
                                            category.color,
                                        )></div>
                                        <div class="relative bg-gray-800/50 backdrop-blur-sm border border-gray-700 rounded-2xl p-4 sm:p-5 h-full group-hover:border-gray-600 transition-all duration-300">
                                            <div class="flex items-center mb-4 sm:mb-5">
                                                <div class=format!(
                                                    "w-9 h-9 sm:w-10 sm:h-10 rounded-xl bg-gradient-to-r {} flex items-center justify-center mr-2 sm:mr-3",
                                                    category.color,
                                                )>
                                                    <Icon kind=category.icon size=20 class="text-white" />
                                                </div>
                                                <h3 class="text-base sm:text-lg font-semibold text-white">
                                                    {category.title}
                                                </h3>
                                            </div>

                                            <div class="flex flex-wrap gap-2">
                                                {category
                                                    .skills
                                                    .iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <span class="px-2 py-0.5 bg-gray-700/50 border border-gray-600 rounded-full text-xs text-gray-300 hover:text-white hover:border-gray-500 transition-all duration-200 cursor-default">
                                                                {*skill}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-10 sm:mt-16 text-center">
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 sm:gap-8">
                            {STATS
                                .iter()
                                .map(|(number, label)| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-xl xs:text-2xl md:text-3xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent mb-1">
                                                {*number}
                                            </div>
                                            <div class="text-gray-400 text-xs md:text-sm">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
