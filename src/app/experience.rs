use leptos::prelude::*;

use crate::app::icons::{Icon, IconKind};

struct Role {
    company: &'static str,
    position: &'static str,
    duration: &'static str,
    location: &'static str,
    kind: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
    technologies: &'static [&'static str],
    color: &'static str,
}

const ROLES: &[Role] = &[
    Role {
        company: "Accelchain",
        position: "Blockchain Development Intern",
        duration: "Nov 2024 \u{2013} Jan 2025",
        location: "Remote",
        kind: "Internship",
        description: "Built AuctionX, a decentralized auction website leveraging blockchain technology. Led smart contract development, deployed secure workflows for real-time bids, and collaborated with a cross-functional team focused on security and scalability.",
        achievements: &[
            "Developed AuctionX, a decentralized auction website using Solidity and blockchain",
            "Deployed secure smart contracts and tested real-time bidding workflows",
            "Collaborated in a cross-functional team focused on security and scalability",
        ],
        technologies: &["Solidity", "Web3.js", "React", "Node.js", "Blockchain"],
        color: "from-blue-500 to-cyan-500",
    },
    Role {
        company: "Blockchain Club",
        position: "Design Team Lead",
        duration: "2024 - Present",
        location: "Anurag University",
        kind: "Leadership",
        description: "Leading the design team for university's blockchain club. Responsible for creating visual content, managing design projects, and mentoring team members.",
        achievements: &[
            "Led a team of 8 designers",
            "Increased club engagement by 150%",
            "Organized 5+ blockchain workshops",
        ],
        technologies: &["Figma", "Adobe Creative Suite", "UI/UX Design", "Branding"],
        color: "from-purple-500 to-pink-500",
    },
];

#[component]
pub fn Experience() -> impl IntoView {
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
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 mt-8 mb-8 relative z-10 w-full">
                    <div class="text-center mb-8 sm:mb-10">
                        <div class="inline-flex items-center space-x-2 bg-gradient-to-r from-purple-500/25 to-pink-500/25 border border-purple-400/40 rounded-full px-4 py-1 mb-3 backdrop-blur-md shadow-lg">
                            <Icon kind=IconKind::TrendingUp size=14 class="text-purple-400" />
                            <span class="text-purple-200 text-xs font-medium drop-shadow-sm">
                                "Professional Journey"
                            </span>
                        </div>

                        <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-extrabold mb-2 drop-shadow-2xl">
                            <span class="text-gray-100 drop-shadow-lg">"Work "</span>
                            <span
                                class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent drop-shadow-lg"
                                style="filter: drop-shadow(0 0 20px rgba(168, 85, 247, 0.5));"
                            >
                                "Experience"
                            </span>
                        </h2>
                        <p class="text-sm sm:text-base md:text-lg text-gray-200 max-w-xl mx-auto font-light drop-shadow-lg">
                            "My professional journey through internships, leadership roles, and hands-on experience in cutting-edge technologies."
                        </p>
                    </div>

                    <div class="flex flex-col gap-4 sm:gap-6 lg:gap-8">
                        {ROLES
                            .iter()
                            .enumerate()
                            .map(|(index, role)| role_card(role, index < ROLES.len() - 1))
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn role_card(role: &'static Role, connect_below: bool) -> impl IntoView {
    let initial = role.company.chars().next().unwrap_or('\u{2022}');

    view! {
        <div class="group relative">
            {connect_below
                .then(|| {
                    view! {
                        <div class="absolute left-6 sm:left-8 top-16 w-0.5 h-16 sm:h-20 bg-gradient-to-b from-purple-500/50 to-transparent"></div>
                    }
                })}

            <div class="relative bg-black/40 backdrop-blur-md border border-gray-400/30 rounded-2xl p-4 sm:p-5 pl-16 sm:pl-20 hover:border-gray-300/40 transition-all duration-300 shadow-2xl">
                <div class="absolute left-3 sm:left-4 top-5 sm:top-6 w-10 h-10 sm:w-12 sm:h-12 rounded-full bg-white flex items-center justify-center shadow-lg border-2 border-white overflow-hidden">
                    <span class="text-gray-900 font-bold text-base sm:text-lg font-jetbrains">{initial}</span>
                </div>

                <div class=format!(
                    "absolute inset-0 bg-gradient-to-r {} rounded-2xl blur-xl opacity-0 group-hover:opacity-20 transition-opacity duration-300",
                    role.color,
                )></div>

                <div class="relative z-10">
                    <div class="flex flex-col lg:flex-row lg:items-start lg:justify-between mb-3">
                        <div class="flex items-start space-x-3">
                            <div class=format!(
                                "w-3 h-3 rounded-full bg-gradient-to-br {} mt-1 flex-shrink-0 shadow-lg",
                                role.color,
                            )></div>

                            <div class="flex-1">
                                <div class="flex flex-col sm:flex-row sm:items-center gap-2 mb-1">
                                    <h3 class="text-base sm:text-lg font-bold text-gray-100 group-hover:text-transparent group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-pink-400 group-hover:bg-clip-text transition-all duration-300 drop-shadow-md">
                                        {role.position}
                                    </h3>
                                    <span class=format!(
                                        "px-2 py-0.5 text-xs font-semibold rounded-full bg-gradient-to-r {} text-white shadow-lg w-fit",
                                        role.color,
                                    )>{role.kind}</span>
                                </div>

                                <div class="flex flex-col sm:flex-row sm:items-center gap-1 sm:gap-3 text-gray-200 mb-2 text-sm">
                                    <div class="flex items-center gap-1">
                                        <Icon kind=IconKind::Award size=12 class="drop-shadow-sm" />
                                        <span class="font-medium text-purple-200 drop-shadow-sm">{role.company}</span>
                                    </div>
                                    <div class="flex items-center gap-1">
                                        <Icon kind=IconKind::Calendar size=12 class="drop-shadow-sm" />
                                        <span class="drop-shadow-sm">{role.duration}</span>
                                    </div>
                                    <div class="flex items-center gap-1">
                                        <Icon kind=IconKind::MapPin size=12 class="drop-shadow-sm" />
                                        <span class="drop-shadow-sm">{role.location}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <p class="text-gray-100 text-xs sm:text-sm leading-relaxed mb-3 drop-shadow-sm">
                        {role.description}
                    </p>

                    <div class="mb-3">
                        <h4 class="text-sm font-semibold text-gray-100 mb-2 drop-shadow-sm">"Key Achievements"</h4>
                        <ul class="space-y-1">
                            {role
                                .achievements
                                .iter()
                                .map(|achievement| {
                                    view! {
                                        <li class="flex items-start gap-2 text-gray-100 text-xs sm:text-sm">
                                            <div class=format!(
                                                "w-1.5 h-1.5 rounded-full bg-gradient-to-r {} mt-1 flex-shrink-0 shadow-sm",
                                                role.color,
                                            )></div>
                                            <span class="drop-shadow-sm">{*achievement}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-gray-100 mb-2 drop-shadow-sm">"Technologies Used"</h4>
                        <div class="flex flex-wrap gap-1.5">
                            {role
                                .technologies
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
                    </div>
                </div>
            </div>
        </div>
    }
}
