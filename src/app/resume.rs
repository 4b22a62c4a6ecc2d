use chrono::{DateTime, Datelike, Utc};
use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::icons::{Icon, IconKind};

const GITHUB_URL: &str = "https://github.com/sathishdusharla";
const LINKEDIN_URL: &str = "https://linkedin.com/in/sathishdusharla";

// Bullet text with inline highlighted metrics.
enum Chunk {
    Text(&'static str),
    Metric(&'static str),
}

struct SkillGroup {
    category: &'static str,
    skills: &'static [&'static str],
    color: &'static str,
}

struct CertGroup {
    heading: &'static str,
    heading_color: &'static str,
    dot_color: &'static str,
    hover_color: &'static str,
    items: &'static [(&'static str, &'static str)],
}

struct Accomplishment {
    icon: IconKind,
    tone: &'static str,
    icon_color: &'static str,
    title_color: &'static str,
    title: &'static str,
    detail: &'static str,
}

struct RoleEntry {
    title: &'static str,
    company: &'static str,
    duration: &'static str,
    bullets: &'static [&'static [Chunk]],
}

struct ProjectEntry {
    title: &'static str,
    tech: &'static [&'static str],
    bullets: &'static [&'static [Chunk]],
    links: &'static [(IconKind, &'static str, &'static str)],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming Languages",
        skills: &["Python", "Java", "C++", "C", "JavaScript", "SQL"],
        color: "bg-blue-500/10 text-blue-300 border-blue-500/30",
    },
    SkillGroup {
        category: "Data Structures & Algorithms",
        skills: &["DSA", "Object-Oriented Design", "System Design"],
        color: "bg-red-500/10 text-red-300 border-red-500/30",
    },
    SkillGroup {
        category: "Cloud & Data Tools",
        skills: &["AWS (S3, Lambda, Glue, Redshift)", "Git", "GitHub", "Postman", "VS Code"],
        color: "bg-orange-500/10 text-orange-300 border-orange-500/30",
    },
    SkillGroup {
        category: "Web Development",
        skills: &["HTML/CSS", "React", "Flask", "Django", "MERN Stack"],
        color: "bg-emerald-500/10 text-emerald-300 border-emerald-500/30",
    },
    SkillGroup {
        category: "Databases",
        skills: &["MySQL", "MongoDB", "Oracle SQL"],
        color: "bg-purple-500/10 text-purple-300 border-purple-500/30",
    },
    SkillGroup {
        category: "AI/ML",
        skills: &["Scikit-learn", "TensorFlow", "PyTorch"],
        color: "bg-pink-500/10 text-pink-300 border-pink-500/30",
    },
    SkillGroup {
        category: "Delivery & Agile",
        skills: &["Jira", "Figma", "Agile/Scrum", "Requirements Analysis", "Client Communication"],
        color: "bg-cyan-500/10 text-cyan-300 border-cyan-500/30",
    },
];

const CERT_GROUPS: &[CertGroup] = &[
    CertGroup {
        heading: "Cloud & Data",
        heading_color: "text-cyan-400",
        dot_color: "bg-cyan-400",
        hover_color: "hover:text-cyan-300",
        items: &[
            (
                "AWS Cloud Foundations",
                "https://www.credly.com/badges/f96ffe5d-8381-4802-9a9f-055626214de9/public_url",
            ),
            (
                "AWS Data Engineering",
                "https://www.credly.com/badges/1190365c-82ab-4388-90c4-4585f00b3598/public_url",
            ),
            (
                "IBM Enterprise AI",
                "https://www.credly.com/badges/3a52679a-e523-49dd-9dd0-a4d9d2959ef4/public_url",
            ),
            (
                "IBM Enterprise Data Science",
                "https://www.credly.com/badges/7a0036ed-065f-4757-8323-8272e16df2d7/public_url",
            ),
        ],
    },
    CertGroup {
        heading: "Development",
        heading_color: "text-yellow-400",
        dot_color: "bg-yellow-400",
        hover_color: "hover:text-yellow-300",
        items: &[
            (
                "HackerRank Frontend (React)",
                "https://www.hackerrank.com/certificates/8478ff84a63a",
            ),
            (
                "HackerRank Python Programming",
                "https://www.hackerrank.com/certificates/14384f78e934",
            ),
        ],
    },
    CertGroup {
        heading: "Cybersecurity",
        heading_color: "text-pink-400",
        dot_color: "bg-pink-400",
        hover_color: "hover:text-pink-300",
        items: &[
            (
                "Cisco Intro to Cybersecurity",
                "https://www.credly.com/badges/80741553-9962-4ac7-9233-6e794b86a9b6/public_url",
            ),
            (
                "Cisco Networking Basics",
                "https://www.credly.com/badges/76a9a092-98ed-45e2-8c6f-93852437a9d4/public_url",
            ),
        ],
    },
];

const ACCOMPLISHMENTS: &[Accomplishment] = &[
    Accomplishment {
        icon: IconKind::Trophy,
        tone: "bg-emerald-500/5 border-emerald-500/20",
        icon_color: "text-emerald-400",
        title_color: "text-emerald-300",
        title: "2nd Place",
        detail: "Graph Theory Programming Camp, AlgoUniversity",
    },
    Accomplishment {
        icon: IconKind::Award,
        tone: "bg-pink-500/5 border-pink-500/20",
        icon_color: "text-pink-400",
        title_color: "text-pink-300",
        title: "Runner-up",
        detail: "Microsoft + Reskill Hackathon",
    },
    Accomplishment {
        icon: IconKind::ExternalLink,
        tone: "bg-purple-500/5 border-purple-500/20",
        icon_color: "text-purple-400",
        title_color: "text-purple-300",
        title: "Research Published",
        detail: "JETIR Journal (May 2025)",
    },
    Accomplishment {
        icon: IconKind::Briefcase,
        tone: "bg-blue-500/5 border-blue-500/20",
        icon_color: "text-blue-400",
        title_color: "text-blue-300",
        title: "Design Lead",
        detail: "Blockchain Club, Anurag University",
    },
    Accomplishment {
        icon: IconKind::Code,
        tone: "bg-yellow-500/5 border-yellow-500/20",
        icon_color: "text-yellow-400",
        title_color: "text-yellow-300",
        title: "Workshop Conductor",
        detail: "3+ workshops on AI, Blockchain, and Full-Stack Development",
    },
];

const ROLES: &[RoleEntry] = &[
    RoleEntry {
        title: "Blockchain Development Intern",
        company: "Accelchain",
        duration: "Nov 2024 \u{2013} Jan 2025",
        bullets: &[
            &[
                Chunk::Text("Led the development of "),
                Chunk::Metric("AuctionX"),
                Chunk::Text(", a decentralized auction system using Solidity"),
            ],
            &[Chunk::Text("Deployed secure smart contracts and tested workflows for real-time bids")],
            &[Chunk::Text("Worked in a cross-functional team focused on security and scalability")],
        ],
    },
    RoleEntry {
        title: "Data Engineering Virtual Intern",
        company: "AWS Academy x AICTE x Eduskills",
        duration: "Jul 2024 \u{2013} Sep 2024",
        bullets: &[
            &[Chunk::Text("Designed ETL pipelines using AWS Glue, Lambda, and Redshift for data transformation")],
            &[
                Chunk::Text("Optimized data processing efficiency by "),
                Chunk::Metric("85%"),
                Chunk::Text(" via schema modeling and tuning"),
            ],
            &[Chunk::Text("Simulated client data scenarios to demonstrate reporting performance")],
        ],
    },
];

const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "NavSight \u{2013} AI-Powered Indoor Navigation for Accessibility",
        tech: &["Python", "Django", "Embedded AI", "Computer Vision"],
        bullets: &[
            &[Chunk::Text("Built a voice-assisted, AI-based indoor navigation system to aid visually impaired users")],
            &[Chunk::Text("Worked in an agile team to integrate landmark detection and obstacle avoidance")],
            &[
                Chunk::Text("Achieved "),
                Chunk::Metric("88% navigation accuracy"),
                Chunk::Text(", reducing dependency by 80%"),
            ],
            &[Chunk::Text("Published in JETIR Journal (May 2025); Runner-up at Microsoft + Reskill Hackathon")],
        ],
        links: &[
            (
                IconKind::Github,
                "https://github.com/sathishdusharla/IndoorNavigation_For_VisuallyImpaired",
                "bg-gray-700 text-gray-300 border-gray-600 hover:border-gray-500",
            ),
            (
                IconKind::ExternalLink,
                "https://www.jetir.org/view?paper=JETIR2505010",
                "bg-pink-500/10 text-pink-300 border-pink-500/30 hover:border-pink-500/50",
            ),
        ],
    },
    ProjectEntry {
        title: "BlockvoteX \u{2013} Scalable Blockchain Voting Platform",
        tech: &["React", "Solidity", "Web3.js", "Smart Contracts"],
        bullets: &[
            &[Chunk::Text("Designed a tamper-proof e-voting system using smart contracts and decentralized storage")],
            &[
                Chunk::Text("Delivered secure admin-voter flows with "),
                Chunk::Metric("100% vote integrity"),
                Chunk::Text(" and auditability"),
            ],
            &[Chunk::Text("Collaborated with stakeholders to ensure trust, scalability, and usability")],
        ],
        links: &[(
            IconKind::ExternalLink,
            "https://blockvotex.netlify.app/",
            "bg-purple-500/10 text-purple-300 border-purple-500/30 hover:border-purple-500/50",
        )],
    },
    ProjectEntry {
        title: "StegaVault \u{2013} Secure Communication using DCT Steganography",
        tech: &["Python", "Django", "DCT Algorithm", "Cryptography"],
        bullets: &[
            &[Chunk::Text("Engineered a secure messaging tool combining DCT and cryptographic methods")],
            &[
                Chunk::Text("Achieved "),
                Chunk::Metric("98% message retrieval accuracy"),
                Chunk::Text(" with lossless image quality"),
            ],
            &[Chunk::Text("Enhanced privacy by 70% compared to LSB-based steganography")],
        ],
        links: &[(
            IconKind::Github,
            "https://github.com/sathishdusharla/StegaVault",
            "bg-gray-700 text-gray-300 border-gray-600 hover:border-gray-500",
        )],
    },
];

// Stamped by the build script, shown as "Month Year".
fn last_updated() -> String {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|stamp| stamp.format("%B %Y").to_string())
        .unwrap_or_else(|_| env!("BUILD_TIME").to_string())
}

fn chunk_view(chunk: &Chunk) -> impl IntoView {
    match chunk {
        Chunk::Text(text) => Either::Left(*text),
        Chunk::Metric(text) => Either::Right(view! {
            <span class="text-emerald-400 font-semibold">{*text}</span>
        }),
    }
}

fn section_title(icon: IconKind, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-6 pb-2 border-b border-gray-600/50">
            <div class="p-2 rounded-lg bg-gradient-to-br from-purple-500/20 to-blue-500/20 border border-purple-500/30">
                <Icon kind=icon size=20 class="text-purple-400" />
            </div>
            <h3 class="text-xl font-bold text-white tracking-wide">{title}</h3>
        </div>
    }
}

fn role_entry(role: &'static RoleEntry) -> impl IntoView {
    view! {
        <div class="relative pl-6 pb-6">
            <div class="absolute left-0 top-2 w-3 h-3 bg-gradient-to-br from-purple-500 to-blue-500 rounded-full border-2 border-gray-800"></div>
            <div class="absolute left-1.5 top-5 w-0.5 h-full bg-gradient-to-b from-purple-500/50 to-transparent"></div>
            <div class="bg-gray-800/30 border border-gray-700/50 rounded-lg p-4 hover:border-purple-500/30 transition-all duration-300">
                <h4 class="text-lg font-semibold text-white mb-1">{role.title}</h4>
                <div class="flex items-center gap-2 mb-2">
                    <span class="text-purple-400 font-medium">{role.company}</span>
                    <span class="text-gray-500">"\u{2022}"</span>
                    <span class="text-sm text-gray-400">{role.duration}</span>
                </div>
                <ul class="space-y-1.5 text-sm text-gray-300">
                    {role
                        .bullets
                        .iter()
                        .map(|bullet| {
                            view! {
                                <li class="flex items-start gap-2">
                                    <div class="w-1 h-1 rounded-full bg-cyan-400 mt-2 flex-shrink-0"></div>
                                    <span>{bullet.iter().map(chunk_view).collect_view()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

fn project_entry(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="bg-gray-800/40 border border-gray-700/50 rounded-xl p-5 hover:border-purple-500/50 transition-all duration-300 hover:shadow-lg hover:shadow-purple-500/10">
            <div class="flex items-start justify-between mb-3">
                <h4 class="text-lg font-semibold text-white">{project.title}</h4>
                <div class="flex gap-2">
                    {project
                        .links
                        .iter()
                        .map(|(icon, url, color)| {
                            view! {
                                <a
                                    href=*url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!(
                                        "p-1.5 rounded-lg border transition-all duration-300 hover:scale-110 {color}",
                                    )
                                >
                                    <Icon kind=*icon size=14 />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex flex-wrap gap-2 mb-3">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-1 text-xs bg-gray-700/50 text-gray-300 rounded-md border border-gray-600/50">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="space-y-1.5 text-sm text-gray-300">
                {project
                    .bullets
                    .iter()
                    .map(|bullet| {
                        view! {
                            <li class="flex items-start gap-2">
                                <div class="w-1.5 h-1.5 rounded-full bg-purple-400 mt-2 flex-shrink-0"></div>
                                <span>{bullet.iter().map(chunk_view).collect_view()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Print-style resume page, rendered without the home page chrome so the
/// scroll tracking and section rail stay out of the way.
#[component]
pub fn ResumePage() -> impl IntoView {
    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <Title text="Resume" />
        <div class="min-h-screen bg-gradient-to-br from-[#181926] via-[#232347] to-[#181926] flex flex-col items-center justify-start py-10 px-2 sm:px-4">
            <div class="w-full max-w-5xl flex items-center justify-between mb-8">
                <button
                    on:click=go_back
                    class="flex items-center gap-2 px-4 py-2 rounded-full bg-black/60 hover:bg-purple-700/80 text-purple-300 hover:text-white font-semibold shadow transition-all duration-300"
                >
                    <Icon kind=IconKind::ArrowLeft size=18 />
                    "Back to Home"
                </button>
                <span class="text-xs text-gray-400 font-mono tracking-widest">
                    {format!("Last updated: {}", last_updated())}
                </span>
            </div>

            <div class="w-full max-w-5xl bg-gray-900/95 border border-gray-700/50 rounded-2xl shadow-2xl overflow-hidden relative">
                <div class="absolute inset-0 bg-gradient-to-br from-purple-500/5 via-transparent to-blue-500/5 pointer-events-none"></div>

                <div class="relative z-10 p-8">
                    <div class="mb-10">
                        <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between gap-6 mb-6">
                            <div class="flex-1">
                                <h1 class="text-4xl lg:text-5xl font-bold text-white mb-2 tracking-tight">
                                    "Dusharla Sathish"
                                </h1>
                                <p class="text-xl text-gray-300 mb-4 font-light">
                                    "Full Stack Developer & AI Enthusiast"
                                </p>
                                <div class="flex flex-wrap gap-4 text-sm">
                                    <div class="flex items-center gap-2 text-gray-300">
                                        <Icon kind=IconKind::Phone size=16 class="text-cyan-400" />
                                        <span>"+91 99482 33702"</span>
                                    </div>
                                    <div class="flex items-center gap-2 text-gray-300">
                                        <Icon kind=IconKind::Mail size=16 class="text-pink-400" />
                                        <span>"23eg105a16@anurag.edu.in"</span>
                                    </div>
                                    <div class="flex items-center gap-2 text-gray-300">
                                        <Icon kind=IconKind::MapPin size=16 class="text-emerald-400" />
                                        <span>"Hyderabad, India"</span>
                                    </div>
                                </div>
                            </div>

                            <div class="flex flex-col gap-3">
                                <div class="flex gap-3">
                                    <a
                                        href=GITHUB_URL
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 bg-gray-800/50 border border-gray-600/50 rounded-lg text-gray-300 hover:text-white hover:border-gray-500 transition-all duration-300"
                                    >
                                        <Icon kind=IconKind::Github size=16 />
                                        <span class="text-sm">"GitHub"</span>
                                    </a>
                                    <a
                                        href=LINKEDIN_URL
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 bg-blue-500/10 border border-blue-500/30 rounded-lg text-blue-300 hover:text-blue-200 hover:border-blue-400 transition-all duration-300"
                                    >
                                        <Icon kind=IconKind::Linkedin size=16 />
                                        <span class="text-sm">"LinkedIn"</span>
                                    </a>
                                </div>
                                <div class="flex flex-wrap gap-2">
                                    <span class="px-3 py-1 text-xs bg-gradient-to-r from-purple-500/20 to-pink-500/20 border border-purple-500/30 rounded-full text-purple-300">
                                        "Blockchain Enthusiast"
                                    </span>
                                    <span class="px-3 py-1 text-xs bg-gradient-to-r from-cyan-500/20 to-blue-500/20 border border-cyan-500/30 rounded-full text-cyan-300">
                                        "Student Leader"
                                    </span>
                                </div>
                            </div>
                        </div>

                        <div class="bg-gradient-to-r from-gray-800/30 to-gray-800/10 border border-gray-700/30 rounded-xl p-6">
                            <h3 class="text-lg font-semibold text-white mb-3 flex items-center gap-2">
                                <div class="w-2 h-2 rounded-full bg-gradient-to-r from-purple-500 to-blue-500"></div>
                                "Career Objective"
                            </h3>
                            <p class="text-gray-300 leading-relaxed">
                                "Motivated Computer Science student with a strong foundation in "
                                <span class="text-purple-300 font-semibold">
                                    "Software Development, Cloud Foundations, and Data Structures & Algorithms"
                                </span>
                                ". Proficient in "
                                <span class="text-cyan-300 font-semibold">"Python, Java, SQL, C++, C"</span>
                                ", with hands-on experience in "
                                <span class="text-emerald-300 font-semibold">
                                    "full-stack development, decentralized systems, and AI-powered applications"
                                </span>
                                ". Passionate about building innovative solutions that bridge technology and real-world impact, Eager to grow through dynamic challenges and meaningful collaborations that push the boundaries of technology."
                            </p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <div class="lg:col-span-1 space-y-8">
                            <div>
                                {section_title(IconKind::GraduationCap, "Education")}
                                <div class="space-y-4">
                                    <div class="bg-gray-800/30 border border-gray-700/50 rounded-lg p-4">
                                        <h4 class="font-semibold text-white mb-1">"B.Tech Computer Science"</h4>
                                        <p class="text-sm text-gray-400 mb-2">"Anurag University, Hyderabad"</p>
                                        <p class="text-xs text-gray-500 mb-2">"2023 \u{2013} 2027"</p>
                                        <div class="flex items-center gap-2">
                                            <span class="px-2 py-1 text-xs bg-emerald-500/10 text-emerald-300 border border-emerald-500/30 rounded-md font-medium">
                                                "CGPA: 9.15"
                                            </span>
                                        </div>
                                    </div>

                                    <div class="bg-gray-800/20 border border-gray-700/30 rounded-lg p-3">
                                        <h4 class="font-medium text-gray-200 text-sm mb-1">"Intermediate Education"</h4>
                                        <p class="text-xs text-gray-400 mb-1">"Saigouthami Junior College"</p>
                                        <span class="px-2 py-0.5 text-xs bg-emerald-500/10 text-emerald-300 border border-emerald-500/30 rounded">
                                            "CGPA: 9.72"
                                        </span>
                                    </div>

                                    <div class="bg-gray-800/20 border border-gray-700/30 rounded-lg p-3">
                                        <h4 class="font-medium text-gray-200 text-sm mb-1">"Secondary Education"</h4>
                                        <p class="text-xs text-gray-400 mb-1">"Montessori High School"</p>
                                        <span class="px-2 py-0.5 text-xs bg-emerald-500/10 text-emerald-300 border border-emerald-500/30 rounded">
                                            "CGPA: 10.0"
                                        </span>
                                    </div>
                                </div>
                            </div>

                            <div>
                                {section_title(IconKind::Award, "Certifications")}
                                <div class="space-y-3">
                                    {CERT_GROUPS
                                        .iter()
                                        .map(|group| {
                                            view! {
                                                <div>
                                                    <h4 class=format!("text-sm font-medium {} mb-2", group.heading_color)>
                                                        {group.heading}
                                                    </h4>
                                                    <div class="space-y-1 text-xs">
                                                        {group
                                                            .items
                                                            .iter()
                                                            .map(|(name, url)| {
                                                                view! {
                                                                    <div class="flex items-center gap-2 text-gray-300">
                                                                        <div class=format!(
                                                                            "w-1 h-1 rounded-full {}",
                                                                            group.dot_color,
                                                                        )></div>
                                                                        <a
                                                                            href=*url
                                                                            target="_blank"
                                                                            rel="noopener noreferrer"
                                                                            class=format!("{} transition-colors", group.hover_color)
                                                                        >
                                                                            {*name}
                                                                        </a>
                                                                    </div>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div>
                                {section_title(IconKind::Trophy, "Accomplishments")}
                                <div class="space-y-3">
                                    {ACCOMPLISHMENTS
                                        .iter()
                                        .map(|entry| {
                                            view! {
                                                <div class=format!(
                                                    "flex items-start gap-3 p-3 border rounded-lg {}",
                                                    entry.tone,
                                                )>
                                                    <Icon
                                                        kind=entry.icon
                                                        size=16
                                                        class=format!("{} mt-0.5 flex-shrink-0", entry.icon_color)
                                                    />
                                                    <div>
                                                        <p class=format!(
                                                            "text-sm font-medium {}",
                                                            entry.title_color,
                                                        )>{entry.title}</p>
                                                        <p class="text-xs text-gray-400">{entry.detail}</p>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <div class="lg:col-span-2 space-y-8">
                            <div>
                                {section_title(IconKind::Code, "Technical Skills")}
                                <div class="space-y-4">
                                    {SKILL_GROUPS
                                        .iter()
                                        .map(|group| {
                                            view! {
                                                <div>
                                                    <h4 class="text-sm font-medium text-gray-300 mb-3">
                                                        {group.category}
                                                    </h4>
                                                    <div class="flex flex-wrap gap-2">
                                                        {group
                                                            .skills
                                                            .iter()
                                                            .map(|skill| {
                                                                view! {
                                                                    <span class=format!(
                                                                        "inline-block px-3 py-1.5 rounded-full text-xs font-medium border transition-all duration-300 hover:scale-105 {}",
                                                                        group.color,
                                                                    )>{*skill}</span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div>
                                {section_title(IconKind::Briefcase, "Experience")}
                                <div class="space-y-6">{ROLES.iter().map(role_entry).collect_view()}</div>
                            </div>

                            <div>
                                {section_title(IconKind::ExternalLink, "Featured Projects")}
                                <div class="space-y-6">{PROJECTS.iter().map(project_entry).collect_view()}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <footer class="w-full max-w-5xl mx-auto mt-8 flex flex-col items-center text-xs text-gray-500 pb-4">
                <div class="flex items-center gap-2">
                    <span>{format!("\u{a9} {} Dusharla Sathish", Utc::now().year())}</span>
                    <span class="text-gray-400">"|"</span>
                    <a
                        href="mailto:23eg105a16@anurag.edu.in"
                        class="hover:text-pink-400 transition-colors duration-300"
                    >
                        "Contact"
                    </a>
                </div>
                <div class="mt-1">
                    "Built with " <span class="text-purple-400 font-semibold">"Leptos"</span> " & "
                    <span class="text-cyan-400 font-semibold">"Tailwind CSS"</span>
                </div>
            </footer>
        </div>
    }
}
