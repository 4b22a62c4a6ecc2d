use leptos::either::Either;
use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::icons::{Icon, IconKind};
use crate::contact::{deliver, ContactDraft, SubmitStatus, SEND_DELAY_MS, STATUS_RESET_MS};

const CONTACT_INFO: &[(IconKind, &str, &str, &str)] = &[
    (
        IconKind::Mail,
        "Email",
        "23eg105a16@anurag.edu.in",
        "mailto:23eg105a16@anurag.edu.in",
    ),
    (IconKind::Phone, "Phone", "+91 9948XXXXXX", "tel:+919948000000"),
    (IconKind::MapPin, "Location", "Hyderabad, India", "#"),
];

const SOCIAL_LINKS: &[(IconKind, &str, &str)] = &[
    (IconKind::Github, "https://github.com/sathishdusharla", "GitHub"),
    (
        IconKind::Linkedin,
        "https://linkedin.com/in/sathishdusharla",
        "LinkedIn",
    ),
    (IconKind::Twitter, "https://x.com/thedusharla", "Twitter"),
    (
        IconKind::Instagram,
        "https://instagram.com/thedusharla",
        "Instagram",
    ),
];

/// Contact section: info cards on the left, the form on the right.
///
/// Submission walks Idle -> Submitting -> Success or Error -> Idle. The send
/// latency and the banner reset are one-shot timeout handles owned by this
/// component; fields clear only after a successful delivery.
#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(move |_: ()| set_status(SubmitStatus::Idle), STATUS_RESET_MS);

    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |draft: ContactDraft| {
            match deliver(&draft) {
                Ok(()) => {
                    set_status(SubmitStatus::Success);
                    set_name(String::new());
                    set_email(String::new());
                    set_message(String::new());
                }
                Err(err) => {
                    log::error!("contact delivery failed: {err}");
                    set_status(SubmitStatus::Error);
                }
            }
            // the banner clears after the same delay on both paths
            start_reset(());
        },
        SEND_DELAY_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if !draft.is_complete() {
            return;
        }
        set_status(SubmitStatus::Submitting);
        start_send(draft);
    };

    view! {
        <div class="py-20 lg:py-32 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-black/95 via-gray-950/90 to-black/95 backdrop-blur-3xl"></div>
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent shadow-lg divider-glow"></div>

            <div class="max-w-3xl xl:max-w-4xl mx-auto px-4 sm:px-8 xl:px-0 relative z-10">
                <div class="text-center mb-12">
                    <div class="bg-black/40 backdrop-blur-2xl border border-white/10 rounded-3xl p-8 shadow-2xl">
                        <h2 class="text-3xl md:text-5xl font-extrabold mb-4 tracking-tight">
                            <span class="text-gray-300">"Get In "</span>
                            <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                                "Touch"
                            </span>
                        </h2>
                        <p class="text-base md:text-lg text-gray-400 max-w-2xl mx-auto font-light">
                            "Let's collaborate on your next project. I'm always excited to work on innovative solutions."
                        </p>
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-14">
                    <div class="space-y-8">
                        <div class="bg-black/40 backdrop-blur-2xl border border-white/10 rounded-3xl p-6 shadow-2xl">
                            <h3 class="text-xl font-semibold text-white mb-5">
                                "Let's start a conversation"
                            </h3>
                            <p class="text-gray-300 leading-relaxed mb-7 text-sm md:text-base">
                                "I'm currently available for new opportunities and exciting projects. Whether you have a project in mind or just want to chat about technology, I'd love to hear from you."
                            </p>
                        </div>

                        <div class="space-y-5">
                            {CONTACT_INFO
                                .iter()
                                .map(|(icon, label, value, href)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="flex items-center space-x-4 p-4 bg-black/40 backdrop-blur-2xl border border-white/20 rounded-2xl hover:border-white/30 hover:bg-black/60 transition-all duration-300 group shadow-xl"
                                        >
                                            <div class="w-12 h-12 bg-gradient-to-r from-purple-500/80 to-pink-500/80 backdrop-blur-xl rounded-xl flex items-center justify-center group-hover:scale-110 transition-transform duration-300 shadow-lg border border-white/20 text-white">
                                                <Icon kind=*icon size=20 />
                                            </div>
                                            <div>
                                                <div class="text-xs text-gray-400">{*label}</div>
                                                <div class="text-white font-medium text-sm">{*value}</div>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="pt-7">
                            <div class="bg-black/40 backdrop-blur-2xl border border-white/10 rounded-2xl p-6 shadow-xl">
                                <h4 class="text-base font-semibold text-white mb-4">"Follow me"</h4>
                                <div class="flex space-x-4">
                                    {SOCIAL_LINKS
                                        .iter()
                                        .map(|(icon, href, label)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=*label
                                                    class="w-12 h-12 bg-black/60 backdrop-blur-xl border border-white/20 rounded-full flex items-center justify-center text-gray-400 hover:text-white hover:border-purple-500/60 hover:bg-purple-500/20 transition-all duration-300 shadow-lg"
                                                >
                                                    <Icon kind=*icon size=18 />
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="relative">
                        <div class="absolute inset-0 bg-gradient-to-r from-purple-500/20 to-pink-500/20 rounded-3xl blur-2xl"></div>

                        <div class="relative bg-black/60 backdrop-blur-2xl border border-white/20 rounded-3xl p-8 shadow-2xl">
                            <div class="absolute inset-0 bg-gradient-to-br from-white/5 via-transparent to-black/20 rounded-3xl pointer-events-none"></div>

                            <form on:submit=on_submit class="space-y-6 relative z-10">
                                <div>
                                    <label for="name" class="block text-sm font-medium text-gray-300 mb-2">
                                        "Your Name"
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        prop:value=name
                                        on:input=move |ev| set_name(event_target_value(&ev))
                                        required=true
                                        class="w-full px-4 py-3 bg-black/40 backdrop-blur-xl border border-white/20 rounded-xl text-white placeholder-gray-400 focus:outline-none focus:border-purple-500/60 focus:ring-2 focus:ring-purple-500/20 transition-all duration-300 text-sm shadow-lg"
                                        placeholder="Enter your name"
                                    />
                                </div>

                                <div>
                                    <label for="email" class="block text-sm font-medium text-gray-300 mb-2">
                                        "Your Email"
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        prop:value=email
                                        on:input=move |ev| set_email(event_target_value(&ev))
                                        required=true
                                        class="w-full px-4 py-3 bg-black/40 backdrop-blur-xl border border-white/20 rounded-xl text-white placeholder-gray-400 focus:outline-none focus:border-purple-500/60 focus:ring-2 focus:ring-purple-500/20 transition-all duration-300 text-sm shadow-lg"
                                        placeholder="Enter your email"
                                    />
                                </div>

                                <div>
                                    <label for="message" class="block text-sm font-medium text-gray-300 mb-2">
                                        "Your Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        prop:value=message
                                        on:input=move |ev| set_message(event_target_value(&ev))
                                        required=true
                                        rows=5
                                        class="w-full px-4 py-3 bg-black/40 backdrop-blur-xl border border-white/20 rounded-xl text-white placeholder-gray-400 focus:outline-none focus:border-purple-500/60 focus:ring-2 focus:ring-purple-500/20 transition-all duration-300 resize-none text-sm shadow-lg"
                                        placeholder="Tell me about your project..."
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    disabled=move || status().is_submitting()
                                    class="w-full flex items-center justify-center space-x-2 px-6 py-4 bg-gradient-to-r from-purple-600/80 to-pink-600/80 backdrop-blur-xl rounded-xl text-white font-semibold hover:from-purple-700/90 hover:to-pink-700/90 disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-300 text-sm border border-white/20 shadow-2xl"
                                >
                                    {move || {
                                        if status().is_submitting() {
                                            Either::Left(
                                                view! {
                                                    <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <Icon kind=IconKind::Send size=18 />
                                                    <span>"Send Message"</span>
                                                },
                                            )
                                        }
                                    }}
                                </button>

                                {move || {
                                    status()
                                        .banner()
                                        .map(|text| {
                                            let tone = if status() == SubmitStatus::Success {
                                                "bg-green-500/20 text-green-300 border-green-500/30"
                                            } else {
                                                "bg-red-500/20 text-red-300 border-red-500/30"
                                            };
                                            view! {
                                                <div class=format!(
                                                    "text-center p-3 rounded-xl text-sm mt-3 backdrop-blur-xl border shadow-lg {tone}",
                                                )>{text}</div>
                                            }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
