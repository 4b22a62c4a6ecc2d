use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::sections;

mod about;
mod back_to_top;
mod contact;
mod cursor;
mod education;
mod experience;
mod footer;
mod hero;
mod icons;
mod nav;
mod preloader;
mod projects;
mod resume;
mod skills;

use about::About;
use back_to_top::BackToTop;
use contact::Contact;
use cursor::CustomCursor;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use nav::Navigation;
use preloader::Preloader;
use projects::Projects;
use resume::ResumePage;
use skills::Skills;

/// Monogram shown in the logo blocks across the site.
pub(crate) const MONOGRAM: &str = "SD";

/// Milliseconds the branded preloader covers the page after load.
const PRELOADER_MS: f64 = 3000.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&family=JetBrains+Mono:wght@400;500;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (loading, set_loading) = signal(true);
    let UseTimeoutFnReturn {
        start: start_reveal,
        ..
    } = use_timeout_fn(move |_: ()| set_loading(false), PRELOADER_MS);
    Effect::new(move |_| start_reveal(()));

    view! {
        <Title formatter=|title| format!("Sathish Dusharla - {title}") />
        <Router>
            <div class="min-h-screen bg-black text-white font-inter overflow-x-hidden relative">
                <div class="fixed inset-0 bg-gradient-to-br from-black via-gray-950 to-black pointer-events-none"></div>
                <div class="fixed inset-0 opacity-30 pointer-events-none">
                    <div class="absolute inset-0 bg-gradient-to-br from-purple-950/20 via-transparent to-blue-950/20"></div>
                    <div class="absolute top-0 left-0 w-full h-full bg-[radial-gradient(circle_at_20%_50%,rgba(120,119,198,0.1),transparent_50%)]"></div>
                    <div class="absolute top-0 right-0 w-full h-full bg-[radial-gradient(circle_at_80%_20%,rgba(255,119,198,0.1),transparent_50%)]"></div>
                    <div class="absolute bottom-0 left-0 w-full h-full bg-[radial-gradient(circle_at_40%_80%,rgba(119,198,255,0.1),transparent_50%)]"></div>
                </div>
                <div class="fixed inset-0 opacity-[0.015] pointer-events-none mix-blend-overlay noise-overlay"></div>

                // the page stays mounted beneath the opaque overlay, so route
                // generation and hydration always see both routes
                {move || loading().then(|| view! { <Preloader /> })}

                <div class="relative z-10">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/resume") view=ResumePage />
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

/// Renders a registered section's content. Ids without a body render nothing,
/// the same silent skip the scroll tracker applies.
fn section_body(id: &str) -> AnyView {
    match id {
        "about" => view! { <About /> }.into_any(),
        "education" => view! { <Education /> }.into_any(),
        "skills" => view! { <Skills /> }.into_any(),
        "projects" => view! { <Projects /> }.into_any(),
        "experience" => view! { <Experience /> }.into_any(),
        "contact" => view! { <Contact /> }.into_any(),
        _ => ().into_any(),
    }
}

/// The single scrolling page. Section anchors come from the same registry the
/// navigation scans, which keeps menu entries and anchor ids aligned.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <CustomCursor />
        <Navigation />
        <main class="snap-y snap-mandatory" style="scroll-behavior: smooth;">
            <section class="min-h-screen snap-start" id="hero">
                <Hero />
            </section>
            {sections::SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <section class="min-h-screen snap-start" id=section.id>
                            {section_body(section.id)}
                        </section>
                    }
                })
                .collect_view()}
        </main>
        <Footer />
        <BackToTop />
    }
}
