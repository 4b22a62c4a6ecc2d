use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

/// Desktop-only cursor replacement: a dot that tracks the pointer and a
/// slower ring trailing behind it. Both grow while the pointer is over an
/// interactive element.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let (position, set_position) = signal((0.0_f64, 0.0_f64));
    let (hovering, set_hovering) = signal(false);

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev: web_sys::MouseEvent| {
        set_position((ev.client_x() as f64, ev.client_y() as f64));
    });

    // mouseover fires for every element the pointer crosses; walking up with
    // closest() also catches interactive elements mounted later.
    let _ = use_event_listener(use_window(), ev::mouseover, move |ev: web_sys::MouseEvent| {
        let over_interactive = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("button, a, input, textarea").ok().flatten())
            .is_some();
        set_hovering(over_interactive);
    });

    let dot_style = move || {
        let (x, y) = position();
        let scale = if hovering() { 2.0 } else { 1.0 };
        format!(
            "transform: translate({}px, {}px) scale({scale}); filter: drop-shadow(0 0 20px rgba(168, 85, 247, 0.8));",
            x - 12.0,
            y - 12.0
        )
    };

    let ring_style = move || {
        let (x, y) = position();
        let (scale, opacity) = if hovering() { (2.5, 0.6) } else { (1.0, 0.8) };
        format!(
            "transform: translate({}px, {}px) scale({scale}); opacity: {opacity}; background: rgba(0, 0, 0, 0.2); box-shadow: 0 0 30px rgba(168, 85, 247, 0.3);",
            x - 24.0,
            y - 24.0
        )
    };

    view! {
        <div
            class="fixed top-0 left-0 w-6 h-6 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full pointer-events-none z-50 mix-blend-difference hidden lg:block shadow-2xl transition-transform duration-100 ease-out"
            style=dot_style
        ></div>
        <div
            class="fixed top-0 left-0 w-12 h-12 border-2 border-purple-500/60 backdrop-blur-xl rounded-full pointer-events-none z-40 hidden lg:block shadow-xl transition-all duration-300 ease-out"
            style=ring_style
        ></div>
    }
}
