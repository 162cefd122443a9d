use leptos::prelude::*;

use crate::ui_model::{FrameView, PortalView};

#[component]
pub(super) fn Topbar(
    view_kind: Memo<PortalView>,
    on_restart: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="brand">
                <span class="pulse">"🔍"</span>
                <span class="brand-text">"Spot the Difference"</span>
            </div>
            <div class="app-header-right">
                <Show when=move || view_kind.get().shows_topbar_actions() fallback=|| ()>
                    <button class="btn restart" title="Reload this game" on:click=move |_| on_restart.run(())>
                        "↻ Restart"
                    </button>
                    <button class="btn back" title="Back to the main game" on:click=move |_| on_back.run(())>
                        "⌂ Back"
                    </button>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub(super) fn GameInfoBar(frame: ReadSignal<FrameView>) -> impl IntoView {
    view! {
        <section class="game-info panel">
            <h2>
                <span class="bounce">"🎮"</span>
                {move || frame.with(|f| f.game.title.clone())}
                <span class="bounce delayed">"🎮"</span>
            </h2>
            <p class="subtitle">{move || frame.with(|f| f.game.description.clone())}</p>
        </section>
    }
}

// Purely decorative; hidden from assistive tech.
#[component]
pub(super) fn FloatingDecor() -> impl IntoView {
    const FLOATERS: [(&str, &str); 6] = [
        ("⭐", "top: 2.5rem; left: 2.5rem;"),
        ("🌈", "top: 5rem; right: 5rem; animation-delay: 1s;"),
        ("🎈", "bottom: 5rem; left: 5rem; animation-delay: 2s;"),
        ("🦄", "bottom: 2.5rem; right: 2.5rem; animation-delay: 0.5s;"),
        ("🌟", "top: 50%; left: 1.25rem; animation-delay: 1.5s;"),
        ("🎀", "top: 33%; right: 1.25rem; animation-delay: 2.5s;"),
    ];

    view! {
        <div class="floaters" aria-hidden="true">
            {FLOATERS
                .iter()
                .map(|&(glyph, style)| view! { <div class="floater bounce" style=style>{glyph}</div> })
                .collect_view()}
        </div>
    }
}
