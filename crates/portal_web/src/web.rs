use leptos::prelude::*;
use spotportal::prelude::*;

use crate::content::about_html;
use crate::ui_model::{game_cards, FrameView, GameCard, PortalView};

mod cards;
mod frame;
mod head;
mod shell;

use cards::CardGrid;
use frame::GameFrame;
use head::HeadScriptSink;
use shell::{FloatingDecor, GameInfoBar, Topbar};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[component]
fn App() -> impl IntoView {
    let config = PortalConfig::builtin();
    let frame_cfg = config.frame;
    let site = config.site.clone();

    let catalog = match config.into_catalog() {
        Ok(c) => c,
        Err(e) => {
            console_error(&format!("catalog rejected: {e}"));
            return view! {
                <main class="portal portal-error">
                    <h1>"Spot the Difference"</h1>
                    <p>"The game list could not be loaded."</p>
                </main>
            }
            .into_any();
        }
    };

    // JSON-LD lives in <head> for exactly as long as the app is mounted.
    let head_metadata = StoredValue::new_local(match site.attach(HeadScriptSink) {
        Ok(guard) => Some(guard),
        Err(e) => {
            console_warn(&e.to_string());
            None
        }
    });
    on_cleanup(move || {
        head_metadata.try_update_value(|g| {
            g.take();
        });
    });

    let runtime = StoredValue::new(ViewController::new(catalog));
    let cards: Vec<GameCard> = runtime.with_value(game_cards);
    let main_game = runtime.with_value(|r| r.catalog().main().clone());
    let about = about_html();

    let (frame, set_frame) = signal(runtime.with_value(FrameView::from_controller));

    let refresh_ui_from_runtime = move || {
        let _ = set_frame.try_set(runtime.with_value(FrameView::from_controller));
    };

    let play = Callback::new(move |game: Game| {
        if let Some(Err(e)) = runtime.try_update_value(|r| r.select_game(&game)) {
            console_warn(&e.to_string());
        }
        refresh_ui_from_runtime();
    });

    let back = Callback::new(move |()| {
        runtime.update_value(|r| r.return_to_default());
        refresh_ui_from_runtime();
    });

    let restart = Callback::new(move |()| {
        runtime.update_value(|r| r.reload_current());
        refresh_ui_from_runtime();
    });

    // Load reports can arrive after unmount (timers), hence the `try_` calls.
    let on_loaded = Callback::new(move |generation: u64| {
        if runtime.try_update_value(|r| r.mark_loaded(generation)) == Some(true) {
            refresh_ui_from_runtime();
        }
    });

    let on_timeout = Callback::new(move |generation: u64| {
        let reason = format!(
            "no response after {} seconds",
            frame_cfg.load_timeout_ms() / 1000
        );
        if runtime.try_update_value(|r| r.mark_failed(generation, reason)) == Some(true) {
            refresh_ui_from_runtime();
        }
    });

    let view_kind = Memo::new(move |_| frame.with(|f| f.view));

    view! {
        <div class="portal">
            <FloatingDecor />
            <Topbar view_kind=view_kind on_restart=restart on_back=back />

            <Show when=move || view_kind.get() == PortalView::Main fallback=|| ()>
                <section class="main-game panel">
                    <h1 class="main-title">
                        <span class="bounce">"🎯"</span>
                        {main_game.title.clone()}
                        <span class="bounce delayed">"🎯"</span>
                    </h1>
                    <p class="subtitle">{main_game.description.clone()}</p>
                </section>
            </Show>

            <Show when=move || view_kind.get() == PortalView::Playing fallback=|| ()>
                <GameInfoBar frame=frame />
            </Show>

            <GameFrame
                frame=frame
                allow_fullscreen=frame_cfg.allow_fullscreen
                load_timeout_ms=frame_cfg.load_timeout_ms()
                on_loaded=on_loaded
                on_timeout=on_timeout
                on_retry=restart
            />

            <Show when=move || view_kind.get().shows_catalog() fallback=|| ()>
                <CardGrid cards=cards.clone() on_play=play />
                <section class="about panel" inner_html=about.clone()></section>
            </Show>
        </div>
    }
    .into_any()
}
