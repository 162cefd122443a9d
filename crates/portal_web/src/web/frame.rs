use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::ui_model::{EmbedKey, FrameView};

/// The embedded game.
///
/// The `<iframe>` is rebuilt whenever the [`EmbedKey`] changes, i.e. on a new
/// source *or* a new generation, which is what makes Restart refetch the
/// content from scratch. Status changes alone never touch the element.
#[component]
pub(super) fn GameFrame(
    frame: ReadSignal<FrameView>,
    allow_fullscreen: bool,
    load_timeout_ms: u32,
    on_loaded: Callback<u64>,
    on_timeout: Callback<u64>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let embed = Memo::new(move |_| frame.with(|f| EmbedKey::from(f)));

    // One watchdog per generation; the controller ignores it if the frame
    // already loaded or has been replaced.
    Effect::new(move |_| {
        let generation = embed.with(|e| e.generation);
        schedule_timeout(load_timeout_ms, move || on_timeout.run(generation));
    });

    view! {
        <section class="frame-wrap panel">
            {move || {
                let EmbedKey { source, title, generation } = embed.get();
                view! {
                    <iframe
                        class="game-iframe"
                        src=source
                        title=title
                        frameborder="0"
                        scrolling="no"
                        allowfullscreen=allow_fullscreen
                        on:load=move |_| on_loaded.run(generation)
                    ></iframe>
                }
            }}
            <Show when=move || frame.with(|f| f.status.is_failed()) fallback=|| ()>
                <div class="frame-failed" role="alert">
                    <div class="frame-failed-title">"This game didn't load"</div>
                    <div class="frame-failed-reason">
                        {move || frame.with(|f| f.failure_reason().unwrap_or_default().to_string())}
                    </div>
                    <button class="btn retry" on:click=move |_| on_retry.run(())>
                        "Try again"
                    </button>
                </div>
            </Show>
        </section>
    }
}

fn schedule_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
        .is_err()
    {
        super::console_warn("failed to schedule frame load timeout");
    }
}
