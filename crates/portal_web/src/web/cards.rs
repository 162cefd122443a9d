use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use spotportal::game::Game;

use crate::ui_model::GameCard;

#[component]
pub(super) fn CardGrid(cards: Vec<GameCard>, on_play: Callback<Game>) -> impl IntoView {
    view! {
        <section class="more-games">
            <div class="section-heading">
                <h2>
                    <span class="bounce">"🎮"</span>
                    "More Fun Games!"
                    <span class="bounce delayed">"🎮"</span>
                </h2>
                <p class="subtitle">"Discover more exciting puzzle and educational games!"</p>
            </div>
            <div class="card-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <Card card=card on_play=on_play /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Card(card: GameCard, on_play: Callback<Game>) -> impl IntoView {
    let GameCard {
        game,
        icon,
        difficulty_class,
    } = card;
    let title = game.title.clone();
    let description = game.description.clone();
    let category = game.category.clone();
    let difficulty = game.difficulty.clone();
    let game_click = game.clone();
    let game_key = game;

    view! {
        <div
            class="game-card"
            role="button"
            tabindex="0"
            on:click=move |_| on_play.run(game_click.clone())
            on:keydown=move |ev: KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    on_play.run(game_key.clone());
                }
            }
        >
            <div class="card-icon">{icon}</div>
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{description}</p>
            <div class="card-badges">
                <span class="badge category">{category}</span>
                <span class=difficulty_class>{difficulty}</span>
            </div>
            <span class="btn play">"🕹️ Play Now!"</span>
        </div>
    }
}
