//! Choose how the region decision is made: dice, ladder, or roulette.

use yew::prelude::*;

/// The three decision mini-games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameChoice {
    Dice,
    Ladder,
    Roulette,
}

#[derive(Properties, Clone, PartialEq)]
pub struct GameModePageProps {
    pub areas: Vec<String>,
    pub on_choose: Callback<GameChoice>,
    pub on_back: Callback<()>,
}

fn choice_button(
    on_choose: &Callback<GameChoice>,
    choice: GameChoice,
    label: &str,
) -> Html {
    let on_click = {
        let on_choose = on_choose.clone();
        Callback::from(move |_| on_choose.emit(choice))
    };
    html! {
        <button class="mode-button" onclick={on_click}>{ label }</button>
    }
}

#[function_component(GameModePage)]
pub fn game_mode_page(props: &GameModePageProps) -> Html {
    let targets = if props.areas.is_empty() {
        "없음".to_string()
    } else {
        props.areas.join(", ")
    };
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
        <main class="page page-mode">
            <section class="card">
                <header class="card-header">
                    <h1>{ "어떻게 정할까요?" }</h1>
                    <button class="ghost" onclick={on_back}>{ "← 지역 다시 선택" }</button>
                </header>
                <p class="muted">{ format!("대상(지역): {targets}") }</p>
                <div class="mode-grid">
                    { choice_button(&props.on_choose, GameChoice::Dice, "주사위 굴리기 🎲") }
                    { choice_button(&props.on_choose, GameChoice::Ladder, "사다리 타기 🪜") }
                    { choice_button(&props.on_choose, GameChoice::Roulette, "룰렛 돌리기 🎡") }
                </div>
            </section>
        </main>
    }
}
