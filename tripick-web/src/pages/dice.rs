//! Dice page: roll an n-faced die over the selected regions.

use yew::prelude::*;

use tripick_core::{DiceRoll, roll_dice};

#[derive(Properties, Clone, PartialEq)]
pub struct DicePageProps {
    pub items: Vec<String>,
    pub on_back_to_mode: Callback<()>,
    pub on_back_to_regions: Callback<()>,
}

#[function_component(DicePage)]
pub fn dice_page(props: &DicePageProps) -> Html {
    let roll: UseStateHandle<Option<DiceRoll>> = use_state(|| None);

    let can_play = props.items.len() >= 2;
    let faces = props.items.len();

    let on_roll = {
        let roll = roll.clone();
        let items = props.items.clone();
        Callback::from(move |_| match roll_dice(&items) {
            Ok(result) => roll.set(Some(result)),
            Err(err) => log::warn!("dice not playable: {err}"),
        })
    };
    let on_back_to_mode = {
        let cb = props.on_back_to_mode.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_back_to_regions = {
        let cb = props.on_back_to_regions.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let targets = if props.items.is_empty() {
        "없음".to_string()
    } else {
        props.items.join(", ")
    };

    let body = if can_play {
        let result = roll.as_ref().map_or_else(
            || html! { <span class="muted">{ "결과 대기…" }</span> },
            |r| html! { <span class="result">{ format!("🎉 결과: {}번 — {}", r.index + 1, r.label) }</span> },
        );
        let rows = props
            .items
            .iter()
            .enumerate()
            .map(|(i, area)| {
                let highlighted = roll.as_ref().is_some_and(|r| r.index == i);
                let class = if highlighted { "row-highlight" } else { "" };
                html! {
                    <tr key={area.clone()} {class}>
                        <td>{ i + 1 }</td>
                        <td>{ area }</td>
                    </tr>
                }
            })
            .collect::<Html>();
        html! {
            <>
                <div class="roll-bar">
                    <button class="primary" onclick={on_roll}>{ "굴리기" }</button>
                    { result }
                </div>
                <table class="option-table">
                    <thead><tr><th>{ "번호" }</th><th>{ "지역" }</th></tr></thead>
                    <tbody>{ rows }</tbody>
                </table>
            </>
        }
    } else {
        html! {
            <div class="guidance">
                { "최소 2개 이상의 지역이 필요합니다." }
                <button class="primary" onclick={on_back_to_regions.clone()}>
                    { "지역 선택하러 가기 →" }
                </button>
            </div>
        }
    };

    html! {
        <main class="page page-dice">
            <section class="card">
                <header class="card-header">
                    <h1>{ "주사위 굴리기 🎲" }</h1>
                    <div class="header-actions">
                        <button class="ghost" onclick={on_back_to_mode}>{ "← 방식 다시 선택" }</button>
                        <button class="ghost" onclick={on_back_to_regions}>{ "지역 다시 선택" }</button>
                    </div>
                </header>
                <p class="muted">
                    { format!("대상(지역): {targets}") }
                    { if faces > 0 { format!(" (현재 {faces}면체)") } else { String::new() } }
                </p>
                { body }
            </section>
        </main>
    }
}
