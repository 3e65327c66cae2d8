//! Ladder page: shuffle a full matching of the selected regions.

use yew::prelude::*;

use tripick_core::{LadderResult, run_ladder};

#[derive(Properties, Clone, PartialEq)]
pub struct LadderPageProps {
    pub items: Vec<String>,
    pub on_back_to_mode: Callback<()>,
    pub on_back_to_regions: Callback<()>,
}

#[function_component(LadderPage)]
pub fn ladder_page(props: &LadderPageProps) -> Html {
    let result: UseStateHandle<Option<LadderResult>> = {
        let items = props.items.clone();
        use_state(move || run_ladder(&items).ok())
    };

    let can_play = props.items.len() >= 2;

    let on_reshuffle = {
        let result = result.clone();
        let items = props.items.clone();
        Callback::from(move |_| match run_ladder(&items) {
            Ok(fresh) => result.set(Some(fresh)),
            Err(err) => log::warn!("ladder not playable: {err}"),
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
        let rows = props
            .items
            .iter()
            .enumerate()
            .map(|(i, area)| {
                let matched = result
                    .as_ref()
                    .and_then(|r| r.match_for(i))
                    .unwrap_or_default();
                html! {
                    <tr key={area.clone()}>
                        <td>{ i + 1 }</td>
                        <td>{ area }</td>
                        <td class="match">{ matched }</td>
                    </tr>
                }
            })
            .collect::<Html>();
        html! {
            <>
                <table class="option-table">
                    <thead>
                        <tr><th>{ "번호" }</th><th>{ "입력(지역)" }</th><th>{ "결과(매칭)" }</th></tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
                <div class="roll-bar">
                    <button class="primary" onclick={on_reshuffle}>{ "다시 섞기 🔄" }</button>
                    <span class="muted">{ "셔플할 때마다 매칭이 바뀝니다." }</span>
                </div>
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
        <main class="page page-ladder">
            <section class="card">
                <header class="card-header">
                    <h1>{ "사다리 타기 🪜" }</h1>
                    <div class="header-actions">
                        <button class="ghost" onclick={on_back_to_mode}>{ "← 방식 다시 선택" }</button>
                        <button class="ghost" onclick={on_back_to_regions}>{ "지역 다시 선택" }</button>
                    </div>
                </header>
                <p class="muted">{ format!("대상(지역): {targets}") }</p>
                { body }
            </section>
        </main>
    }
}
