//! Region picker: toggle areas in and out of the selection, then move
//! on to choosing a game mode.

use yew::prelude::*;

use crate::components::area_grid::AreaGrid;
use tripick_core::AreaSelection;

#[derive(Properties, Clone, PartialEq)]
pub struct RegionSelectPageProps {
    /// Fired with the chosen labels when the user starts the game flow.
    pub on_start: Callback<Vec<String>>,
}

#[function_component(RegionSelectPage)]
pub fn region_select_page(props: &RegionSelectPageProps) -> Html {
    let selection = use_state(AreaSelection::new);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |label: String| {
            let mut next = (*selection).clone();
            next.toggle(&label);
            selection.set(next);
        })
    };

    let chosen = selection.labels().to_vec();
    let summary = if chosen.is_empty() {
        "없음".to_string()
    } else {
        chosen.join(", ")
    };

    let on_start = {
        let on_start = props.on_start.clone();
        let chosen = chosen.clone();
        Callback::from(move |_| on_start.emit(chosen.clone()))
    };

    html! {
        <main class="page page-regions">
            <section class="card">
                <h1>{ "게임에 포함할 지역을 선택하세요" }</h1>
                <AreaGrid selected={chosen.clone()} {on_select} />
                <p class="muted">{ format!("선택된 지역: {summary}") }</p>
                <button class="primary" onclick={on_start} disabled={chosen.is_empty()}>
                    { "방식 선택하러 가기 →" }
                </button>
            </section>
        </main>
    }
}
