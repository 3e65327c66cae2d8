//! Roulette page: spin the wheel, reveal the winner once the animation
//! ends.
//!
//! The winner is resolved synchronously when the spin starts; only the
//! reveal is deferred, by the same fixed delay the CSS transition runs
//! for. A busy flag ignores spin requests while one is animating, so a
//! pending reveal is never raced by a second spin.

use yew::prelude::*;

use crate::components::wheel::Wheel;
use crate::dom::schedule_once;
use tripick_core::games::REVEAL_DELAY_MS;
use tripick_core::spin_roulette;

#[derive(Properties, Clone, PartialEq)]
pub struct RoulettePageProps {
    pub items: Vec<String>,
    pub on_back_to_mode: Callback<()>,
    pub on_back_to_regions: Callback<()>,
}

#[function_component(RoulettePage)]
pub fn roulette_page(props: &RoulettePageProps) -> Html {
    let rotation = use_state(|| 0.0_f64);
    let spinning = use_state(|| false);
    let winner: UseStateHandle<Option<String>> = use_state(|| None);

    let on_spin = {
        let rotation = rotation.clone();
        let spinning = spinning.clone();
        let winner = winner.clone();
        let items = props.items.clone();
        Callback::from(move |()| {
            if *spinning {
                return;
            }
            let spin = match spin_roulette(&items) {
                Ok(spin) => spin,
                Err(err) => {
                    log::warn!("roulette not playable: {err}");
                    return;
                }
            };
            spinning.set(true);
            winner.set(None);
            rotation.set(spin.rotation_deg);
            let spinning = spinning.clone();
            let winner = winner.clone();
            schedule_once(REVEAL_DELAY_MS as i32, move || {
                spinning.set(false);
                winner.set(Some(spin.label));
            });
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

    let body = if props.items.is_empty() {
        html! {
            <div class="guidance">
                { "선택된 지역이 없습니다." }
                <button class="primary" onclick={on_back_to_regions}>
                    { "지역 선택하러 가기 →" }
                </button>
            </div>
        }
    } else {
        let status = winner.as_ref().map_or_else(
            || html! { <span class="muted">{ "START를 눌러 돌려보세요" }</span> },
            |label| html! { <span class="result">{ format!("🎉 선택된 지역: {label}") }</span> },
        );
        html! {
            <div class="wheel-column">
                <Wheel
                    items={props.items.clone()}
                    rotation_deg={*rotation}
                    spinning={*spinning}
                    {on_spin}
                />
                <div class="wheel-status">{ status }</div>
            </div>
        }
    };

    html! {
        <main class="page page-roulette">
            <section class="card">
                <header class="card-header">
                    <h1>{ "룰렛 돌리기 🎡" }</h1>
                    <button class="ghost" onclick={on_back_to_mode}>{ "← 방식 다시 선택" }</button>
                </header>
                <p class="muted">{ format!("대상(지역): {targets}") }</p>
                { body }
            </section>
        </main>
    }
}
