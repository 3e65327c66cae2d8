//! Region picker grid: one button per catalog entry plus the
//! select-all button.

use yew::prelude::*;

use tripick_core::{AREA_CATALOG, SELECT_ALL};

#[derive(Properties, Clone, PartialEq)]
pub struct AreaGridProps {
    pub selected: Vec<String>,
    pub on_select: Callback<String>,
}

#[function_component(AreaGrid)]
pub fn area_grid(props: &AreaGridProps) -> Html {
    let buttons = AREA_CATALOG
        .iter()
        .chain(std::iter::once(&SELECT_ALL))
        .map(|area| {
            let is_active = props.selected.iter().any(|label| label == area);
            let on_click = {
                let on_select = props.on_select.clone();
                let area = (*area).to_string();
                Callback::from(move |_| on_select.emit(area.clone()))
            };
            let class = if is_active {
                "area-button area-button-active"
            } else {
                "area-button"
            };
            html! {
                <button key={*area} {class} onclick={on_click}>{ *area }</button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="area-grid">{ buttons }</div>
    }
}
