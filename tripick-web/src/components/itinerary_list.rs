//! Drag-and-drop itinerary list for one day. The list itself is
//! presentational; reordering is requested through `on_move` and the
//! owning page mutates the day state.

use web_sys::DragEvent;
use yew::prelude::*;

use tripick_core::itinerary::{ItineraryItem, PlaceKind};
use tripick_core::{Coord, distance_km, format_distance};

const DISTANCE_UNKNOWN: &str = "거리 정보 없음";

#[derive(Properties, Clone, PartialEq)]
pub struct ItineraryListProps {
    pub items: Vec<ItineraryItem>,
    /// Current device position, when geolocation produced one.
    pub origin: Option<Coord>,
    /// `(dragged_id, target_id)` when an item is dropped on another.
    pub on_move: Callback<(u32, u32)>,
}

fn distance_badge(origin: Option<Coord>, item: &ItineraryItem) -> String {
    match (origin, item.coord()) {
        (Some(from), Some(to)) => {
            format_distance(distance_km(from.lat, from.lng, to.lat, to.lng))
        }
        _ => DISTANCE_UNKNOWN.to_string(),
    }
}

#[function_component(ItineraryList)]
pub fn itinerary_list(props: &ItineraryListProps) -> Html {
    let dragged: UseStateHandle<Option<u32>> = use_state(|| None);

    let rows = props
        .items
        .iter()
        .map(|item| {
            let is_departure = item.kind == PlaceKind::Departure;
            let id = item.id;

            let on_drag_start = {
                let dragged = dragged.clone();
                Callback::from(move |_: DragEvent| dragged.set(Some(id)))
            };
            let on_drag_over = Callback::from(|event: DragEvent| event.prevent_default());
            let on_drop = {
                let dragged = dragged.clone();
                let on_move = props.on_move.clone();
                Callback::from(move |event: DragEvent| {
                    event.prevent_default();
                    if let Some(from) = *dragged {
                        if from != id {
                            on_move.emit((from, id));
                        }
                    }
                    dragged.set(None);
                })
            };
            let on_drag_end = {
                let dragged = dragged.clone();
                Callback::from(move |_: DragEvent| dragged.set(None))
            };

            let class = if is_departure {
                "itinerary-item itinerary-departure"
            } else {
                "itinerary-item"
            };
            html! {
                <li
                    key={id}
                    {class}
                    draggable={(!is_departure).to_string()}
                    ondragstart={on_drag_start}
                    ondragover={on_drag_over}
                    ondrop={on_drop}
                    ondragend={on_drag_end}
                >
                    <span class="itinerary-name">{ &item.name }</span>
                    <span class="itinerary-distance">{ distance_badge(props.origin, item) }</span>
                    {
                        item.reviews.map_or(Html::default(), |count| html! {
                            <span class="itinerary-reviews">{ format!("리뷰 {count}") }</span>
                        })
                    }
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <ul class="itinerary-list">{ rows }</ul>
    }
}
