//! Trip detail: day tabs over the itinerary list, with drag-and-drop
//! reordering and distance badges from the current device position.

use std::rc::Rc;
use yew::prelude::*;

use crate::components::itinerary_list::ItineraryList;
use tripick_core::trip::TripDetail;
use tripick_core::{Coord, centroid};

#[derive(Properties, Clone)]
pub struct TripDetailPageProps {
    pub trip: Rc<TripDetail>,
    /// Current device position, when geolocation produced one.
    pub origin: Option<Coord>,
    /// `(day, dragged_id, target_id)` reorder request.
    pub on_move: Callback<(u32, u32, u32)>,
}

impl PartialEq for TripDetailPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.trip, &other.trip) && self.origin == other.origin
    }
}

#[function_component(TripDetailPage)]
pub fn trip_detail_page(props: &TripDetailPageProps) -> Html {
    let selected_day = use_state(|| 1_u32);

    let tabs = props
        .trip
        .days
        .iter()
        .map(|day| {
            let number = day.day;
            let class = if number == *selected_day {
                "day-tab day-tab-active"
            } else {
                "day-tab"
            };
            let on_click = {
                let selected_day = selected_day.clone();
                Callback::from(move |_| selected_day.set(number))
            };
            html! {
                <button key={number} {class} onclick={on_click}>
                    { format!("{number}일차") }
                </button>
            }
        })
        .collect::<Html>();

    let day_view = props.trip.day(*selected_day).map_or_else(
        || html! { <p class="muted">{ "일정이 없습니다." }</p> },
        |day| {
            let on_move = {
                let on_move = props.on_move.clone();
                let number = day.day;
                Callback::from(move |(from, to): (u32, u32)| on_move.emit((number, from, to)))
            };
            let center = centroid(&day.coords());
            html! {
                <>
                    <p class="map-center muted">
                        { format!("지도 중심: {:.4}, {:.4}", center.lat, center.lng) }
                    </p>
                    <ItineraryList
                        items={day.items.clone()}
                        origin={props.origin}
                        {on_move}
                    />
                </>
            }
        },
    );

    html! {
        <main class="page page-trip">
            <section class="card">
                <header class="card-header">
                    <h1>{ &props.trip.title }</h1>
                    <span class="muted">{ &props.trip.date }</span>
                </header>
                <nav class="day-tabs">{ tabs }</nav>
                { day_view }
            </section>
        </main>
    }
}
