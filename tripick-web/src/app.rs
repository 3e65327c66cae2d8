//! Top-level router wiring. Pages stay props-driven; the route wrapper
//! components here own query parsing, navigation, data fetching with
//! the bundled sample fallback, and the geolocation request.

use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::game_mode::{GameChoice, GameModePage};
use crate::pages::{
    dice::DicePage, ladder::LadderPage, not_found::NotFound, region_select::RegionSelectPage,
    roulette::RoulettePage, trip_detail::TripDetailPage,
};
use crate::router::{AreasQuery, Route};
use tripick_core::trip::TripDetail;
use tripick_core::{Coord, sample_trip};

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::RegionSelect => html! { <RegionSelectRoute /> },
        Route::GameMode => html! { <GameModeRoute /> },
        Route::Dice => html! { <GameRoute kind={GameChoice::Dice} /> },
        Route::Ladder => html! { <GameRoute kind={GameChoice::Ladder} /> },
        Route::Roulette => html! { <GameRoute kind={GameChoice::Roulette} /> },
        Route::TripDetail { id } => html! { <TripDetailRoute {id} /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn current_areas(location: Option<&Location>) -> AreasQuery {
    location
        .and_then(|location| location.query::<AreasQuery>().ok())
        .unwrap_or_default()
}

fn push_with_areas(navigator: &Navigator, route: &Route, query: &AreasQuery) {
    if let Err(err) = navigator.push_with_query(route, query) {
        log::error!("failed to navigate with areas query: {err}");
    }
}

#[function_component(RegionSelectRoute)]
fn region_select_route() -> Html {
    let navigator = use_navigator().expect("navigator should exist inside the router");
    let on_start = Callback::from(move |labels: Vec<String>| {
        push_with_areas(
            &navigator,
            &Route::GameMode,
            &AreasQuery::from_labels(&labels),
        );
    });
    html! { <RegionSelectPage {on_start} /> }
}

#[function_component(GameModeRoute)]
fn game_mode_route() -> Html {
    let navigator = use_navigator().expect("navigator should exist inside the router");
    let location = use_location();
    let query = current_areas(location.as_ref());

    let on_choose = {
        let navigator = navigator.clone();
        let query = query.clone();
        Callback::from(move |choice: GameChoice| {
            let route = match choice {
                GameChoice::Dice => Route::Dice,
                GameChoice::Ladder => Route::Ladder,
                GameChoice::Roulette => Route::Roulette,
            };
            push_with_areas(&navigator, &route, &query);
        })
    };
    let on_back = Callback::from(move |()| navigator.push(&Route::RegionSelect));

    html! { <GameModePage areas={query.labels()} {on_choose} {on_back} /> }
}

#[derive(Properties, Clone, PartialEq)]
struct GameRouteProps {
    kind: GameChoice,
}

#[function_component(GameRoute)]
fn game_route(props: &GameRouteProps) -> Html {
    let navigator = use_navigator().expect("navigator should exist inside the router");
    let location = use_location();
    let query = current_areas(location.as_ref());
    let items = query.labels();

    let on_back_to_mode = {
        let navigator = navigator.clone();
        Callback::from(move |()| push_with_areas(&navigator, &Route::GameMode, &query))
    };
    let on_back_to_regions = Callback::from(move |()| navigator.push(&Route::RegionSelect));

    match props.kind {
        GameChoice::Dice => html! {
            <DicePage {items} {on_back_to_mode} {on_back_to_regions} />
        },
        GameChoice::Ladder => html! {
            <LadderPage {items} {on_back_to_mode} {on_back_to_regions} />
        },
        GameChoice::Roulette => html! {
            <RoulettePage {items} {on_back_to_mode} {on_back_to_regions} />
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TripDetailRouteProps {
    id: u32,
}

#[function_component(TripDetailRoute)]
fn trip_detail_route(props: &TripDetailRouteProps) -> Html {
    let trip: UseStateHandle<Option<Rc<TripDetail>>> = use_state(|| None);
    let origin: UseStateHandle<Option<Coord>> = use_state(|| None);

    {
        let trip = trip.clone();
        use_effect_with(props.id, move |&id| {
            spawn_local(async move {
                let url = format!("/api/trips/me/planned/{id}");
                match crate::dom::fetch_json::<TripDetail>(&url).await {
                    Ok(fetched) => trip.set(Some(Rc::new(fetched))),
                    Err(err) => {
                        log::warn!(
                            "trip fetch failed, using bundled sample: {}",
                            crate::dom::js_error_message(&err)
                        );
                        trip.set(sample_trip(id).cloned().map(Rc::new));
                    }
                }
            });
        });
    }
    {
        let origin = origin.clone();
        use_effect_with((), move |_| {
            crate::geoloc::request_position(move |result| match result {
                Ok(coord) => origin.set(Some(coord)),
                Err(err) => log::warn!("current position unavailable: {err}"),
            });
        });
    }

    let on_move = {
        let trip = trip.clone();
        Callback::from(move |(day, from, to): (u32, u32, u32)| {
            let Some(current) = trip.as_ref() else {
                return;
            };
            let mut next = (**current).clone();
            let moved = next
                .day_mut(day)
                .map(|day_state| day_state.move_item(from, to));
            match moved {
                Some(Ok(())) => trip.set(Some(Rc::new(next))),
                // Rejected moves are no-ops per the reorder contract.
                Some(Err(err)) => log::debug!("ignored reorder: {err}"),
                None => log::debug!("ignored reorder for unknown day {day}"),
            }
        })
    };

    trip.as_ref().map_or_else(
        || html! { <main class="page"><p class="muted">{ "여행 정보를 불러오는 중…" }</p></main> },
        |trip| html! { <TripDetailPage trip={trip.clone()} origin={*origin} {on_move} /> },
    )
}

#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let navigator = use_navigator().expect("navigator should exist inside the router");
    let on_go_home = Callback::from(move |()| navigator.push(&Route::Home));
    html! { <NotFound {on_go_home} /> }
}
