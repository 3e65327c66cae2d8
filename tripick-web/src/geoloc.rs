//! Browser geolocation boundary. An unavailable location is reported
//! as a typed error the pages render as "distance unknown", never as a
//! failed view.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Position, PositionError, PositionOptions};

use tripick_core::Coord;

const TIMEOUT_MS: u32 = 10_000;
const MAX_CACHED_AGE_MS: u32 = 300_000;

/// Why no device position could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocError {
    #[error("geolocation is not supported by this browser")]
    Unsupported,
    #[error("user denied the request for geolocation")]
    PermissionDenied,
    #[error("location information is unavailable")]
    PositionUnavailable,
    #[error("the request to get user location timed out")]
    Timeout,
    #[error("an unknown geolocation error occurred")]
    Unknown,
}

impl From<&PositionError> for GeolocError {
    fn from(err: &PositionError) -> Self {
        // Codes per the Geolocation API specification.
        match err.code() {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}

/// Request the current device position once. `on_done` fires exactly
/// once, from a browser callback; the closures leak into the JS
/// runtime like the one-shot timers in [`crate::dom`].
pub fn request_position(on_done: impl FnOnce(Result<Coord, GeolocError>) + 'static) {
    let geolocation = match crate::dom::window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            on_done(Err(GeolocError::Unsupported));
            return;
        }
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(TIMEOUT_MS);
    options.set_maximum_age(MAX_CACHED_AGE_MS);

    // Route both callbacks through one shared slot so `on_done` stays
    // FnOnce even though the browser wants two independent functions.
    let done = std::rc::Rc::new(std::cell::RefCell::new(Some(Box::new(on_done)
        as Box<dyn FnOnce(Result<Coord, GeolocError>)>)));

    let success = {
        let done = done.clone();
        Closure::once(move |position: Position| {
            let coords = position.coords();
            if let Some(cb) = done.borrow_mut().take() {
                cb(Ok(Coord {
                    lat: coords.latitude(),
                    lng: coords.longitude(),
                }));
            }
        })
    };
    let failure = {
        let done = done.clone();
        Closure::once(move |err: PositionError| {
            if let Some(cb) = done.borrow_mut().take() {
                cb(Err(GeolocError::from(&err)));
            }
        })
    };

    let result = geolocation.get_current_position_with_error_callback_and_options(
        success.as_ref().unchecked_ref(),
        Some(failure.as_ref().unchecked_ref()),
        &options,
    );
    if let Err(err) = result {
        log::warn!(
            "geolocation request failed to start: {}",
            crate::dom::js_error_message(&err)
        );
        if let Some(cb) = done.borrow_mut().take() {
            cb(Err(GeolocError::Unknown));
        }
    }
    success.forget();
    failure.forget();
}
