//! Geodistance math and map-layer constants.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fallback map center when no coordinates are available: Seoul city
/// hall.
pub const SEOUL_CITY_HALL: Coord = Coord {
    lat: 37.5665,
    lng: 126.9780,
};

/// A WGS-84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

/// Great-circle distance between two points via the haversine formula.
/// Symmetric, non-negative, and zero for identical points.
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Render a distance for display: below 1 km as rounded meters, from
/// 1 km up as kilometers with one decimal. Exactly 1.0 km is "1.0km".
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1}km")
    }
}

/// Arithmetic-mean center of `points`, used to center the map view.
///
/// This is a planar approximation: latitude and longitude are averaged
/// independently, which is fine for the city-scale extents this app
/// shows but is not a spherical centroid. Empty input falls back to
/// [`SEOUL_CITY_HALL`]; a single point is returned unchanged.
#[must_use]
pub fn centroid(points: &[Coord]) -> Coord {
    match points {
        [] => SEOUL_CITY_HALL,
        [only] => *only,
        _ => {
            let n = points.len() as f64;
            let lat: f64 = points.iter().map(|p| p.lat).sum();
            let lng: f64 = points.iter().map(|p| p.lng).sum();
            Coord {
                lat: lat / n,
                lng: lng / n,
            }
        }
    }
}

/// Polyline through every point in itinerary order. Fewer than two
/// points draw nothing.
#[must_use]
pub fn route_path(points: &[Coord]) -> Vec<Coord> {
    if points.len() < 2 {
        return Vec::new();
    }
    points.to_vec()
}

/// Polyline covering only the first leg, departure to first place.
#[must_use]
pub fn first_leg_path(points: &[Coord]) -> Vec<Coord> {
    if points.len() < 2 {
        return Vec::new();
    }
    vec![points[0], points[1]]
}

/// Marker asset for one itinerary entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
}

#[must_use]
pub const fn marker_style(kind: crate::itinerary::PlaceKind) -> MarkerStyle {
    let src = match kind {
        crate::itinerary::PlaceKind::Departure => "/startPlace.svg",
        crate::itinerary::PlaceKind::Place => "/place.svg",
    };
    MarkerStyle {
        src,
        width: 30,
        height: 30,
    }
}

/// Stroke settings for the route polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolylineStyle {
    pub stroke_weight: u32,
    pub stroke_color: &'static str,
    pub stroke_opacity_pct: u8,
}

#[must_use]
pub const fn polyline_style() -> PolylineStyle {
    PolylineStyle {
        stroke_weight: 15,
        stroke_color: "#FF6B6B",
        stroke_opacity_pct: 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GYEONGBOKGUNG: Coord = Coord {
        lat: 37.5796,
        lng: 126.9770,
    };

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = SEOUL_CITY_HALL;
        let b = GYEONGBOKGUNG;
        let ab = distance_km(a.lat, a.lng, b.lat, b.lng);
        let ba = distance_km(b.lat, b.lng, a.lat, a.lng);
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < 1e-12);
        assert_eq!(distance_km(a.lat, a.lng, a.lat, a.lng), 0.0);
    }

    #[test]
    fn city_hall_to_gyeongbokgung_is_about_1_5km() {
        let d = distance_km(
            SEOUL_CITY_HALL.lat,
            SEOUL_CITY_HALL.lng,
            GYEONGBOKGUNG.lat,
            GYEONGBOKGUNG.lng,
        );
        assert!(d > 1.0 && d < 2.0, "got {d}");
    }

    #[test]
    fn format_switches_at_one_kilometer() {
        assert_eq!(format_distance(0.9999), "1000m");
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(2.345), "2.3km");
        assert_eq!(format_distance(0.25), "250m");
        assert_eq!(format_distance(0.0), "0m");
    }

    #[test]
    fn centroid_handles_small_inputs() {
        assert_eq!(centroid(&[]), SEOUL_CITY_HALL);
        let single = Coord { lat: 5.0, lng: 5.0 };
        assert_eq!(centroid(&[single]), single);
        let pair = [Coord { lat: 0.0, lng: 0.0 }, Coord { lat: 0.0, lng: 2.0 }];
        let c = centroid(&pair);
        assert_eq!(c.lat, 0.0);
        assert_eq!(c.lng, 1.0);
    }

    #[test]
    fn route_paths_need_two_points() {
        let one = [SEOUL_CITY_HALL];
        assert!(route_path(&one).is_empty());
        assert!(first_leg_path(&one).is_empty());
        let three = [
            SEOUL_CITY_HALL,
            GYEONGBOKGUNG,
            Coord { lat: 37.5512, lng: 126.9882 },
        ];
        assert_eq!(route_path(&three).len(), 3);
        assert_eq!(first_leg_path(&three), vec![three[0], three[1]]);
    }
}
