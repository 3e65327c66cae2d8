pub mod area_grid;
pub mod itinerary_list;
pub mod wheel;
