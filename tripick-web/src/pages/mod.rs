pub mod dice;
pub mod game_mode;
pub mod ladder;
pub mod not_found;
pub mod region_select;
pub mod roulette;
pub mod trip_detail;
