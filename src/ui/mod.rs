//! Terminal UI: play a match with the keyboard while computer sides move on
//! each tick of the event loop.

mod app;
mod game_view;

pub use app::App;
