//! Popup presentation: state, derived views and rendering

pub mod derive;
pub mod format;
pub mod render;
pub mod state;

pub use derive::{
    filter_matches_by_team, most_recent_result, next_fixture, sorted_past_results,
    sorted_upcoming_fixtures, MatchDetails,
};
pub use render::{render_json, render_text};
pub use state::{Popup, PopupState, PopupView, DEFAULT_TEAM};
