// Draft domain: player model, rosters, and board-wide draft state.

pub mod player;
pub mod roster;
pub mod state;
