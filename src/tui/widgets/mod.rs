// Widget rendering functions for the board dashboard.

pub mod board;
pub mod roster;
pub mod status_bar;
