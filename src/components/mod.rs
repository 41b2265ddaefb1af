pub mod app;
pub mod confetti;
pub mod game;
pub mod number_tile;
pub mod score_panel;
