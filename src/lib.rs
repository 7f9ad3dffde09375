//! Weather widget: current conditions over Open-Meteo
//!
//! The core (`state`, `action`, `reducer`, `card`, `codes`) is plain data and
//! pure functions. `api` and `effect` perform the two HTTP lookups; `components`
//! bind everything to a ratatui terminal.

pub mod action;
pub mod api;
pub mod card;
pub mod codes;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod headless;
pub mod logging;
pub mod reducer;
pub mod sprites;
pub mod state;
