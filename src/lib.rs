//! Pixel Rain: dodge and shoot a descending grid of enemies.
//!
//! The library holds the whole game engine (`compute`, `controller`) plus the
//! adapters the terminal front-end plugs into (`input`, `scene`).

pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod input;
pub mod scene;
