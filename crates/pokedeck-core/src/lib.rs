//! # Pokedeck Core Library
//!
//! Everything behind the Pokedeck terminal viewer that does not depend on a
//! terminal: talking to PokeAPI, loading the first page of creatures, turning
//! records into cards, configuration and the color palettes.
//!
//! ## Modules
//!
//! - `client`: HTTP access to PokeAPI behind the `EntitySource` trait
//! - `loader`: concurrent fan-out/fan-in load of the first page
//! - `card`: record-to-card transform and badge color table
//! - `deck`: the on-screen record list and its load status
//! - `settings`: configuration management
//! - `theme`: UI theming system

pub mod card;
pub mod client;
pub mod deck;
pub mod error;
pub mod loader;
pub mod models;
pub mod settings;
pub mod theme;
