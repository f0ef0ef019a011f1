//! Pokedex core - paginated list and detail loading over PokeAPI
//!
//! The library holds everything a presentation layer needs: the remote client,
//! the repository seam, the reducers and the two controllers that publish
//! observable state. The binary is a thin headless consumer of it.

pub mod action;
pub mod api;
pub mod config;
pub mod controller;
pub mod display;
pub mod effect;
pub mod error;
pub mod reducer;
pub mod repository;
pub mod state;
