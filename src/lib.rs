//! Conway's Game of Life on a toroidal grid.
//!
//! The library half is the simulation core: a bounds-safe binary [`grid`]
//! and the double-buffered [`simulation`] that advances it one generation
//! at a time. The binary half (the window, input and pixel rendering) lives
//! in `main.rs` and only ever talks to the core through
//! [`simulation::Simulation`].

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod randomizer;
pub mod simulation;
