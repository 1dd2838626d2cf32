//! Grid-based snake gameplay core with a thin terminal front end.
//!
//! The interesting machinery lives in [`snake`] and [`turns`]: every body
//! segment carries its own heading, and a turn taken at the head is queued as
//! a (cell, heading) record that trailing segments adopt exactly when they
//! reach the turn cell. Collisions, growth, and round resets are orchestrated
//! by [`session`]; rendering and input are collaborators that only consume
//! positions and produce heading events.

pub mod config;
pub mod food;
pub mod grid;
pub mod heading;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod turns;
