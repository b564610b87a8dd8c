//! Terminal arcade shooter: dodge descending enemies and their bombs, shoot
//! them down with beams and spend score on shields, gravity fields, EMP
//! bursts and overdrive.
//!
//! The library is the pure simulation. All terminal I/O lives in the binary.

pub mod abilities;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
