//! Cricket Sim - limited-overs cricket match simulation

pub mod commentary;
pub mod core;
pub mod simulation;
pub mod team;
pub mod umpire;
