//! Core application logic: state, seed data, and event handling.

pub mod handler;
pub mod seed;
pub mod state;
