//! Core types and definitions for the artillery duel simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, state snapshots, events, constants and
//! runtime tuning. It has no dependency on any windowing or audio backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
