//! Controller layer: input translation and dispatch into the deck state machines.

pub mod events;
pub mod orchestration;
