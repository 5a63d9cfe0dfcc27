//! Navigation core for the pitch deck: entrance gate, slide navigator and navbar timer.
//!
//! Everything here is synchronous and driven by millisecond timestamps, so hosts
//! (the egui shell, the CLI replayer, tests) decide how time advances.

pub mod config;
pub mod controller;
pub mod gate;
pub mod navbar;
pub mod navigator;
pub mod replay;
pub mod schedule;
pub mod slides;

pub use config::{load_settings, RevealPolicy, Settings};
pub use controller::{ControllerSnapshot, DeckController, InputOutcome, Stage};
pub use gate::{EntranceGate, GateSnapshot, GateTransition};
pub use navigator::{
    DeckNavigator, NavigatorOptions, NavigatorSnapshot, RenderedSlide, SlideCounter,
    SlidePosition,
};
pub use replay::{replay_script, ReplayFrame};
pub use schedule::{Clock, DeferredTask, ManualClock, MonotonicClock};
pub use slides::{SlideList, SlideRender};
