// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod geocode;
pub mod gui;
pub mod logging;
pub mod map;
pub mod pipeline;
pub mod progress;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
