// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{fetch,poll_fetch,copy,load_basemap}.

mod basemap; // src/gui/actions/basemap.rs
mod copy;    // src/gui/actions/copy.rs
mod fetch;   // src/gui/actions/fetch.rs

pub use basemap::load_basemap;
pub use copy::copy;
pub use fetch::{fetch, poll_fetch};
