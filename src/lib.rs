//! # portal-ui
//!
//! Browser-side presentation layer for the news and weather portal.
//! Compiled to WebAssembly and loaded on the server-rendered pages, it
//! reports the browser timezone, switches weather units in place, toggles
//! password visibility, and polishes two profile form widgets.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Unit preference engine over an element index built once |
//! | [`display`] | Display categories, attribute contract, pure rendering |
//! | [`units`] | Radio groups and unit selections |
//! | [`compass`] | Wind direction codes and arrow icon classes |
//! | [`plural`] | Miles label pluralization (`en`, `uk`) |
//! | [`timezone`] | Zone validation and the one-shot report |
//! | [`password`] | Password visibility toggle contract |
//! | [`avatar`] | Avatar file name truncation |
//! | [`gender`] | Gender select placeholder color |
//! | [`config`] | Server-provided page settings |
//! | `dom` | `web-sys` bindings (wasm32 only) |
//!
//! Everything outside `dom` is DOM-free and tested natively.

pub mod avatar;
pub mod compass;
pub mod config;
pub mod consts;
pub mod display;
pub mod engine;
pub mod error;
pub mod gender;
pub mod password;
pub mod plural;
pub mod timezone;
pub mod units;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(test)]
mod testing;

/// Module start hook: runs as soon as the wasm module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::start();
}
