//! Grid placement engine for the digital-signage screen editor.
//!
//! A screen is a fixed grid of cells (32×18 by default). Widgets occupy
//! axis-aligned rectangles of whole cells and may never overlap or leave the
//! grid. This crate owns every rule about where a widget may go: dragging new
//! widgets in from the palette, dragging placed widgets around, nudging them
//! with the keyboard, and deleting or duplicating them. The host UI wires its
//! pointer and keyboard events to [`engine::EngineCore`] (or the
//! [`bind::Engine`] wasm wrapper) and applies the returned
//! [`engine::Action`]s; rendering the widgets themselves is the host's job.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Host-facing core: layout, selection, drag, actions |
//! | [`grid`] | Cell geometry, bounds, clamping, fractional frames |
//! | [`collision`] | Overlap queries against the layout |
//! | [`finder`] | Nearest valid drop position search |
//! | [`snap`] | Edge-alignment guides for the drag ghost |
//! | [`drag`] | Drag lifecycle state machine |
//! | [`keyboard`] | Single-cell arrow-key moves |
//! | [`edit`] | Checked layout mutations with rollback |
//! | [`doc`] | Layout items, validation, persisted JSON form |
//! | [`input`] | Neutral host events and drag state types |
//! | [`registry`] | Component types and their default footprints |
//! | [`ids`] | Id generation for inserted items |
//! | [`render`] | Scene description for the host renderer |
//! | [`bind`] | `wasm-bindgen` exports |
//! | [`error`] | Error types |
//! | [`consts`] | Grid size, snap threshold, and other constants |

pub mod bind;
pub mod collision;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod edit;
pub mod engine;
pub mod error;
pub mod finder;
pub mod grid;
pub mod ids;
pub mod input;
pub mod keyboard;
pub mod registry;
pub mod render;
pub mod snap;
