//! Chat Widget
//!
//! A browser chat widget written in Rust and compiled to WebAssembly, plus a
//! small Axum companion server that serves the page and relays chat requests.
//!
//! # Architecture
//!
//! - **Widget core**: platform-neutral turn orchestration, rendering and input rules
//! - **Web binding**: `web-sys` DOM view and event listeners (`wasm32` only)
//! - **Server**: Axum router with a Leptos SSR page shell and a `/chat` relay
//!
//! # Modules
//!
//! - [`widget`]: the chat widget core
//! - [`protocol`]: JSON wire types for `POST /chat`
//! - `web`: browser entry point (`wasm32` only)
//! - `config`, `relay`, `server`, `ui`: companion server (native only)

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]

pub mod protocol;
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod relay;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;
