//! ShadCN-style reusable UI components.
//!
//! Rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Primary action button
//! - [`Badge`]: Status badge
//! - [`Avatar`]: Role avatar
//! - [`ScrollArea`]: Scrollable container
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod button;
mod icons;
mod scroll_area;

pub use avatar::Avatar;
pub use badge::Badge;
pub use button::Button;
pub use icons::*;
pub use scroll_area::ScrollArea;
