//! Chat-specific UI components.
//!
//! These components lay out the static markup the widget binds to; all
//! behavior is attached in the browser by the `web` module.

mod header;
mod input_area;
mod message_list;
mod shell;

pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use message_list::ChatMessageList;
pub use shell::ChatShell;
