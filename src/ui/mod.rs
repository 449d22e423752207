//! User interface components for the LAN chat client.
//!
//! Two screens: the connect form and the chat room. The room is made of the
//! message list and the compose box.

mod chat_input;    // Compose box with Enter-to-send
pub mod chat_room; // Chat screen (poller + list + compose)
pub mod connect;   // Username / host form
mod message;       // Single message bubble
