use dioxus::prelude::*;

pub mod api;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod message;
pub mod session;
pub mod timer;
mod ui;

use session::ConnectionGate;
use ui::chat_room::ChatRoom;
use ui::connect::ConnectScreen;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let gate = use_signal(ConnectionGate::default);
    let session = gate.read().session().cloned();
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if let Some(session) = session {
            ChatRoom { session }
        } else {
            ConnectScreen { gate }
        }
    }
}
