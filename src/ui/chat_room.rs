//! Chat screen: polls the server, shows the list and hosts the compose box.

use dioxus::{logger::tracing::debug, prelude::*};

use crate::{
    client::{ChatClient, ChatView, SendOutcome},
    config::POLL_INTERVAL,
    message::Message,
    session::Session,
    timer::Ticker,
    ui::{chat_input::ChatInput, message::MessageEl},
};

/// The signals the client writes into.
#[derive(Clone, Copy)]
struct RoomState {
    messages: Signal<Vec<Message>>,
    draft: Signal<String>,
}

impl ChatView for RoomState {
    fn draft(&self) -> String {
        self.draft.cloned()
    }

    fn clear_draft(&mut self) {
        self.draft.set(String::new());
    }

    fn show_messages(&mut self, messages: Vec<Message>) {
        self.messages.set(messages);
    }
}

#[component]
pub fn ChatRoom(session: Session) -> Element {
    let client = use_hook(|| ChatClient::for_session(&session));
    let messages = use_signal(Vec::<Message>::new);
    let draft = use_signal(String::new);
    let state = RoomState { messages, draft };

    // Both the loop and the per-tick fetches are tasks of this scope, so
    // leaving the chat screen stops polling.
    let poll_client = client.clone();
    let _ = use_future(move || {
        let client = poll_client.clone();
        async move {
            client
                .poll(Ticker::new(POLL_INTERVAL), state, |task| {
                    spawn(task);
                })
                .await;
        }
    });

    let username = session.username.clone();
    let on_send = Callback::new(move |_: ()| {
        let client = client.clone();
        let username = username.clone();
        let mut state = state;
        async move {
            if client.submit(&mut state, &username).await == SendOutcome::Sent {
                debug!("message sent");
            }
        }
    });

    rsx! {
        div { class: "chat-container",
            div { class: "chat-header",
                h2 { "LAN Chat" }
                span { "Connected as: {session.username}" }
            }
            div { class: "messages-container",
                for (i, msg) in messages.read().iter().enumerate() {
                    MessageEl {
                        key: "{i}",
                        msg: msg.clone(),
                        local_username: session.username.clone(),
                    }
                }
            }
            ChatInput { draft, on_send }
        }
    }
}
