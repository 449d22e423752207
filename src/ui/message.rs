use dioxus::prelude::*;

use crate::{clipboard::copy_message, message::Message};

/// One chat bubble. Clicking it copies the message body.
#[component]
pub fn MessageEl(msg: Message, local_username: String) -> Element {
    let class = msg.style_for(&local_username).class();
    let time = msg.time_label();
    let text = msg.message.clone();
    rsx! {
        div {
            class: "message {class}",
            onclick: move |_e: Event<MouseData>| {
                let text = text.clone();
                async move {
                    copy_message(&text).await;
                }
            },
            div { class: "message-header",
                strong { "{msg.username}" }
                small { "{time}" }
            }
            p { "{msg.message}" }
        }
    }
}
