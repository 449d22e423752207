// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

/// Enter sends, Shift+Enter is a newline.
pub fn is_submit_key(key: &Key, shift_held: bool) -> bool {
    *key == Key::Enter && !shift_held
}

/// Keydown in the compose box. A submit key sends and keeps the browser from
/// inserting a newline; anything else is left to the textarea.
fn on_compose_key(
    key: &Key,
    shift_held: bool,
    prevent_default: impl FnOnce(),
    send: impl FnOnce(),
) {
    if is_submit_key(key, shift_held) {
        prevent_default();
        send();
    }
}

/// Compose box. The draft lives with the caller, which clears it once a send
/// has gone through.
#[component]
pub fn ChatInput(draft: Signal<String>, on_send: Callback<(), ()>) -> Element {
    let mut draft = draft;
    let set_text = move |e: Event<FormData>| {
        draft.set(e.value());
    };
    rsx! {
        form {
            class: "message-form",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                on_send(());
            },
            textarea {
                placeholder: "Type your message...",
                oninput: set_text,
                onkeydown: move |e: Event<KeyboardData>| {
                    on_compose_key(&e.key(), e.modifiers().shift(), || e.prevent_default(), || {
                        on_send(());
                    });
                },
                value: draft,
            }
            button { r#type: "submit", "Send" }
        }
    }
}
