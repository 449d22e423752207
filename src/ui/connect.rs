// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::info, prelude::*};

use crate::session::{ConnectForm, ConnectionGate};

/// Username and host form shown until the gate opens.
#[component]
pub fn ConnectScreen(gate: Signal<ConnectionGate>) -> Element {
    let mut gate = gate;
    let mut form = use_signal(ConnectForm::default);

    let connect = move |e: Event<FormData>| {
        e.prevent_default();
        let f = form.cloned();
        if gate.write().submit(&f) {
            info!("joined {} as {}", f.server_address, f.username);
        }
    };

    rsx! {
        div { class: "connect-container",
            form { onsubmit: connect,
                h2 { "Join Chat" }
                input {
                    r#type: "text",
                    placeholder: "Enter your username",
                    required: true,
                    value: "{form.read().username}",
                    oninput: move |e: Event<FormData>| form.write().username = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Enter host IP address",
                    required: true,
                    value: "{form.read().server_address}",
                    oninput: move |e: Event<FormData>| form.write().server_address = e.value(),
                }
                button { r#type: "submit", "Connect" }
            }
        }
    }
}
