use lanchat::{App, config::LOG_LEVEL};

fn main() {
    dioxus::logger::init(LOG_LEVEL).unwrap();
    dioxus::launch(App);
}
