use dioxus::prelude::*;

mod ui;
use ui::main_window::main_window;

static MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(app);
}

/// App shell: stylesheet link plus the single page container.
fn app() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            id: "container",
            main_window {}
        }
    }
}
