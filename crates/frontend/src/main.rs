mod api;
mod components;
mod pages;
mod style;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/canvas")]
    CanvasMode {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::board::Board {}
    }
}

#[component]
fn CanvasMode() -> Element {
    rsx! {
        pages::canvas::CanvasBoard {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
