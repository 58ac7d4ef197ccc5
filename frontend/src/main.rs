#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::template::Template;
use dioxus::prelude::*;
use pages::{dashboard::Dashboard, landing::Landing};

#[derive(Routable, PartialEq, Clone)]
enum Route {
  #[layout(Template)]
  #[route("/")]
  Landing {},
  #[route("/dashboard")]
  Dashboard {},
  #[route("/:..route")]
  PageNotFound { route: Vec<String> }
}

fn main() {
  dioxus::launch(App);
}

fn App() -> Element {
  rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
  let path = route.join("/");
  rsx! {
    div {
      class: "not-found",
      h1 { "Page not found" }
      p { "The page you requested doesn't exist." }
      pre { "attempted to navigate to: /{path}" }
      Link { class: "cta-button", to: Route::Dashboard {}, "Back to the dashboard" }
    }
  }
}
