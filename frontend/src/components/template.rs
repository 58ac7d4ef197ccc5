use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/main.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Header { }
    main {
      class: "page",
      Outlet::<Route> {}
    }
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  rsx!{
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          to: Route::Landing { },
          span { class: "logo-mark", "₹" }
          "PricePredict"
        }
        div {
          class: "nav-links",
          Link {
            active_class: "nav-active",
            to: Route::Landing { },
            "Home"
          },
          Link {
            active_class: "nav-active",
            to: Route::Dashboard { },
            "Dashboard"
          },
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx!{
    footer {
      div {
        class: "footer-container",
        p { "Prices are simulated. Predictions are illustrative and not financial advice." }
      }
    }
  }
}
