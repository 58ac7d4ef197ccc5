use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Landing() -> Element {
  rsx! {
    div {
      class: "landing-page",
      section {
        class : "hero",
        h1 { "Commodity Price Predictions" },
        p { "Track gold, silver, platinum and fuel prices as they move, and compare them against forecast targets for each commodity." },
        Link {
          class: "cta-button",
          to: Route::Dashboard { },
          "Open Dashboard"
        }
      },
      section {
        class: "features",
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"⚡"}
            "Live Prices"
          }
          p { "Prices are pushed to the dashboard the moment they change. No refresh needed." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"🎯"}
            "Forecast Targets"
          }
          p { "Every card shows a predicted price, the expected change from today and how confident the forecast is." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"📈"}
            "Price History"
          }
          p { "Open any commodity to chart its price over the last week, month, quarter or year." }
        }
      }
    }
  }
}
