use dioxus::prelude::*;
use pricepredict_common::{Commodity, Prediction, Trend};

fn trend_style(trend: Trend) -> (&'static str, &'static str) {
  match trend {
    Trend::Up => ("trend-up", "▲"),
    Trend::Down => ("trend-down", "▼"),
    Trend::Stable => ("trend-stable", "▶")
  }
}

#[component]
pub fn CommodityCard(
  commodity: Commodity,
  prediction: Option<Prediction>,
  selected: bool,
  on_select: EventHandler<Commodity>
) -> Element {
  let badge = commodity.badge();
  let name = commodity.name.clone();
  let unit = commodity.unit.clone();
  let price = commodity.current_price;
  let kind = commodity.kind;
  let card_class = if selected { "commodity-card selected" } else { "commodity-card" };
  let clicked = commodity.clone();

  rsx! {
    div {
      class: "{card_class} type-{kind}",
      onclick: move |_| on_select.call(clicked.clone()),
      div {
        class: "card-header",
        span { class: "card-badge", "{badge}" }
        div {
          h3 { class: "card-title", "{name}" }
          p { class: "card-unit", "{unit}" }
        }
      }
      div {
        class: "card-price",
        span { class: "card-label", "Current Price" }
        span { class: "price-value", "₹{price:.2}" }
      }
      {
        match prediction {
          Some(p) => {
            let change = p.change_pct(price);
            let confidence = p.confidence_pct();
            let predicted = p.predicted_price;
            let (trend_class, icon) = trend_style(p.trend);
            rsx! {
              div {
                class: "card-prediction",
                div {
                  class: "prediction-row",
                  span { class: "card-label", "Predicted" }
                  span { class: "prediction-value", "₹{predicted:.2}" }
                }
                div {
                  class: "prediction-row",
                  span { class: "trend {trend_class}", "{icon} {change:+.2}%" }
                  span { class: "confidence", "{confidence:.0}% confidence" }
                }
              }
            }
          },
          None => rsx! {
            p { class: "no-prediction", "No prediction available" }
          }
        }
      }
    }
  }
}
