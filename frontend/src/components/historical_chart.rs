use std::rc::Rc;
use chrono::Utc;
use dioxus::{logger::tracing::warn, prelude::*};
use pricepredict_common::{
  chart::{ChartGeometry, CANVAS_HEIGHT, CANVAS_WIDTH},
  history::{generate_mock_history, Timeframe}
};
use rand::{rngs::SmallRng, SeedableRng};

// reseeded from Math.random on every regeneration
fn browser_rng() -> SmallRng {
  SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Mock price history for one commodity.
///
/// `base_price` is read once per regeneration; the series is rebuilt when the
/// timeframe, the commodity or the base price changes.
#[component]
pub fn HistoricalChart(commodity_id: ReadOnlySignal<String>, name: String, base_price: ReadOnlySignal<f64>) -> Element {
  let mut timeframe = use_signal(Timeframe::default);
  let mut hovered: Signal<Option<usize>> = use_signal(|| None);
  let mut chart_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
  // a measurement can resolve after the pointer already left
  let mut pointer_inside = use_signal(|| false);

  let history = use_memo(move || {
    generate_mock_history(&commodity_id(), base_price(), timeframe(), Utc::now(), &mut browser_rng())
  });
  let geometry = use_memo(move || ChartGeometry::new(&history.read()));

  // a new series invalidates the hovered index
  use_effect(move || {
    history.read();
    hovered.set(None);
  });

  let view_box = format!("0 0 {} {}", CANVAS_WIDTH, CANVAS_HEIGHT);
  let geo = geometry.read();
  let stats = *geo.stats();
  let (min, max, average, count) = (stats.min, stats.max, stats.average, stats.count);
  let [top_label, mid_label, bottom_label] = geo.axis_labels();
  let label = timeframe().label();
  let area = geo.area_path();
  let line_points = geo.line_path();
  let grid = geo.grid_lines().collect::<Vec<_>>();

  let tooltip = hovered().and_then(|idx| {
    let point = *geo.point(idx)?;
    let source = history.read().get(point.index).cloned()?;
    Some((point, source))
  });
  let hover_xy = tooltip.as_ref().map(|(p, _)| (p.x, p.y));

  rsx! {
    div {
      class: "chart-card",
      div {
        class: "chart-header",
        div {
          h3 { class: "chart-title", "{name} Price History" }
          p { class: "chart-subtitle", "{label}" }
        }
        div {
          class: "timeframe-buttons",
          for tf in Timeframe::ALL {
            button {
              class: if tf == timeframe() { "timeframe-button active" } else { "timeframe-button" },
              onclick: move |_| timeframe.set(tf),
              "{tf}"
            }
          }
        }
      }

      if !geo.is_drawable() {
        div { class: "chart-empty", "No historical data available" }
      } else {
        div {
          class: "stats-grid",
          div { class: "stat-card", span { class: "stat-label", "Minimum" } span { class: "stat-value", "₹{min:.2}" } }
          div { class: "stat-card", span { class: "stat-label", "Maximum" } span { class: "stat-value", "₹{max:.2}" } }
          div { class: "stat-card", span { class: "stat-label", "Average" } span { class: "stat-value", "₹{average:.2}" } }
          div { class: "stat-card", span { class: "stat-label", "Data Points" } span { class: "stat-value", "{count}" } }
        }
        div {
          class: "chart-body",
          div {
            class: "y-axis",
            span { "₹{top_label:.2}" }
            span { "₹{mid_label:.2}" }
            span { "₹{bottom_label:.2}" }
          }
          div {
            class: "chart-area",
            onmounted: move |evt| chart_el.set(Some(evt.data())),
            // measured on every move: scrolling or resizing shifts the rect
            onmousemove: move |evt| async move {
              let Some(el) = chart_el() else { return };
              let pointer_x = evt.client_coordinates().x;
              let rect = match el.get_client_rect().await {
                Ok(rect) => rect,
                Err(e) => {
                  warn!("could not measure chart: {:?}", e);
                  return;
                }
              };
              if !pointer_inside() {
                return;
              }
              if let Some(idx) = geometry.read().hover_index_at(pointer_x, rect.origin.x, rect.size.width) {
                hovered.set(Some(idx));
              }
            },
            onmouseenter: move |_| pointer_inside.set(true),
            onmouseleave: move |_| {
              pointer_inside.set(false);
              hovered.set(None);
            },
            svg {
              class: "chart-svg",
              view_box: "{view_box}",
              preserve_aspect_ratio: "none",
              for y in grid {
                line {
                  class: "grid-line",
                  x1: "0", y1: "{y}", x2: "{CANVAS_WIDTH}", y2: "{y}",
                  stroke_dasharray: "6 6"
                }
              }
              path { class: "chart-fill", d: "{area}" }
              polyline { class: "chart-line", points: "{line_points}", fill: "none" }
              if let Some((hx, hy)) = hover_xy {
                line {
                  class: "hover-line",
                  x1: "{hx}", y1: "0", x2: "{hx}", y2: "{CANVAS_HEIGHT}"
                }
                circle { class: "hover-dot", cx: "{hx}", cy: "{hy}", r: "6" }
              }
            }
            if let Some((point, source)) = tooltip {
              {
                let left = ChartGeometry::tooltip_left_pct(&point);
                let date = source.recorded_at.format("%d %b %Y").to_string();
                let price = source.price;
                rsx! {
                  div {
                    class: "chart-tooltip",
                    style: "left: {left}%;",
                    p { class: "tooltip-price", "₹{price:.2}" }
                    p { class: "tooltip-date", "{date}" }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
