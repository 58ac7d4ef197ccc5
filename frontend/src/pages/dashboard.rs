use std::{cell::RefCell, rc::Rc};
use dioxus::{logger::tracing::{error, info}, prelude::*};
use pricepredict_common::{
  board::CommodityBoard,
  predictions::{prediction_for, static_predictions},
  Commodity
};
use tokio::sync::{mpsc, oneshot};

use crate::{
  components::{commodity_card::CommodityCard, historical_chart::HistoricalChart},
  utils::{relay_client::run_relay_session, server::fetch_commodities}
};

type ShutdownHandle = Rc<RefCell<Option<oneshot::Sender<()>>>>;

#[component]
pub fn Dashboard() -> Element {
  static CSS: Asset = asset!("/assets/dashboard.css");

  let mut board: Signal<CommodityBoard> = use_signal(CommodityBoard::default);
  let mut loading = use_signal(|| true);
  // a copy taken on click, so live ticks do not regenerate the chart
  let mut selected: Signal<Option<Commodity>> = use_signal(|| None);
  let predictions = use_hook(static_predictions);

  // initial load, no retry; a failure leaves the loading view up
  use_future(move || async move {
    match fetch_commodities().await {
      Ok(list) => {
        info!("loaded {} commodities", list.len());
        board.write().replace_all(list);
        loading.set(false);
      },
      Err(e) => error!("failed to fetch commodities: {}", e)
    }
  });

  // Relay subscription. The session runs outside this scope so it can still
  // unsubscribe after the page unmounts.
  let shutdown: ShutdownHandle = use_hook(|| {
    let (update_tx, mut update_rx) = mpsc::unbounded_channel::<Commodity>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    spawn_forever(async move {
      if let Err(e) = run_relay_session(update_tx, shutdown_rx).await {
        error!("relay session failed: {}", e);
      }
    });

    spawn(async move {
      while let Some(update) = update_rx.recv().await {
        board.write().apply_update(update);
      }
    });

    Rc::new(RefCell::new(Some(shutdown_tx)))
  });

  use_drop(move || {
    if let Some(tx) = shutdown.borrow_mut().take() {
      let _ = tx.send(());
    }
  });

  let selected_id = selected().map(|c| c.id);
  let cards = board
    .read()
    .commodities()
    .iter()
    .map(|c| {
      let prediction = prediction_for(&predictions, &c.id).cloned();
      let is_selected = selected_id.as_deref() == Some(c.id.as_str());
      (c.id.clone(), c.clone(), prediction, is_selected)
    })
    .collect::<Vec<_>>();

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "dashboard",
      div {
        class: "dashboard-header",
        h1 { "Commodity Dashboard" }
        p { "Live prices with forecast targets. Select a commodity to view its price history." }
      }
      if loading() {
        div {
          class: "loading",
          div { class: "spinner" }
          p { "Loading commodities..." }
        }
      } else {
        div {
          class: "commodity-grid",
          for (id, commodity, prediction, is_selected) in cards {
            CommodityCard {
              key: "{id}",
              commodity,
              prediction,
              selected: is_selected,
              on_select: move |c: Commodity| selected.set(Some(c))
            }
          }
        }
        if let Some(Commodity { id, name, current_price, .. }) = selected() {
          div {
            class: "chart-section",
            button {
              class: "close-button",
              onclick: move |_| selected.set(None),
              "Close"
            }
            HistoricalChart {
              commodity_id: id,
              name,
              base_price: current_price
            }
          }
        }
      }
    }
  }
}
