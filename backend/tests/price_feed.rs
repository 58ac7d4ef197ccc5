use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use backend::{
  midwares::app_state::CommodityStore,
  price_simulator::{fixtures::seed_commodities, sim::{PriceSimulator, PriceUpdate}, ticker::Ticker},
  publisher::{pusher::TriggerBody, PublishError, Publisher}
};
use chrono::Utc;
use pricepredict_common::{board::CommodityBoard, relay::{decode_frame, RelayEvent}};
use serde_json::json;
use std::time::Duration;

#[derive(Default)]
struct Recorder {
  seen: Mutex<Vec<PriceUpdate>>
}

#[async_trait]
impl Publisher for Recorder {
  async fn publish(&self, update: &PriceUpdate) -> Result<(), PublishError> {
    self.seen.lock().unwrap().push(update.clone());
    Ok(())
  }
}

// what a subscriber receives for a triggered event
fn as_delivered_frame(update: &PriceUpdate) -> String {
  let body = TriggerBody::for_update(update).unwrap();
  json!({"event": body.name, "channel": body.channels[0], "data": body.data}).to_string()
}

#[tokio::test]
async fn gold_tick_reaches_only_the_gold_card() {
  // re-seed until the first tick lands on Gold
  for seed in 0..1_000u64 {
    let store = CommodityStore::new(seed_commodities(Utc::now()));
    let recorder = Arc::new(Recorder::default());
    let mut ticker = Ticker::new(store.clone(), PriceSimulator::seeded(seed).unwrap(), recorder.clone(), Duration::from_secs(3));

    let initial = store.snapshot().await;
    let (update, handle) = ticker.tick().await.unwrap();
    if update.commodity.id != "1" {
      continue;
    }
    handle.await.unwrap();

    let published = recorder.seen.lock().unwrap().clone();
    assert_eq!(published.len(), 1);
    let price = published[0].commodity.current_price;
    assert!((62245.0..=64135.0).contains(&price), "gold published at {price}");

    let mut board = CommodityBoard::new(initial.clone());
    let event = decode_frame(&as_delivered_frame(&published[0])).unwrap();
    let RelayEvent::PriceUpdate(gold) = event else {
      panic!("expected a price update, got {event:?}");
    };
    assert!(board.apply_update(gold));

    assert_eq!(board.get("1").unwrap().current_price, price);
    for other in initial.iter().filter(|c| c.id != "1") {
      assert_eq!(board.get(&other.id), Some(other));
    }
    return;
  }
  panic!("no seed picked Gold on the first tick");
}

#[tokio::test]
async fn update_for_unknown_id_never_adds_a_card() {
  let store = CommodityStore::new(seed_commodities(Utc::now()));
  let mut sim = PriceSimulator::seeded(5).unwrap();
  let mut board = CommodityBoard::new(store.snapshot().await);
  let before = board.clone();

  let mut stray = store.apply_tick(&mut sim, Utc::now()).await.unwrap();
  stray.id = "99".to_string();
  let frame = as_delivered_frame(&PriceUpdate::new(stray));

  let RelayEvent::PriceUpdate(c) = decode_frame(&frame).unwrap() else {
    panic!("stray id should still decode as a price update");
  };
  assert!(!board.apply_update(c));
  assert_eq!(board, before);
}
