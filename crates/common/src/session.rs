//! One relay subscription, from connect to release.
//!
//! The loop only sees text frames: any sink of outgoing frames and any stream
//! of incoming ones will do, so the browser socket and an in-memory pair are
//! driven the same way.

use std::fmt::Display;
use futures::{Sink, SinkExt, Stream, StreamExt};
use thiserror::Error;
use tokio::sync::{mpsc::UnboundedSender, oneshot};
use tracing::{debug, error, info, warn};

use crate::{
  model::Commodity,
  relay::{decode_frame, pong_frame, subscribe_frame, unsubscribe_frame, RelayEvent, CHANNEL}
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
  #[error("relay socket read failed: {0}")]
  Read(String),
  #[error("relay socket write failed: {0}")]
  Write(String)
}

/// Why a session stopped without a socket error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
  /// shutdown was signalled, or its sender dropped
  Shutdown,
  /// nobody is reading updates any more
  ConsumerGone,
  /// the relay closed the socket
  RemoteClosed
}

enum Flow {
  Continue,
  ConsumerGone
}

/// Runs the subscription until shutdown, consumer loss or socket end.
///
/// Shutdown and consumer loss are checked before any buffered frame, and
/// both end in `pusher:unsubscribe` followed by closing the sink. A socket
/// error still closes the sink before the error is returned.
pub async fn run_session<W, R, E>(
  mut write: W,
  mut read: R,
  update_tx: UnboundedSender<Commodity>,
  mut shutdown: oneshot::Receiver<()>
) -> Result<SessionEnd, SessionError>
where
  W: Sink<String> + Unpin,
  W::Error: Display,
  R: Stream<Item = Result<String, E>> + Unpin,
  E: Display
{
  let end = loop {
    tokio::select! {
      biased;
      _ = &mut shutdown => break SessionEnd::Shutdown,
      _ = update_tx.closed() => break SessionEnd::ConsumerGone,
      frame = read.next() => match frame {
        Some(Ok(text)) => match handle_frame(&text, &mut write, &update_tx).await {
          Ok(Flow::Continue) => {},
          Ok(Flow::ConsumerGone) => break SessionEnd::ConsumerGone,
          Err(e) => {
            close(&mut write).await;
            return Err(e);
          }
        },
        Some(Err(e)) => {
          close(&mut write).await;
          return Err(SessionError::Read(e.to_string()));
        },
        None => {
          warn!("relay socket closed by remote");
          return Ok(SessionEnd::RemoteClosed);
        }
      }
    }
  };

  if let Err(e) = write.send(unsubscribe_frame(CHANNEL)).await {
    warn!("failed to unsubscribe from {}: {}", CHANNEL, e);
  }
  close(&mut write).await;
  info!("relay session released ({:?})", end);
  Ok(end)
}

async fn close<W>(write: &mut W)
where
  W: Sink<String> + Unpin,
  W::Error: Display
{
  if let Err(e) = write.close().await {
    warn!("failed to close relay socket: {}", e);
  }
}

async fn handle_frame<W>(text: &str, write: &mut W, update_tx: &UnboundedSender<Commodity>) -> Result<Flow, SessionError>
where
  W: Sink<String> + Unpin,
  W::Error: Display
{
  let event = match decode_frame(text) {
    Ok(event) => event,
    Err(e) => {
      warn!("undecodable relay frame: {}", e);
      return Ok(Flow::Continue);
    }
  };

  match event {
    RelayEvent::ConnectionEstablished { socket_id, .. } => {
      info!("relay connected with socket id {}", socket_id);
      write.send(subscribe_frame(CHANNEL)).await.map_err(|e| SessionError::Write(e.to_string()))?;
    },
    RelayEvent::SubscriptionSucceeded { channel } => info!("subscribed to {}", channel),
    RelayEvent::Ping => write.send(pong_frame()).await.map_err(|e| SessionError::Write(e.to_string()))?,
    RelayEvent::Error { code, message } => error!("relay error {:?}: {}", code, message),
    RelayEvent::PriceUpdate(commodity) => {
      if update_tx.send(commodity).is_err() {
        return Ok(Flow::ConsumerGone);
      }
    },
    RelayEvent::Other { event, channel } => debug!("unhandled relay event {} on {:?}", event, channel)
  }
  Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::channel::mpsc as fake;
  use serde_json::{json, Value};
  use tokio::sync::mpsc;

  const GOLD: &str = r#"{"id":"1","name":"Gold","type":"gold","current_price":63821.4,"unit":"₹/10g","last_updated":"2025-01-02T03:04:05Z","created_at":"2025-01-02T03:04:05Z"}"#;

  type Inbound = fake::UnboundedSender<Result<String, String>>;
  type Outbound = fake::UnboundedReceiver<String>;
  type Socket = (fake::UnboundedSender<String>, fake::UnboundedReceiver<Result<String, String>>);

  fn socket() -> (Socket, Inbound, Outbound) {
    let (out_tx, out_rx) = fake::unbounded::<String>();
    let (in_tx, in_rx) = fake::unbounded::<Result<String, String>>();
    ((out_tx, in_rx), in_tx, out_rx)
  }

  fn push(inbound: &Inbound, frame: Value) {
    inbound.unbounded_send(Ok(frame.to_string())).unwrap();
  }

  fn connected() -> Value {
    json!({"event": "pusher:connection_established", "data": "{\"socket_id\":\"1.2\",\"activity_timeout\":120}"})
  }

  fn gold_update() -> Value {
    json!({"event": "price-update", "channel": CHANNEL, "data": GOLD})
  }

  // collects everything written; ends only once the sink was closed or dropped
  async fn sent(outbound: Outbound) -> Vec<String> {
    outbound.collect().await
  }

  #[tokio::test]
  async fn subscribes_pongs_forwards_and_releases_on_shutdown() {
    let ((write, read), inbound, outbound) = socket();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    push(&inbound, connected());
    push(&inbound, json!({"event": "pusher:ping", "data": {}}));
    push(&inbound, gold_update());

    let session = tokio::spawn(run_session(write, read, update_tx, shutdown_rx));

    let gold = update_rx.recv().await.unwrap();
    assert_eq!(gold.id, "1");
    assert_eq!(gold.current_price, 63821.4);

    shutdown_tx.send(()).unwrap();
    assert_eq!(session.await.unwrap(), Ok(SessionEnd::Shutdown));
    assert_eq!(sent(outbound).await, vec![subscribe_frame(CHANNEL), pong_frame(), unsubscribe_frame(CHANNEL)]);
  }

  #[tokio::test]
  async fn unmount_with_buffered_update_still_unsubscribes() {
    let ((write, read), inbound, outbound) = socket();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    // consumer gone and shutdown fired while an update sits unread
    push(&inbound, gold_update());
    drop(update_rx);
    shutdown_tx.send(()).unwrap();

    let end = run_session(write, read, update_tx, shutdown_rx).await;
    assert_eq!(end, Ok(SessionEnd::Shutdown));
    assert_eq!(sent(outbound).await, vec![unsubscribe_frame(CHANNEL)]);
  }

  #[tokio::test]
  async fn lost_consumer_releases_without_shutdown() {
    let ((write, read), inbound, outbound) = socket();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let (_shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    push(&inbound, gold_update());
    drop(update_rx);

    let end = run_session(write, read, update_tx, shutdown_rx).await;
    assert_eq!(end, Ok(SessionEnd::ConsumerGone));
    assert_eq!(sent(outbound).await, vec![unsubscribe_frame(CHANNEL)]);
  }

  #[tokio::test]
  async fn dropped_shutdown_sender_counts_as_shutdown() {
    let ((write, read), _inbound, outbound) = socket();
    let (update_tx, _update_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    drop(shutdown_tx);

    let end = run_session(write, read, update_tx, shutdown_rx).await;
    assert_eq!(end, Ok(SessionEnd::Shutdown));
    assert_eq!(sent(outbound).await, vec![unsubscribe_frame(CHANNEL)]);
  }

  #[tokio::test]
  async fn remote_close_ends_quietly() {
    let ((write, read), inbound, outbound) = socket();
    let (update_tx, _update_rx) = mpsc::unbounded_channel();
    let (_shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    push(&inbound, connected());
    push(&inbound, json!({"event": "pusher:error", "data": {"code": 4201, "message": "Pong reply not received"}}));
    drop(inbound);

    let end = run_session(write, read, update_tx, shutdown_rx).await;
    assert_eq!(end, Ok(SessionEnd::RemoteClosed));
    assert_eq!(sent(outbound).await, vec![subscribe_frame(CHANNEL)]);
  }

  #[tokio::test]
  async fn read_error_closes_the_socket() {
    let ((write, read), inbound, outbound) = socket();
    let (update_tx, _update_rx) = mpsc::unbounded_channel();
    let (_shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    push(&inbound, json!({"event": "not json at all"}));
    inbound.unbounded_send(Err("connection reset".to_string())).unwrap();

    let end = run_session(write, read, update_tx, shutdown_rx).await;
    assert_eq!(end, Err(SessionError::Read("connection reset".into())));
    assert!(sent(outbound).await.is_empty());
  }
}
