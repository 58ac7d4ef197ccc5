use dioxus::logger::tracing::{info, warn};
use futures::{future, SinkExt};
use futures_util::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message, WebSocketError};
use pricepredict_common::{
  relay::socket_url,
  session::{run_session, SessionEnd},
  Commodity
};
use tokio::sync::{mpsc::UnboundedSender, oneshot};

use crate::utils::server::{AppError, PUSHER_CLUSTER, PUSHER_KEY};

/// Holds one relay connection open until `shutdown` fires (or its sender is
/// dropped, or `update_tx` loses its reader), forwarding price updates.
///
/// Every exit short of a remote close unsubscribes and closes the socket. A
/// socket that drops on its own is not reopened.
pub async fn run_relay_session(update_tx: UnboundedSender<Commodity>, shutdown: oneshot::Receiver<()>) -> Result<(), AppError> {
  let ws = WebSocket::open(&socket_url(PUSHER_CLUSTER, PUSHER_KEY))
    .map_err(|e| AppError::WsConnectionError(e.to_string()))?;
  let (write, read) = ws.split();

  let write = write.with(|frame: String| future::ready(Ok::<_, WebSocketError>(Message::Text(frame))));
  let read = read.filter_map(|msg| future::ready(match msg {
    Ok(Message::Text(text)) => Some(Ok(text)),
    Ok(Message::Bytes(_)) => {
      warn!("ignoring binary frame from relay");
      None
    },
    Err(e) => Some(Err(e))
  }));

  match run_session(write, read, update_tx, shutdown).await {
    Ok(SessionEnd::RemoteClosed) => info!("relay closed the session"),
    Ok(end) => info!("relay session ended: {:?}", end),
    Err(e) => return Err(AppError::WsConnectionError(e.to_string()))
  }
  Ok(())
}
