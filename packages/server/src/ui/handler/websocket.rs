//! WebSocket session handler.
//!
//! 1 接続につき 2 つのタスクを動かす。
//!
//! - 受信タスク: クライアントからのテキストフレームを `SendMessageUseCase::pump` に流す
//! - 送信タスク: 送信キューの中身をソケットに書き込む
//!
//! 受信タスクが終わったら送信タスクを止める。送信タスクが先に終わった場合は受信タスクに
//! 停止を通知し、送信中のメッセージの配送が終わるのを待ってからセッションを閉じる。

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{
    Stream,
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::sync::{mpsc, oneshot};

use crate::{
    domain::{RoomId, Username},
    infrastructure::message_sink::WebSocketSink,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path((room_id, username)): Path<(String, String)>,
) -> Result<impl IntoResponse, StatusCode> {
    let room_id = RoomId::try_from(room_id).map_err(|e| {
        tracing::warn!("Rejecting WebSocket: invalid room_id: {}", e);
        StatusCode::BAD_REQUEST
    })?;
    let username = Username::try_from(username).map_err(|e| {
        tracing::warn!("Rejecting WebSocket: invalid username: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    if !state.check_room_usecase.execute(&room_id).await {
        tracing::warn!("Rejecting WebSocket: room '{}' not found", room_id);
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room_id, username)))
}

/// Spawns a task that writes the session's outbound queue to the socket.
///
/// The task ends when the queue is closed (the member was unregistered) or the socket write
/// fails.
fn pusher_loop(
    mut rx: mpsc::Receiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
        let _ = sender.close().await;
    })
}

/// Text frames of the socket until the peer closes or the transport errors.
fn inbound_texts(receiver: SplitStream<WebSocket>) -> impl Stream<Item = String> {
    receiver
        .take_while(|msg| {
            let keep_going = match msg {
                Ok(Message::Close(_)) => false,
                Ok(_) => true,
                Err(e) => {
                    tracing::debug!("WebSocket error: {}", e);
                    false
                }
            };
            std::future::ready(keep_going)
        })
        .filter_map(|msg| {
            let text = match msg {
                Ok(Message::Text(text)) => Some(text.as_str().to_owned()),
                // Ping/pong is answered by axum itself
                _ => None,
            };
            std::future::ready(text)
        })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    room_id: RoomId,
    username: Username,
) {
    let (sender, receiver) = socket.split();
    let (sink, rx) = WebSocketSink::channel(state.send_buffer);

    let session = match state
        .open_session_usecase
        .execute(room_id, username, Arc::new(sink))
        .await
    {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Failed to open session: {}", e);
            return;
        }
    };

    let mut send_task = pusher_loop(rx, sender);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let state_clone = state.clone();
    let session_clone = session.clone();
    let mut recv_task = tokio::spawn(async move {
        state_clone
            .send_message_usecase
            .pump(&session_clone, inbound_texts(receiver), stop_rx)
            .await
    });

    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => {
            // The reader may be in the middle of a publish; let it finish.
            let _ = stop_tx.send(());
            if let Err(e) = recv_task.await {
                tracing::warn!("Receive task for '{}' failed: {}", session.username(), e);
            }
        }
    };

    state.close_session_usecase.execute(&session).await;
}
