//! WebSocket を使った MessageSink 実装
//!
//! ## 責務
//!
//! - 接続ごとの有界送信キュー（`mpsc::Sender`）へのメッセージ投入
//!
//! ## 設計ノート
//!
//! WebSocket そのものは UI 層（`ui/handler/websocket.rs`）が持ち、キューの受信側を
//! 読み出してソケットに書き込む。この実装はキューの送信側だけを持つ。
//!
//! キューは有界なので、読み出しが止まったクライアントに対する `deliver` は
//! 空きが出るまで待つ。待ち時間の上限はブロードキャストエンジン側のタイムアウトで決まる。
//!
//! `close` で送信側を手放すと、受信側は残りのメッセージを読み切った後に `None` を返す。
//! UI 層はそれを合図にソケットを閉じる。

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use crate::domain::{Delivery, DeliveryFailure, MessageSink};

pub struct WebSocketSink {
    tx: Mutex<Option<mpsc::Sender<String>>>,
}

impl WebSocketSink {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    /// Create a sink together with the receiving end of its outbound queue.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl MessageSink for WebSocketSink {
    async fn deliver(&self, message: &str) -> Delivery {
        // Clone out so the lock is not held while waiting for queue space.
        let Some(tx) = self.tx.lock().await.clone() else {
            return Delivery::Failed(DeliveryFailure::Closed);
        };
        match tx.send(message.to_string()).await {
            Ok(()) => Delivery::Delivered,
            Err(_) => Delivery::Failed(DeliveryFailure::Closed),
        }
    }

    async fn close(&self) {
        self.tx.lock().await.take();
    }
}
