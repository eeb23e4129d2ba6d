//! UseCase: メッセージ送信
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() と pump()
//! - `"{username}: {text}"` 形式で履歴に追加され、全メンバーに配送されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：lobby / alice / "hi" の一連の流れ
//! - 順序：同一セッションからの m1, m2 が順番通りに記録・配送される
//! - 異常系：存在しないルームへの送信
//! - 停止：送信中に停止要求が来ても、そのメッセージの配送は最後まで行われる

use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use std::future::Future;

use super::{
    BroadcastEngine, BroadcastReport, chat_line, error::SendMessageError,
    open_session::SessionHandle,
};

pub struct SendMessageUseCase {
    broadcast: Arc<BroadcastEngine>,
}

impl SendMessageUseCase {
    pub fn new(broadcast: Arc<BroadcastEngine>) -> Self {
        Self { broadcast }
    }

    /// Record `"{username}: {text}"` in the room's history and broadcast it.
    pub async fn execute(
        &self,
        session: &SessionHandle,
        text: &str,
    ) -> Result<BroadcastReport, SendMessageError> {
        let line = chat_line(session.username().as_str(), text);
        let report = self.broadcast.publish(session.room_id(), line).await?;
        Ok(report)
    }

    /// Submit every inbound text of a session, in order, until the stream ends or `stop`
    /// resolves.
    ///
    /// `stop` is only observed between messages: a message already being published is always
    /// recorded and delivered in full. Returns the number of messages submitted.
    pub async fn pump<S, F>(&self, session: &SessionHandle, incoming: S, stop: F) -> usize
    where
        S: Stream<Item = String>,
        F: Future,
    {
        let mut incoming = std::pin::pin!(incoming.take_until(stop));
        let mut submitted = 0;
        while let Some(text) = incoming.next().await {
            match self.execute(session, &text).await {
                Ok(_) => submitted += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to submit message from '{}': {}",
                        session.username(),
                        e
                    );
                }
            }
        }
        submitted
    }
}
