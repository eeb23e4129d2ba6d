//! UseCase: セッション終了
//!
//! 明示的な切断でも配送失敗による切断でも、登録解除の経路は同じ。配送失敗で既に
//! 取り除かれていた場合は離脱通知を重ねて送らない。

use std::sync::Arc;

use crate::domain::MembershipRegistry;

use super::{BroadcastEngine, left_notice, open_session::SessionHandle};

pub struct CloseSessionUseCase {
    registry: Arc<dyn MembershipRegistry>,
    broadcast: Arc<BroadcastEngine>,
}

impl CloseSessionUseCase {
    pub fn new(registry: Arc<dyn MembershipRegistry>, broadcast: Arc<BroadcastEngine>) -> Self {
        Self {
            registry,
            broadcast,
        }
    }

    /// Unregister the session and tell the remaining members.
    ///
    /// Returns `true` if this call removed the member (and therefore announced the departure).
    pub async fn execute(&self, session: &SessionHandle) -> bool {
        let removed = self
            .registry
            .unregister(session.room_id(), session.connection())
            .await;
        if !removed {
            tracing::debug!(
                "Session '{}' was already removed from room '{}'",
                session.connection_id(),
                session.room_id()
            );
            return false;
        }
        session.connection().close().await;

        tracing::info!(
            "Session '{}' of '{}' closed in room '{}'",
            session.connection_id(),
            session.username(),
            session.room_id()
        );
        if let Err(e) = self
            .broadcast
            .publish(session.room_id(), left_notice(session.username().as_str()))
            .await
        {
            tracing::warn!(
                "Failed to announce departure of '{}': {}",
                session.username(),
                e
            );
        }
        true
    }
}
