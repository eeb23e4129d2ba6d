//! Broadcast Engine
//!
//! ルーム内の全メンバーへ 1 つのメッセージを配送する。
//!
//! ## 配送の規則
//!
//! - 配送対象は `MembershipRegistry::members_of` のスナップショット。配送中の join / leave は
//!   スナップショットに影響しない
//! - メンバーごとの配送は独立しており、並行に行う。1 件の失敗が他のメンバーへの配送を止めない
//! - 各配送は `delivery_timeout` で打ち切る。失敗したメンバーは登録解除され、
//!   残りのメンバーに "left" 通知が送られる。リトライはしない
//!
//! ## 直列化
//!
//! ルームごとに 1 つのゲート（`tokio::sync::Mutex`）を持ち、「履歴への追記 → スナップショット →
//! 配送」をその中で行う。これにより履歴の順序と配送の順序が一致する。別ルームのゲートは
//! 互いに独立している。

use std::{collections::VecDeque, sync::Arc, time::Duration};

use dashmap::DashMap;
use futures_util::future::join_all;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, Delivery, DeliveryFailure, MemberConnection, MembershipRegistry, RoomId,
    RoomRepository,
};

use super::{error::BroadcastError, left_notice};

/// Result of one fan-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Members that accepted the message
    pub delivered: usize,
    /// Members whose delivery failed and who were unregistered by this fan-out
    pub pruned: Vec<ConnectionId>,
}

pub struct BroadcastEngine {
    repository: Arc<dyn RoomRepository>,
    registry: Arc<dyn MembershipRegistry>,
    delivery_timeout: Duration,
    gates: DashMap<RoomId, Arc<Mutex<()>>>,
}

impl BroadcastEngine {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        registry: Arc<dyn MembershipRegistry>,
        delivery_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            registry,
            delivery_timeout,
            gates: DashMap::new(),
        }
    }

    fn gate(&self, room_id: &RoomId) -> Arc<Mutex<()>> {
        self.gates.entry(room_id.clone()).or_default().clone()
    }

    /// Deliver `message` to the current members of the room without recording it.
    ///
    /// # Errors
    ///
    /// `RoomNotFound` if the Room Store does not know the room. Per-member failures never
    /// surface here.
    pub async fn broadcast(
        &self,
        room_id: &RoomId,
        message: &str,
    ) -> Result<BroadcastReport, BroadcastError> {
        if !self.repository.exists(room_id).await {
            return Err(BroadcastError::RoomNotFound(room_id.to_string()));
        }

        let gate = self.gate(room_id);
        let _guard = gate.lock().await;

        let (report, pruned) = self.fan_out(room_id, message).await;
        self.announce_departures(room_id, pruned).await?;
        Ok(report)
    }

    /// Append `message` to the room's history and deliver it to the current members.
    pub async fn publish(
        &self,
        room_id: &RoomId,
        message: String,
    ) -> Result<BroadcastReport, BroadcastError> {
        if !self.repository.exists(room_id).await {
            return Err(BroadcastError::RoomNotFound(room_id.to_string()));
        }

        let gate = self.gate(room_id);
        let _guard = gate.lock().await;

        self.repository
            .append_message(room_id, message.clone())
            .await?;
        let (report, pruned) = self.fan_out(room_id, &message).await;
        self.announce_departures(room_id, pruned).await?;
        Ok(report)
    }

    /// Publish a "left" notice for each pruned member. Notices can prune further members, so
    /// this drains a queue until no new departures appear. Caller must hold the room's gate.
    async fn announce_departures(
        &self,
        room_id: &RoomId,
        pruned: Vec<Arc<MemberConnection>>,
    ) -> Result<(), BroadcastError> {
        let mut queue: VecDeque<String> = pruned
            .iter()
            .map(|member| left_notice(member.username.as_str()))
            .collect();

        while let Some(notice) = queue.pop_front() {
            self.repository
                .append_message(room_id, notice.clone())
                .await?;
            let (_, more) = self.fan_out(room_id, &notice).await;
            queue.extend(
                more.iter()
                    .map(|member| left_notice(member.username.as_str())),
            );
        }
        Ok(())
    }

    async fn fan_out(
        &self,
        room_id: &RoomId,
        message: &str,
    ) -> (BroadcastReport, Vec<Arc<MemberConnection>>) {
        let members = self.registry.members_of(room_id).await;
        let timeout = self.delivery_timeout;

        let outcomes = join_all(members.iter().map(|member| async move {
            tokio::time::timeout(timeout, member.deliver(message))
                .await
                .unwrap_or(Delivery::Failed(DeliveryFailure::TimedOut))
        }))
        .await;

        let mut report = BroadcastReport::default();
        let mut pruned = Vec::new();
        for (member, outcome) in members.into_iter().zip(outcomes) {
            match outcome {
                Delivery::Delivered => report.delivered += 1,
                Delivery::Failed(failure) => {
                    tracing::warn!(
                        "Delivery to '{}' ({}) in room '{}' failed: {:?}",
                        member.username,
                        member.id,
                        room_id,
                        failure
                    );
                    // A concurrent explicit disconnect may have removed it already.
                    if self.registry.unregister(room_id, &member).await {
                        member.close().await;
                        report.pruned.push(member.id);
                        pruned.push(member);
                    }
                }
            }
        }

        tracing::debug!(
            "Broadcast to room '{}': {} delivered, {} pruned",
            room_id,
            report.delivered,
            report.pruned.len()
        );
        (report, pruned)
    }
}
