//! Send capability of a member connection.
//!
//! 配送結果は `Result` ではなく `Delivery` で表す。配送失敗は異常ではなく、
//! 切断済みクライアントに対して日常的に起きる事象として扱う。

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Why a delivery to one member did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryFailure {
    /// The member's transport is gone
    Closed,
    /// The member did not accept the message within the delivery timeout
    TimedOut,
}

/// Outcome of pushing one message to one member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed(DeliveryFailure),
}

/// The means by which a message is pushed to one specific client.
///
/// Implementations may wait (e.g. on a full outbound queue); the broadcast engine bounds every
/// call with its delivery timeout.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn deliver(&self, message: &str) -> Delivery;

    /// Give up the send capability once the member has been unregistered.
    ///
    /// Later deliveries fail with `Closed`.
    async fn close(&self) {}
}
