//! Clock abstraction and timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current time, injectable for tests.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

/// Render epoch milliseconds as an RFC 3339 UTC string with millisecond precision.
///
/// Values outside chrono's representable range fall back to the epoch.
pub fn millis_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // テスト項目: SystemClock が現実的な時刻を返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let now = clock.now_millis();

        // then (期待する結果): 2020-01-01T00:00:00Z 以降
        assert!(now > 1_577_836_800_000);
    }

    #[test]
    fn test_fixed_clock_never_moves() {
        // テスト項目: FixedClock は何度呼んでも同じ時刻を返す
        // given (前提条件):
        let clock = FixedClock::new(1_700_000_000_000);

        // when (操作):
        let first = clock.now_millis();
        let second = clock.now_millis();

        // then (期待する結果):
        assert_eq!(first, 1_700_000_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_millis_to_rfc3339_keeps_milliseconds() {
        // テスト項目: ミリ秒を含む UTC の RFC 3339 文字列に変換される
        // given (前提条件): 2023-01-01T00:00:00.123Z
        let millis = 1_672_531_200_123;

        // when (操作):
        let rendered = millis_to_rfc3339(millis);

        // then (期待する結果):
        assert_eq!(rendered, "2023-01-01T00:00:00.123Z");
    }

    #[test]
    fn test_millis_to_rfc3339_epoch() {
        // テスト項目: 0 はエポックに変換される
        // given (前提条件):
        let millis = 0;

        // when (操作):
        let rendered = millis_to_rfc3339(millis);

        // then (期待する結果):
        assert_eq!(rendered, "1970-01-01T00:00:00.000Z");
    }
}
