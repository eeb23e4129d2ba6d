//! Value objects.
//!
//! 文字列をそのまま扱わず、生成時に検証済みの型として扱う。

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

const ROOM_ID_MAX_LEN: usize = 64;
const USERNAME_MAX_LEN: usize = 32;

fn validate(field: &'static str, raw: String, max: usize) -> Result<String, ValueObjectError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValueObjectError::Empty(field));
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValueObjectError::TooLong { field, max, actual });
    }
    if trimmed.contains('/') {
        return Err(ValueObjectError::InvalidCharacter(field));
    }
    Ok(trimmed.to_string())
}

/// Room identifier (unique key of a room)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate("room_id", value, ROOM_ID_MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a member. Informational only, not an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate("username", value, USERNAME_MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one live session. Two sessions of the same user never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_is_trimmed() {
        // テスト項目: 前後の空白は取り除かれる
        // given (前提条件):
        let raw = "  lobby ".to_string();

        // when (操作):
        let room_id = RoomId::new(raw);

        // then (期待する結果):
        assert_eq!(room_id.unwrap().as_str(), "lobby");
    }

    #[test]
    fn test_room_id_rejects_blank() {
        // テスト項目: 空白のみの room_id はエラーになる
        // given (前提条件):
        let raw = "   ".to_string();

        // when (操作):
        let result = RoomId::try_from(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::Empty("room_id")));
    }

    #[test]
    fn test_room_id_rejects_slash() {
        // テスト項目: パス区切り文字を含む room_id はエラーになる
        // given (前提条件):
        let raw = "a/b".to_string();

        // when (操作):
        let result = RoomId::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::InvalidCharacter("room_id")));
    }

    #[test]
    fn test_username_length_limit() {
        // テスト項目: 上限ちょうどは許可され、超えるとエラーになる
        // given (前提条件):
        let at_limit = "a".repeat(USERNAME_MAX_LEN);
        let over_limit = "a".repeat(USERNAME_MAX_LEN + 1);

        // when (操作):
        let ok = Username::new(at_limit);
        let err = Username::new(over_limit);

        // then (期待する結果):
        assert!(ok.is_ok());
        assert_eq!(
            err,
            Err(ValueObjectError::TooLong {
                field: "username",
                max: USERNAME_MAX_LEN,
                actual: USERNAME_MAX_LEN + 1,
            })
        );
    }

    #[test]
    fn test_connection_ids_are_unique() {
        // テスト項目: 生成される ConnectionId は毎回異なる
        // given (前提条件):

        // when (操作):
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(a, b);
    }
}
