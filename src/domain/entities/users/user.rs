//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 비밀번호 해시를 포함하는 내부 전용 표현이며, 외부 응답으로는
//! `UserResponse` 변환을 거쳐야만 나갈 수 있습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 역할 (닫힌 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Moderator,
    Vip,
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 객체입니다.
/// `password` 필드는 해시된 값이며 직렬화 대상이 아닙니다
/// (이 타입은 의도적으로 `Serialize`를 구현하지 않습니다).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 불투명한 고유 식별자 (저장소가 부여)
    pub id: String,
    /// 사용자 이메일 (unique, 소문자 정규화 저장)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 코인 잔액 (음수 불가)
    pub coins_balance: i64,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 기본 역할 USER, 코인 잔액 0으로 시작하며 생성/수정 시간이 현재로
    /// 설정됩니다. 이메일 소문자 정규화는 호출자(저장소) 책임입니다.
    pub fn new(
        id: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            email,
            password: password_hash,
            first_name,
            last_name,
            role: UserRole::default(),
            coins_balance: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "user-1".to_string(),
            "a@x.com".to_string(),
            "hashed".to_string(),
            "A".to_string(),
            "B".to_string(),
        );

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.coins_balance, 0);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_role_wire_representation() {
        assert_eq!(
            serde_json::to_value(UserRole::Admin).unwrap(),
            serde_json::json!("ADMIN")
        );
        assert_eq!(
            serde_json::to_value(UserRole::User).unwrap(),
            serde_json::json!("USER")
        );
    }
}
