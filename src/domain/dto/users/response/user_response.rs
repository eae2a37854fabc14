//! 사용자 응답 DTO
//!
//! 외부로 나가는 유일한 사용자 표현입니다. `From<User>` 변환이 모든 필드를
//! 명시적으로 분해하므로 비밀번호 해시는 타입 수준에서 제외됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{User, UserRole};

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub coins_balance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        // 전체 필드 분해: User에 필드가 추가되면 여기서 컴파일이 깨진다
        let User {
            id,
            email,
            password: _,
            first_name,
            last_name,
            role,
            coins_balance,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            role,
            coins_balance,
            created_at,
            updated_at,
        }
    }
}

/// 회원가입/로그인 응답 DTO (토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub user: UserResponse,
    pub token: String,
}

impl AuthTokenResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            user: UserResponse::from(user),
            token,
        }
    }
}
