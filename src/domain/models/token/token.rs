//! 토큰 페이로드 모델
//!
//! 토큰 프로바이더가 서명하고 검증 시 복원하는 페이로드입니다.

use serde::{Deserialize, Serialize};

/// 서명 대상 페이로드
///
/// `sign`으로 만든 토큰을 `verify`하면 동일한 `{sub, email}`이
/// 그대로 복원되어야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// 사용자 ID
    pub sub: String,
    /// 사용자 이메일
    pub email: String,
}

impl TokenPayload {
    pub fn new(sub: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            email: email.into(),
        }
    }
}
