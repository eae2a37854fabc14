//! 인증된 사용자 모델
//!
//! 인가 가드가 베어러 토큰 검증에 성공했을 때 핸들러에 노출하는
//! 인증된 주체(principal)입니다.

use serde::{Deserialize, Serialize};

/// 인증된 주체
///
/// 토큰 페이로드에서 복원된 사용자 식별 정보만을 담습니다.
/// 프로필 유스케이스는 이 값의 `user_id`로 최신 사용자 정보를 조회합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 ID (토큰의 sub)
    pub user_id: String,
    /// 사용자 이메일 (토큰의 email)
    pub email: String,
}
