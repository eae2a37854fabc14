//! 사용자 저장소 포트
//!
//! 유스케이스가 의존하는 저장소 계약입니다. 구현체는 이메일을 저장/조회
//! 양쪽에서 소문자로 정규화해야 하며, 소프트 삭제된 행은 모든 조회에서
//! 제외해야 합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::domain::entities::users::user::User;

/// 사용자 생성 입력
///
/// 역할(USER)과 코인 잔액(0), 타임스탬프는 저장소가 부여합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// 프로필 부분 수정 입력
///
/// `None`인 필드는 건드리지 않습니다. 이름/성 외의 필드는
/// 이 경로로 변경할 수 없습니다.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfilePatch {
    /// 수정할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

/// 사용자 저장소 포트
///
/// `Arc<dyn UserStore>`로 유스케이스에 생성자 주입됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자 조회 (대소문자 무관)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 사용자 생성
    ///
    /// 이메일 중복 여부의 사전 확인은 호출자 책임입니다.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// 프로필 부분 수정
    ///
    /// 존재하는 필드만 갱신하고 `updated_at`을 현재로 설정합니다.
    /// 해당 ID의 사용자가 없으면 NotFound 도메인 에러로 실패합니다.
    async fn update_profile(&self, id: &str, patch: ProfilePatch) -> AppResult<User>;
}
