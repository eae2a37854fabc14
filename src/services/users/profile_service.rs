//! 프로필 조회/수정 유스케이스 구현

use std::sync::Arc;

use crate::core::errors::{AppResult, DomainError};
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::repositories::users::user_store::{ProfilePatch, UserStore};

/// 프로필 유스케이스 서비스
///
/// 인증 가드가 복원한 사용자 ID를 받아 프로필을 조회하거나
/// 이름/성 필드를 부분 수정합니다.
#[derive(Clone)]
pub struct ProfileService {
    user_store: Arc<dyn UserStore>,
}

impl ProfileService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// ID로 프로필 조회
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - 해당 ID의 사용자가 없는 경우
    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Usuário não encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 프로필 부분 수정
    ///
    /// `None` 필드는 건드리지 않으며, 수정할 필드가 하나도 없으면 갱신 쿼리
    /// 없이 현재 프로필을 반환합니다. 수정 전에 사용자 존재를 먼저
    /// 확인하므로, 없는 사용자에 대해서는 갱신 쿼리가 발행되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - 해당 ID의 사용자가 없는 경우
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        let Some(current) = self.user_store.find_by_id(user_id).await? else {
            return Err(DomainError::NotFound("Usuário não encontrado".to_string()).into());
        };

        let patch = ProfilePatch::from(request);
        if patch.is_empty() {
            return Ok(UserResponse::from(current));
        }

        let user = self.user_store.update_profile(user_id, patch).await?;

        log::info!("Profile updated: {}", user.id);

        Ok(UserResponse::from(user))
    }
}
