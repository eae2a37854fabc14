//! 인메모리 사용자 저장소 (테스트 전용)
//!
//! [`UserStore`] 계약을 MongoDB 없이 검증하기 위한 테스트 더블입니다.
//! 이메일 정규화 규칙은 MongoDB 구현과 동일하게 적용됩니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::errors::{AppResult, DomainError};
use crate::domain::entities::users::user::User;
use crate::repositories::users::user_store::{NewUser, ProfilePatch, UserStore};
use crate::utils::string_utils::normalize_email;

/// ID를 키로 사용자를 보관하는 인메모리 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let normalized = normalize_email(email);
        let users = self.users.lock().unwrap();

        Ok(users.values().find(|u| u.email == normalized).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User::new(
            Uuid::new_v4().to_string(),
            normalize_email(&new_user.email),
            new_user.password_hash,
            new_user.first_name,
            new_user.last_name,
        );

        self.users
            .lock()
            .unwrap()
            .insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn update_profile(&self, id: &str, patch: ProfilePatch) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound("Usuário não encontrado".to_string()))?;

        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hashed".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_lookup_is_case_insensitive() {
        let store = InMemoryUserStore::new();
        store.create(new_user("A@X.com")).await.unwrap();

        let found = store.find_by_email("a@x.COM").await.unwrap();

        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_update_profile_missing_id_fails() {
        let store = InMemoryUserStore::new();

        let result = store
            .update_profile("missing", ProfilePatch::default())
            .await;

        assert!(matches!(
            result,
            Err(crate::core::errors::AppError::Domain(DomainError::NotFound(_)))
        ));
    }
}
