//! 회원가입/로그인 유스케이스 구현
//!
//! Spring Framework의 `@Service` 계층과 유사하게 저장소/해싱/토큰 포트를
//! 생성자 주입으로 받아 인증 비즈니스 규칙을 구현합니다.
//!
//! # Security
//!
//! - 로그인 실패는 원인(이메일 없음 vs 비밀번호 불일치)과 무관하게
//!   동일한 메시지를 반환하여 계정 열거를 차단합니다.
//! - 응답 DTO 변환 시 비밀번호 해시는 타입 수준에서 제외됩니다.

use std::sync::Arc;

use crate::core::errors::{AppResult, DomainError};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::AuthTokenResponse;
use crate::domain::models::token::token::TokenPayload;
use crate::repositories::users::user_store::{NewUser, UserStore};
use crate::services::auth::hash_provider::HashProvider;
use crate::services::auth::token_provider::TokenProvider;

/// 인증 유스케이스 서비스
///
/// 포트 trait에만 의존하므로 테스트에서는 인메모리 저장소와
/// 낮은 cost의 해싱 구현체로 조립할 수 있습니다.
#[derive(Clone)]
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    hash_provider: Arc<dyn HashProvider>,
    token_provider: Arc<dyn TokenProvider>,
}

impl AuthService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        hash_provider: Arc<dyn HashProvider>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_store,
            hash_provider,
            token_provider,
        }
    }

    /// 새 계정 등록
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 중복 확인 (대소문자 무관)
    /// 2. 비밀번호 해싱
    /// 3. 사용자 생성 (역할 USER, 잔액 0)
    /// 4. 액세스 토큰 서명
    ///
    /// # Errors
    ///
    /// * `DomainError::Conflict` - 이미 등록된 이메일
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthTokenResponse> {
        let start_time = std::time::Instant::now();

        if self.user_store.find_by_email(&request.email).await?.is_some() {
            return Err(DomainError::Conflict("Email já cadastrado".to_string()).into());
        }

        let password_hash = self.hash_provider.hash(&request.password)?;

        let user = self
            .user_store
            .create(NewUser {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
            })
            .await?;

        let token = self
            .token_provider
            .sign(&TokenPayload::new(&user.id, &user.email))?;

        log::info!(
            "User registered: {} ({:?})",
            user.id,
            start_time.elapsed()
        );

        Ok(AuthTokenResponse::new(user, token))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `DomainError::Unauthorized` - 존재하지 않는 이메일 또는 비밀번호 불일치.
    ///   두 경우 모두 동일한 메시지를 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthTokenResponse> {
        let user = self
            .user_store
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Credenciais inválidas".to_string()))?;

        let is_valid = self.hash_provider.verify(&request.password, &user.password)?;
        if !is_valid {
            return Err(DomainError::Unauthorized("Credenciais inválidas".to_string()).into());
        }

        let token = self
            .token_provider
            .sign(&TokenPayload::new(&user.id, &user.email))?;

        log::info!("User logged in: {}", user.id);

        Ok(AuthTokenResponse::new(user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::repositories::users::memory_user_store::InMemoryUserStore;
    use crate::services::auth::hash_provider::BcryptHashProvider;
    use crate::services::auth::token_provider::JwtTokenProvider;

    fn build_service() -> (AuthService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        let service = AuthService::new(
            store.clone(),
            Arc::new(BcryptHashProvider::new(4)),
            Arc::new(JwtTokenProvider::new("test-secret", 1)),
        );
        (service, store)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "secret123".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_returns_user_and_token() {
        let (service, _store) = build_service();

        let response = service.register(register_request("a@x.com")).await.unwrap();

        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(response.user.first_name, "Ana");
        assert!(!response.token.is_empty());
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_email_case_insensitive() {
        let (service, store) = build_service();

        service.register(register_request("a@x.com")).await.unwrap();
        let err = service.register(register_request("A@X.Com")).await.unwrap_err();

        match err {
            AppError::Domain(DomainError::Conflict(msg)) => {
                assert_eq!(msg, "Email já cadastrado");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_token_carries_user_identity() {
        let (service, _store) = build_service();
        let verifier = JwtTokenProvider::new("test-secret", 1);

        let response = service.register(register_request("a@x.com")).await.unwrap();
        let payload = verifier.verify(&response.token).unwrap();

        assert_eq!(payload.sub, response.user.id);
        assert_eq!(payload.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_login_with_valid_credentials() {
        let (service, _store) = build_service();

        service.register(register_request("a@x.com")).await.unwrap();
        let response = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.email, "a@x.com");
        assert!(!response.token.is_empty());
    }

    #[actix_web::test]
    async fn test_login_failures_share_one_message() {
        let (service, _store) = build_service();

        service.register(register_request("a@x.com")).await.unwrap();

        let unknown_email = service
            .login(LoginRequest {
                email: "missing@x.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap_err();
        let wrong_password = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        // 계정 열거 방지: 두 실패가 구분되지 않아야 한다
        assert_eq!(unknown_email.to_string(), "Credenciais inválidas");
        assert_eq!(wrong_password.to_string(), "Credenciais inválidas");
    }
}
