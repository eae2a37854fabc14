//! 요청 인증 가드
//!
//! 보호된 핸들러 앞단에서 베어러 토큰을 검증하고 인증 주체를 복원합니다.
//! 미들웨어 Transform 대신 핸들러가 직접 호출하는 일반 함수로 구성하여
//! 토큰 프로바이더 주입과 테스트를 단순하게 유지합니다.

use actix_web::HttpRequest;

use crate::core::errors::{AppResult, DomainError};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::auth::token_provider::TokenProvider;

/// 요청에서 토큰을 추출해 검증하고 인증된 사용자를 반환합니다.
///
/// # 추출 순서
///
/// 1. `Authorization: Bearer <token>` 헤더
/// 2. `access_token` 쿠키
///
/// # Errors
///
/// * `DomainError::Unauthorized` - 토큰이 없거나 검증에 실패한 경우
pub fn authorize(
    req: &HttpRequest,
    token_provider: &dyn TokenProvider,
) -> AppResult<AuthenticatedUser> {
    let token = extract_token(req)
        .ok_or_else(|| DomainError::Unauthorized("Token não informado".to_string()))?;

    let payload = token_provider.verify(&token)?;

    Ok(AuthenticatedUser {
        user_id: payload.sub,
        email: payload.email,
    })
}

/// HTTP 요청에서 액세스 토큰 추출
fn extract_token(req: &HttpRequest) -> Option<String> {
    // 1. Authorization 헤더의 Bearer 토큰
    if let Some(auth_header) = req.headers().get("Authorization") {
        if let Ok(header_value) = auth_header.to_str() {
            if let Some(token) = header_value.strip_prefix("Bearer ") {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    // 2. access_token 쿠키
    if let Some(cookie_header) = req.headers().get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie_pair in cookie_str.split(';') {
                if let Some((name, value)) = cookie_pair.trim().split_once('=') {
                    if name.trim() == "access_token" {
                        let token = value.trim();
                        if !token.is_empty() {
                            return Some(token.to_string());
                        }
                    }
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::models::token::token::TokenPayload;
    use crate::services::auth::token_provider::JwtTokenProvider;
    use actix_web::test::TestRequest;

    fn signed_token(provider: &JwtTokenProvider) -> String {
        provider
            .sign(&TokenPayload::new("user-1", "a@x.com"))
            .unwrap()
    }

    #[actix_web::test]
    async fn test_authorize_with_bearer_header() {
        let provider = JwtTokenProvider::new("test-secret", 1);
        let token = signed_token(&provider);
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let principal = authorize(&req, &provider).unwrap();

        assert_eq!(principal.user_id, "user-1");
        assert_eq!(principal.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_authorize_falls_back_to_cookie() {
        let provider = JwtTokenProvider::new("test-secret", 1);
        let token = signed_token(&provider);
        let req = TestRequest::default()
            .insert_header(("Cookie", format!("theme=dark; access_token={}", token)))
            .to_http_request();

        let principal = authorize(&req, &provider).unwrap();

        assert_eq!(principal.user_id, "user-1");
    }

    #[actix_web::test]
    async fn test_header_takes_precedence_over_cookie() {
        let provider = JwtTokenProvider::new("test-secret", 1);
        let header_token = provider
            .sign(&TokenPayload::new("header-user", "h@x.com"))
            .unwrap();
        let cookie_token = provider
            .sign(&TokenPayload::new("cookie-user", "c@x.com"))
            .unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", header_token)))
            .insert_header(("Cookie", format!("access_token={}", cookie_token)))
            .to_http_request();

        let principal = authorize(&req, &provider).unwrap();

        assert_eq!(principal.user_id, "header-user");
    }

    #[actix_web::test]
    async fn test_missing_credential_is_unauthorized() {
        let provider = JwtTokenProvider::new("test-secret", 1);
        let req = TestRequest::default().to_http_request();

        let err = authorize(&req, &provider).unwrap_err();

        match err {
            AppError::Domain(DomainError::Unauthorized(msg)) => {
                assert_eq!(msg, "Token não informado");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let provider = JwtTokenProvider::new("test-secret", 1);
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_http_request();

        let err = authorize(&req, &provider).unwrap_err();

        match err {
            AppError::Domain(DomainError::Unauthorized(msg)) => {
                assert_eq!(msg, "Token inválido ou expirado");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
