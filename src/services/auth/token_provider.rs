//! JWT 토큰 포트와 HMAC-SHA256 구현체
//!
//! 액세스 토큰의 서명과 검증을 담당합니다. 유스케이스와 인증 가드는
//! trait 포트에만 의존하며, 비밀 키와 만료 시간은 생성 시점에 주입됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, DomainError, ErrorContext};
use crate::domain::models::token::token::TokenPayload;

/// 토큰 서명/검증 포트
pub trait TokenProvider: Send + Sync {
    /// 페이로드를 서명하여 토큰 문자열을 생성합니다.
    fn sign(&self, payload: &TokenPayload) -> AppResult<String>;

    /// 토큰을 검증하고 페이로드를 복원합니다.
    ///
    /// 만료, 서명 불일치, 형식 오류를 구분하지 않고 단일 메시지의
    /// `Unauthorized` 에러를 반환합니다. 실패 원인은 디버그 로그로만 남깁니다.
    fn verify(&self, token: &str) -> AppResult<TokenPayload>;
}

/// 전송 형식 클레임
///
/// iat/exp는 토큰 내부에서만 쓰이고 도메인 페이로드에는 노출하지 않습니다.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// HMAC-SHA256 서명 기반 JWT 구현체
pub struct JwtTokenProvider {
    secret: String,
    expiration_hours: i64,
}

impl JwtTokenProvider {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

impl TokenProvider for JwtTokenProvider {
    fn sign(&self, payload: &TokenPayload) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: payload.sub.clone(),
            email: payload.email.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key).context("Failed to sign token")
    }

    fn verify(&self, token: &str) -> AppResult<TokenPayload> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    log::debug!("Token verification failed: expired signature");
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    log::debug!("Token verification failed: invalid signature");
                }
                kind => {
                    log::debug!("Token verification failed: {:?}", kind);
                }
            }
            // 실패 원인을 클라이언트에 구분해서 노출하지 않는다
            DomainError::Unauthorized("Token inválido ou expirado".to_string())
        })?;

        Ok(TokenPayload {
            sub: token_data.claims.sub,
            email: token_data.claims.email,
        })
    }
}
