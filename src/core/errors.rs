//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! 유스케이스가 발생시키는 도메인 에러(닫힌 집합)와 예상치 못한 장애를
//! 타입으로 구분하며, `thiserror`와 `actix_web::ResponseError`를 사용하여
//! 일관된 HTTP 매핑을 제공합니다.
//!
//! ## 에러 분류
//!
//! - [`DomainError`] - 비즈니스 규칙 위반 (409/404/401), 메시지는 응답에 그대로 전달
//! - [`AppError::Validation`] - 어댑터 경계의 입력 검증 실패 (400, 필드별 에러 목록)
//! - [`AppError::Database`] / [`AppError::Internal`] - 예상치 못한 장애 (500, 상세 내용은 로그에만)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, DomainError};
//!
//! async fn get_profile(&self, user_id: &str) -> Result<UserResponse, AppError> {
//!     let user = self.user_store.find_by_id(user_id).await?
//!         .ok_or_else(|| DomainError::NotFound("Usuário não encontrado".to_string()))?;
//!     Ok(UserResponse::from(user))
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// 도메인 에러 (닫힌 집합)
///
/// 유스케이스가 발생시킬 수 있는 예상된 실패의 전체 목록입니다.
/// 메시지는 사용자에게 그대로 전달되므로 내부 정보를 담지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 고유 키 중복 (409 Conflict)
    #[error("{0}")]
    Conflict(String),

    /// 참조한 엔티티 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 자격 증명 실패 또는 토큰 누락/무효/만료 (401 Unauthorized)
    #[error("{0}")]
    Unauthorized(String),
}

/// 어댑터 경계의 스키마 검증이 생성하는 필드 단위 에러
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 애플리케이션 전역 에러 타입
///
/// 도메인 에러와 인프라 장애를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 도메인 에러 (상태 코드는 내부 종류에 따라 결정)
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Dados inválidos")]
    Validation(Vec<FieldError>),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    Database(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Internal(format!("Password hashing failed: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 도메인 에러는 메시지를 그대로 담고, 예상치 못한 장애는
    /// 상세 내용을 로그에만 남긴 채 일반화된 500 응답을 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            AppError::Domain(domain) => serde_json::json!({
                "statusCode": status.as_u16(),
                "message": domain.to_string(),
            }),
            AppError::Validation(fields) => serde_json::json!({
                "statusCode": status.as_u16(),
                "message": "Dados inválidos",
                "errors": fields,
            }),
            AppError::Database(detail) | AppError::Internal(detail) => {
                log::error!("Unexpected failure: {}", detail);
                serde_json::json!({
                    "statusCode": status.as_u16(),
                    "message": "Erro interno do servidor",
                })
            }
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Internal(format!("{}: {}", msg, e)))
    }
}
