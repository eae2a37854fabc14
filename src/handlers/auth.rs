//! 인증 HTTP 핸들러
//!
//! 회원가입과 로그인 엔드포인트를 처리합니다. 요청 본문 검증은
//! 핸들러 경계에서 수행하고, 비즈니스 규칙은 서비스 계층에 위임합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/register`
///
/// # Responses
///
/// * `201 Created` - 생성된 사용자와 액세스 토큰
/// * `400 Bad Request` - 본문 검증 실패
/// * `409 Conflict` - 이미 등록된 이메일
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = state.auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// # Responses
///
/// * `200 OK` - 사용자와 액세스 토큰
/// * `400 Bad Request` - 본문 검증 실패
/// * `401 Unauthorized` - 잘못된 자격 증명 (원인 비구분)
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = state.auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
