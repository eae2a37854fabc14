//! 프로필 HTTP 핸들러
//!
//! 인증된 사용자의 프로필 조회/수정 엔드포인트를 처리합니다.
//! 두 핸들러 모두 진입 시 인증 가드를 통과해야 합니다.

use actix_web::{get, patch, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::middlewares::auth_guard::authorize;
use crate::utils::string_utils::clean_optional_string;

/// 현재 사용자 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/me`
///
/// # Responses
///
/// * `200 OK` - 프로필 (비밀번호 해시 제외)
/// * `401 Unauthorized` - 토큰 없음 또는 무효
/// * `404 Not Found` - 토큰의 사용자가 더 이상 존재하지 않음
#[get("/me")]
pub async fn get_me(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let principal = authorize(&req, state.token_provider.as_ref())?;

    let profile = state.profile_service.get_profile(&principal.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 현재 사용자 프로필 부분 수정 핸들러
///
/// 공백만 있는 필드는 수정 요청에서 제외됩니다.
///
/// # Endpoint
/// `PATCH /api/v1/auth/me`
///
/// # Responses
///
/// * `200 OK` - 수정된 프로필
/// * `400 Bad Request` - 본문 검증 실패
/// * `401 Unauthorized` - 토큰 없음 또는 무효
#[patch("/me")]
pub async fn update_me(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let principal = authorize(&req, state.token_provider.as_ref())?;

    payload.validate()?;

    let payload = payload.into_inner();
    let request = UpdateProfileRequest {
        first_name: clean_optional_string(payload.first_name),
        last_name: clean_optional_string(payload.last_name),
    };

    let profile = state
        .profile_service
        .update_profile(&principal.user_id, request)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[cfg(test)]
mod tests {
    use crate::core::state::AppState;
    use crate::repositories::users::memory_user_store::InMemoryUserStore;
    use crate::routes::configure_all_routes;
    use crate::services::auth::hash_provider::BcryptHashProvider;
    use crate::services::auth::token_provider::JwtTokenProvider;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(BcryptHashProvider::new(4)),
            Arc::new(JwtTokenProvider::new("test-secret", 1)),
        )
    }

    fn register_body() -> serde_json::Value {
        json!({
            "email": "a@x.com",
            "password": "secret123",
            "first_name": "Ana",
            "last_name": "Silva"
        })
    }

    #[actix_web::test]
    async fn test_get_me_requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token não informado");
    }

    #[actix_web::test]
    async fn test_get_me_returns_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_all_routes),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body())
            .to_request();
        let registered: serde_json::Value =
            test::read_body_json(test::call_service(&app, register).await).await;
        let token = registered["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "a@x.com");
        assert!(body.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_update_me_changes_only_present_fields() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_all_routes),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body())
            .to_request();
        let registered: serde_json::Value =
            test::read_body_json(test::call_service(&app, register).await).await;
        let token = registered["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"first_name": "  Beatriz  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["first_name"], "Beatriz");
        assert_eq!(body["last_name"], "Silva");
    }

    #[actix_web::test]
    async fn test_update_me_rejects_invalid_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .set_json(json!({"first_name": "Beatriz"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token inválido ou expirado");
    }
}
