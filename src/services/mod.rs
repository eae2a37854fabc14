//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 생성자 주입으로 조립되는 유스케이스 서비스와, 유스케이스가 의존하는
//! 해싱/토큰 포트의 구현체들을 제공합니다.
//!
//! # Features
//!
//! - 회원가입/로그인 유스케이스 (bcrypt + JWT)
//! - 프로필 조회/수정 유스케이스
//! - 포트 trait 기반의 교체 가능한 어댑터
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::new(user_store, hash_provider, token_provider);
//! let response = auth_service.register(request).await?;
//! ```

pub mod auth;
pub mod users;
