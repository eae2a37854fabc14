//! 계정 인증 서비스 백엔드
//!
//! Rust 기반의 사용자 인증 및 프로필 관리 서비스입니다.
//! JWT 토큰 기반 인증, bcrypt 비밀번호 해싱, 그리고 생성자 주입 방식의
//! 의존성 조립을 제공합니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: bcrypt 해싱과 JWT 토큰 발급
//! - **프로필 관리**: 인증된 사용자의 프로필 조회/부분 수정
//! - **인증 가드**: 베어러 토큰을 인증 주체로 변환하는 일반 함수
//! - **MongoDB**: 사용자 데이터 영구 저장 (소프트 삭제 필터 포함)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 경계 검증, 인증 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (포트에 의존)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service_backend::core::state::AppState;
//! use account_service_backend::repositories::users::MongoUserStore;
//! use account_service_backend::services::auth::{BcryptHashProvider, JwtTokenProvider};
//!
//! let state = AppState::new(
//!     Arc::new(user_store),
//!     Arc::new(BcryptHashProvider::new(12)),
//!     Arc::new(JwtTokenProvider::new(secret, 168)),
//! );
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
