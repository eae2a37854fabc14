//! HTTP 핸들러 모듈
//!
//! 요청/응답 변환과 경계 검증을 담당하는 엔드포인트 핸들러들입니다.
//!
//! # Features
//!
//! - 회원가입/로그인 엔드포인트
//! - 인증된 사용자의 프로필 조회/수정 엔드포인트

pub mod auth;
pub mod users;
