//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 폼 파싱, 리다이렉트/렌더 결정
//! ├─────────────────────────────────────────────┤
//!   Services - 검증과 비즈니스 규칙
//! ├─────────────────────────────────────────────┤
//!   Repositories - 문서 저장소 접근
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 같은 모양을 따릅니다: 입력 검증 → 저장소 호출 →
//! 플래시 메시지와 함께 리다이렉트하거나 페이지 렌더링. 사용자에게
//! 원시 오류를 그대로 보여주는 경로는 없습니다.

pub mod account;
pub mod auth;
pub mod cafes;
pub mod reviews;


use actix_web::http::header;
use actix_web::HttpResponse;
use askama::Template;

use crate::errors::AppResult;

/// 302 리다이렉트 응답
pub(crate) fn redirect(target: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, target))
        .finish()
}

/// 템플릿을 HTML 응답으로 렌더링
pub(crate) fn render<T: Template>(template: &T) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(template.render()?))
}
