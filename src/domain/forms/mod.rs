//! # Form DTOs
//!
//! HTML 폼/쿼리 스트링으로 들어오는 요청 데이터 구조를 정의합니다.
//! 누락된 필드는 역직렬화 오류 대신 빈 문자열로 받아 검증 단계에서
//! 걸러냅니다 (`#[serde(default)]`).

pub mod account_forms;
pub mod review_forms;

use serde::Deserialize;
use validator::ValidationErrors;

pub use account_forms::{LoginForm, ProfileForm, RoleForm, SignupForm};
pub use review_forms::ReviewForm;

/// 카페 목록 쿼리 (`?selected=<id>`)
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub selected: Option<String>,
}

/// 카페 검색 쿼리 (`?q=<검색어>`)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// 로그인 후 복귀 대상 쿼리 (`?next=<경로>`)
#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// 검증 리포트에서 주어진 필드 순서상 첫 번째 실패 메시지를 꺼냅니다.
///
/// `ValidationErrors`는 해시맵이라 순서를 보존하지 않으므로,
/// "첫 실패가 이긴다" 규칙은 호출 측이 필드 순서를 명시해 지킵니다.
pub fn first_message(errors: &ValidationErrors, field_order: &[&str]) -> Option<String> {
    let field_errors = errors.field_errors();

    for field in field_order {
        if let Some(list) = field_errors.get(*field) {
            if let Some(error) = list.first() {
                return Some(
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                );
            }
        }
    }

    None
}
