//! 플래시 메시지
//!
//! 다음에 렌더링되는 페이지에 한 번만 표시되는 상태 메시지입니다.
//! 세션에 쌓아 두었다가 렌더링 시점에 `take`로 비웁니다.

use actix_session::Session;
use serde::{Deserialize, Serialize};

/// 세션에서 플래시 목록을 보관하는 키
const FLASH_KEY: &str = "_flashes";

/// 한 건의 플래시 메시지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    /// 표시 수준: "success" | "error" | "info"
    pub level: String,
    /// 사용자에게 그대로 보여줄 문구
    pub message: String,
}

/// 성공 메시지를 쌓습니다.
pub fn success(session: &Session, message: &str) {
    push(session, "success", message);
}

/// 오류 메시지를 쌓습니다.
pub fn error(session: &Session, message: &str) {
    push(session, "error", message);
}

/// 안내 메시지를 쌓습니다.
pub fn info(session: &Session, message: &str) {
    push(session, "info", message);
}

fn push(session: &Session, level: &str, message: &str) {
    let mut flashes = session
        .get::<Vec<Flash>>(FLASH_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();

    flashes.push(Flash {
        level: level.to_string(),
        message: message.to_string(),
    });

    // 세션 기록 실패는 메시지 유실일 뿐 요청 자체를 막지 않는다
    if let Err(e) = session.insert(FLASH_KEY, flashes) {
        log::warn!("플래시 메시지 저장 실패: {}", e);
    }
}

/// 쌓인 플래시 메시지를 모두 꺼내고 세션에서 비웁니다.
pub fn take(session: &Session) -> Vec<Flash> {
    match session.remove_as::<Vec<Flash>>(FLASH_KEY) {
        Some(Ok(flashes)) => flashes,
        _ => Vec::new(),
    }
}
