//! # Identity & Session
//!
//! 세션과 인증된 신원을 잇는 접착 계층입니다.
//!
//! 세션에는 사용자 ID 문자열 하나만 저장하고, 요청마다 저장소에서
//! 전체 사용자 레코드를 해석합니다. 해석은 어떤 실패든 익명으로
//! 귀결됩니다 (fail-closed) — 세션 키 없음, 잘못된 ID, 레코드 없음,
//! 저장소 오류 모두 "로그인 안 됨"이지, 오류 페이지가 아닙니다.

pub mod flash;

use std::future::{ready, Ready};

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::User;
use crate::errors::AppError;
use crate::repositories::UserStore;

/// 세션에서 사용자 ID를 보관하는 키
pub const SESSION_USER_KEY: &str = "user_id";

/// 미인증 접근 시 안내 문구
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access that page.";

/// 요청 범위의 인증된 사용자
///
/// 인증 미들웨어가 요청 확장(extensions)에 넣어 두고,
/// 보호된 핸들러가 추출자로 꺼내 씁니다.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 저장소 레코드의 ID
    pub id: ObjectId,
    /// 해석된 전체 사용자 레코드
    pub user: User,
}

impl CurrentUser {
    /// ID의 16진수 문자열 표현
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// 세션에 로그인 상태를 기록합니다.
pub fn login(session: &Session, user: &User) -> Result<(), AppError> {
    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("user record has no id".to_string()))?;

    session
        .insert(SESSION_USER_KEY, user_id)
        .map_err(|e| AppError::InternalError(format!("세션 기록 실패: {}", e)))
}

/// 세션에서 로그인 상태를 지웁니다.
///
/// 세션 전체를 없애는 대신 사용자 키만 제거합니다 — 로그아웃 안내
/// 플래시 메시지는 같은 세션에 실려 다음 페이지까지 가야 합니다.
pub fn logout(session: &Session) {
    session.remove(SESSION_USER_KEY);
}

/// 현재 세션의 신원을 해석합니다.
///
/// 반환값이 `None`이면 익명 사용자입니다. 재시도는 하지 않습니다.
pub async fn current_identity(session: &Session, users: &dyn UserStore) -> Option<CurrentUser> {
    let user_id = session.get::<String>(SESSION_USER_KEY).ok().flatten()?;

    let user = match users.find_by_id(&user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(e) => {
            log::debug!("신원 해석 실패, 익명으로 처리: {}", e);
            return None;
        }
    };

    // 저장소에서 온 레코드에는 항상 ID가 있지만, 없다면 역시 익명이다
    let id = user.id?;

    Some(CurrentUser { id, user })
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// 인증 미들웨어가 넣어 둔 `CurrentUser`를 꺼냅니다.
    ///
    /// 보호되지 않은 라우트에서 잘못 사용하면 401이 됩니다.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let current = req.extensions().get::<CurrentUser>().cloned();

        ready(current.ok_or_else(|| {
            AppError::AuthenticationError("authentication required".to_string()).into()
        }))
    }
}
