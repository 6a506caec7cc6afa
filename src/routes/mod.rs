//! # 라우트 설정 모듈
//!
//! 엔드포인트들을 인증 요구 수준별로 그룹화하여 등록합니다.
//!
//! ## Public 라우트 (인증 불필요)
//! - `GET /` - 스플래시
//! - `GET/POST /signup` - 가입
//! - `GET/POST /login` - 로그인
//! - `GET /health` - 헬스체크
//!
//! ## Protected 라우트 (로그인 필요, [`RequireLogin`] 가드)
//! - `GET/POST /select-role`, `GET /logout`
//! - `GET /home`, `GET /search`, `GET /cafe/{id}`
//! - `POST /cafe/{id}/review`, `POST /review/{id}/edit`, `POST /review/{id}/delete`
//! - `GET /settings`, `GET/POST /profile`, `GET /saved`
//!
//! 미인증 상태로 보호된 라우트에 접근하면 복귀 경로를 실은
//! `/login?next=…`으로 리다이렉트됩니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::RequireLogin;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_public_routes(cfg);
    configure_protected_routes(cfg);
}

/// 인증 없이 접근 가능한 라우트
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::index)
        .service(handlers::auth::signup_page)
        .service(handlers::auth::signup)
        .service(handlers::auth::login_page)
        .service(handlers::auth::login);
}

/// 로그인이 필요한 라우트
///
/// 스코프 전체를 [`RequireLogin`] 가드로 감쌉니다. 가드를 통과한
/// 요청에는 `CurrentUser`가 부착되어 있습니다.
fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(RequireLogin)
            .service(handlers::auth::select_role_page)
            .service(handlers::auth::select_role)
            .service(handlers::auth::logout)
            .service(handlers::cafes::home)
            .service(handlers::cafes::search)
            .service(handlers::cafes::cafe_detail)
            .service(handlers::reviews::add_review)
            .service(handlers::reviews::edit_review)
            .service(handlers::reviews::delete_review)
            .service(handlers::account::settings)
            .service(handlers::account::profile_page)
            .service(handlers::account::update_profile)
            .service(handlers::account::saved_places),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "sips_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
