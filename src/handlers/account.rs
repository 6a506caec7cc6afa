//! Account Pages HTTP Handlers
//!
//! 설정, 프로필, 저장된 장소 페이지 핸들러입니다.

use std::collections::HashMap;

use actix_session::Session;
use actix_web::{get, post, web, HttpResponse};
use askama::Template;

use crate::core::AppContext;
use crate::domain::forms::ProfileForm;
use crate::errors::AppError;
use crate::handlers::{redirect, render};
use crate::identity::{flash, flash::Flash, CurrentUser};

#[derive(Template)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "profile.html")]
struct ProfileTemplate {
    flashes: Vec<Flash>,
    username: String,
    phone: String,
    is_owner: bool,
    shop_location: String,
    operation_hours: String,
}

/// 저장된 장소의 화면 표현
struct SavedPlaceView {
    cafe_id: String,
    cafe_name: String,
}

#[derive(Template)]
#[template(path = "saved_places.html")]
struct SavedPlacesTemplate {
    flashes: Vec<Flash>,
    places: Vec<SavedPlaceView>,
}

/// 설정 허브
///
/// # Endpoint
/// `GET /settings`
#[get("/settings")]
pub async fn settings(_user: CurrentUser, session: Session) -> Result<HttpResponse, AppError> {
    render(&SettingsTemplate {
        flashes: flash::take(&session),
    })
}

/// 프로필 폼
///
/// 현재 값으로 미리 채워 보여줍니다. 매장 관련 필드는 사장님 계정에만
/// 노출됩니다.
///
/// # Endpoint
/// `GET /profile`
#[get("/profile")]
pub async fn profile_page(user: CurrentUser, session: Session) -> Result<HttpResponse, AppError> {
    render(&ProfileTemplate {
        flashes: flash::take(&session),
        username: user.user.username.clone(),
        phone: user.user.phone.clone().unwrap_or_default(),
        is_owner: user.user.is_owner(),
        shop_location: user.user.shop_location.clone().unwrap_or_default(),
        operation_hours: user.user.operation_hours.clone().unwrap_or_default(),
    })
}

/// 프로필 수정 처리
///
/// 사용자 이름/연락처는 항상, 매장 위치/영업시간은 사장님 계정일 때만
/// 적용됩니다. 필드 형식 검증은 하지 않습니다.
///
/// # Endpoint
/// `POST /profile`
#[post("/profile")]
pub async fn update_profile(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
    form: web::Form<ProfileForm>,
) -> Result<HttpResponse, AppError> {
    context.accounts.update_profile(&user, &form).await?;

    flash::success(&session, "Profile updated successfully!");
    Ok(redirect("/settings"))
}

/// 저장된 장소 목록
///
/// 저장 기능 자체는 아직 제공되지 않으므로 보통 빈 페이지입니다.
///
/// # Endpoint
/// `GET /saved`
#[get("/saved")]
pub async fn saved_places(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let places = context
        .saved_places
        .find_for_user(&user.id_string())
        .await?;

    // 카페 이름 표시를 위한 ID → 이름 색인
    let cafes = context.cafes.find_all().await?;
    let names: HashMap<String, String> = cafes
        .iter()
        .filter_map(|cafe| cafe.id_string().map(|id| (id, cafe.name.clone())))
        .collect();

    let views = places
        .iter()
        .map(|place| {
            let cafe_id = place.cafe_id.to_hex();
            let cafe_name = names.get(&cafe_id).cloned().unwrap_or_default();
            SavedPlaceView { cafe_id, cafe_name }
        })
        .collect();

    render(&SavedPlacesTemplate {
        flashes: flash::take(&session),
        places: views,
    })
}
