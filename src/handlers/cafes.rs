//! Cafe Browsing HTTP Handlers
//!
//! 카페 목록, 검색, 상세 페이지 핸들러입니다. 카페는 이 서비스에서
//! 읽기 전용입니다.

use actix_session::Session;
use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::core::AppContext;
use crate::domain::entities::{Cafe, Review};
use crate::domain::forms::{HomeQuery, SearchQuery};
use crate::errors::AppError;
use crate::handlers::{redirect, render};
use crate::identity::{flash, flash::Flash, CurrentUser};

/// 템플릿에 넘기는 카페 표현
///
/// 선택 필드는 빈 문자열로 평탄화해 템플릿 분기를 단순하게 유지합니다.
pub(crate) struct CafeView {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
}

impl CafeView {
    pub(crate) fn from_entity(cafe: &Cafe) -> Self {
        Self {
            id: cafe.id_string().unwrap_or_default(),
            name: cafe.name.clone(),
            location: cafe.location.clone().unwrap_or_default(),
            description: cafe.description.clone().unwrap_or_default(),
        }
    }
}

/// 템플릿에 넘기는 리뷰 표현
///
/// 작성자 ID를 문자열로 실어 보내, 현재 사용자와 비교해 수정/삭제
/// 버튼 노출을 결정할 수 있게 합니다.
pub(crate) struct ReviewView {
    pub id: String,
    pub username: String,
    pub rating: i32,
    pub text: String,
    pub author_id: String,
}

impl ReviewView {
    pub(crate) fn from_entity(review: &Review) -> Self {
        Self {
            id: review.id_string().unwrap_or_default(),
            username: review.username.clone(),
            rating: review.rating,
            text: review.text.clone(),
            author_id: review.author_id_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    flashes: Vec<Flash>,
    cafes: Vec<CafeView>,
    selected: Option<CafeView>,
}

#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate {
    flashes: Vec<Flash>,
    query: String,
    cafes: Vec<CafeView>,
}

#[derive(Template)]
#[template(path = "cafe_detail.html")]
struct CafeDetailTemplate {
    flashes: Vec<Flash>,
    cafe: CafeView,
    reviews: Vec<ReviewView>,
    current_user_id: String,
}

/// 카페 목록
///
/// `?selected=<id>`가 있으면 해당 카페의 상세 패널을 함께 보여줍니다.
/// 잘못되었거나 없는 식별자는 "선택 없음"으로 취급하며 오류가 아닙니다.
///
/// # Endpoint
/// `GET /home`
#[get("/home")]
pub async fn home(
    context: web::Data<AppContext>,
    _user: CurrentUser,
    session: Session,
    query: web::Query<HomeQuery>,
) -> Result<HttpResponse, AppError> {
    let cafes = context.cafes.find_all().await?;

    let selected = match query.selected.as_deref() {
        // 조회 실패도 선택 없음으로 접는다
        Some(id) => context.cafes.find_by_id(id).await.ok().flatten(),
        None => None,
    };

    render(&HomeTemplate {
        flashes: flash::take(&session),
        cafes: cafes.iter().map(CafeView::from_entity).collect(),
        selected: selected.as_ref().map(CafeView::from_entity),
    })
}

/// 카페 이름 검색
///
/// 검색어가 비어 있으면 전체 목록이 아니라 빈 결과를 돌려줍니다.
///
/// # Endpoint
/// `GET /search?q=<검색어>`
#[get("/search")]
pub async fn search(
    context: web::Data<AppContext>,
    _user: CurrentUser,
    session: Session,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let query_text = query.q.clone().unwrap_or_default();

    let cafes = if query_text.is_empty() {
        Vec::new()
    } else {
        context.cafes.search_by_name(&query_text).await?
    };

    render(&SearchTemplate {
        flashes: flash::take(&session),
        query: query_text,
        cafes: cafes.iter().map(CafeView::from_entity).collect(),
    })
}

/// 카페 상세 페이지
///
/// 카페 정보와 리뷰 목록을 함께 보여줍니다. 식별자가 잘못되었거나
/// 카페가 없으면 목록으로 돌려보냅니다.
///
/// # Endpoint
/// `GET /cafe/{cafe_id}`
#[get("/cafe/{cafe_id}")]
pub async fn cafe_detail(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let cafe_id = path.into_inner();

    let Some(cafe) = context.cafes.find_by_id(&cafe_id).await? else {
        flash::error(&session, "Cafe not found.");
        return Ok(redirect("/home"));
    };

    let reviews = context.reviews.find_for_cafe(&cafe_id).await?;

    render(&CafeDetailTemplate {
        flashes: flash::take(&session),
        cafe: CafeView::from_entity(&cafe),
        reviews: reviews.iter().map(ReviewView::from_entity).collect(),
        current_user_id: user.id_string(),
    })
}
