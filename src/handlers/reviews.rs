//! Review Mutation HTTP Handlers
//!
//! 리뷰 작성/수정/삭제 핸들러입니다. 작성과 수정은 같은 검증 규칙을
//! 공유하고, 수정/삭제는 작성자 본인만 할 수 있습니다. 거부된 요청은
//! 아무 것도 바꾸지 않습니다.

use actix_session::Session;
use actix_web::{post, web, HttpResponse};

use crate::core::AppContext;
use crate::domain::entities::Review;
use crate::domain::forms::ReviewForm;
use crate::errors::{AppError, AppResult};
use crate::handlers::redirect;
use crate::identity::{flash, CurrentUser};

/// 카페 상세 페이지 경로
fn detail_page(cafe_id: &str) -> String {
    format!("/cafe/{}", cafe_id)
}

/// 리뷰 작성
///
/// 카페가 없으면 목록으로, 검증 실패면 해당 카페 페이지로 돌려보냅니다.
/// 검증을 전부 통과한 경우에만 리뷰가 저장됩니다.
///
/// # Endpoint
/// `POST /cafe/{cafe_id}/review`
#[post("/cafe/{cafe_id}/review")]
pub async fn add_review(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
    path: web::Path<String>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, AppError> {
    let cafe_id = path.into_inner();

    let Some(cafe) = context.cafes.find_by_id(&cafe_id).await? else {
        flash::error(&session, "Cafe not found.");
        return Ok(redirect("/home"));
    };

    let (rating, text) = match form.validated() {
        Ok(validated) => validated,
        Err(message) => {
            flash::error(&session, &message);
            return Ok(redirect(&detail_page(&cafe_id)));
        }
    };

    let cafe_object_id = cafe
        .id
        .ok_or_else(|| AppError::InternalError("cafe record has no id".to_string()))?;

    // 작성 시점의 사용자 이름을 함께 기록한다
    let review = Review::new(
        cafe_object_id,
        user.id,
        user.user.username.clone(),
        rating,
        text,
    );
    context.reviews.insert(review).await?;

    flash::success(&session, "Review posted!");
    Ok(redirect(&detail_page(&cafe_id)))
}

/// 리뷰 수정
///
/// 별점과 본문은 한 번의 갱신으로 함께 바뀝니다 — 절반만 적용된
/// 상태는 없습니다.
///
/// # Endpoint
/// `POST /review/{review_id}/edit`
#[post("/review/{review_id}/edit")]
pub async fn edit_review(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
    path: web::Path<String>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, AppError> {
    let review_id = path.into_inner();

    let review = match resolve_review(&context, &session, &review_id).await? {
        Ok(review) => review,
        Err(response) => return Ok(response),
    };

    let cafe_page = detail_page(&review.cafe_id_string());

    if !review.is_authored_by(&user.id) {
        flash::error(&session, "You can only edit your own review.");
        return Ok(redirect(&cafe_page));
    }

    let (rating, text) = match form.validated() {
        Ok(validated) => validated,
        Err(message) => {
            flash::error(&session, &message);
            return Ok(redirect(&cafe_page));
        }
    };

    context.reviews.set_content(&review_id, rating, &text).await?;

    flash::success(&session, "Review updated.");
    Ok(redirect(&cafe_page))
}

/// 리뷰 삭제
///
/// # Endpoint
/// `POST /review/{review_id}/delete`
#[post("/review/{review_id}/delete")]
pub async fn delete_review(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let review_id = path.into_inner();

    let review = match resolve_review(&context, &session, &review_id).await? {
        Ok(review) => review,
        Err(response) => return Ok(response),
    };

    let cafe_page = detail_page(&review.cafe_id_string());

    if !review.is_authored_by(&user.id) {
        flash::error(&session, "You can only delete your own review.");
        return Ok(redirect(&cafe_page));
    }

    context.reviews.delete(&review_id).await?;

    flash::success(&session, "Review deleted.");
    Ok(redirect(&cafe_page))
}

/// 리뷰를 해석하거나, 없으면 목록으로 보내는 응답을 만듭니다.
///
/// 잘못된 식별자와 없는 리뷰는 똑같이 "없음"으로 처리합니다.
async fn resolve_review(
    context: &AppContext,
    session: &Session,
    review_id: &str,
) -> AppResult<Result<Review, HttpResponse>> {
    match context.reviews.find_by_id(review_id).await? {
        Some(review) => Ok(Ok(review)),
        None => {
            flash::error(session, "Review not found.");
            Ok(Err(redirect("/home")))
        }
    }
}
