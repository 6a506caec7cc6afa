//! Review Entity Implementation
//!
//! 카페 리뷰 엔티티입니다. 리뷰는 작성자 1명에게 귀속되며,
//! 수정/삭제는 작성자 본인만 가능합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 리뷰 별점의 유효 범위
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// 카페 리뷰 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 리뷰 대상 카페
    pub cafe_id: ObjectId,
    /// 작성자
    pub user_id: ObjectId,
    /// 작성 시점의 사용자 이름 (비정규화 저장)
    pub username: String,
    /// 별점 (1-5)
    pub rating: i32,
    /// 본문
    pub text: String,
    /// 작성 시간
    pub created_at: DateTime,
}

impl Review {
    /// 새 리뷰 생성
    ///
    /// 작성자의 현재 사용자 이름을 함께 기록합니다. 이후 작성자가
    /// 이름을 바꿔도 리뷰에는 작성 당시의 이름이 남습니다.
    pub fn new(
        cafe_id: ObjectId,
        user_id: ObjectId,
        username: String,
        rating: i32,
        text: String,
    ) -> Self {
        Self {
            id: None,
            cafe_id,
            user_id,
            username,
            rating,
            text,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 작성자 ID의 16진수 문자열 표현
    ///
    /// 뷰 계층에서 현재 사용자와 비교해 수정/삭제 버튼 노출을 결정합니다.
    pub fn author_id_string(&self) -> String {
        self.user_id.to_hex()
    }

    /// 대상 카페 ID의 16진수 문자열 표현
    pub fn cafe_id_string(&self) -> String {
        self.cafe_id.to_hex()
    }

    /// 주어진 사용자가 이 리뷰의 작성자인지 확인
    ///
    /// 식별자는 불투명한 문자열로 취급하여 16진수 표현으로 비교합니다.
    pub fn is_authored_by(&self, viewer_id: &ObjectId) -> bool {
        self.user_id.to_hex() == viewer_id.to_hex()
    }
}
