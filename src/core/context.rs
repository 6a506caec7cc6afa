//! 애플리케이션 컨텍스트
//!
//! 시작 시점에 한 번 구성되어 모든 핸들러에 `web::Data`로 주입되는
//! 명시적 의존성 묶음입니다. 전역 가변 상태나 서비스 로케이터 없이,
//! 핸들러가 쓰는 능력(저장소, 서비스)을 값으로 들고 다닙니다.

use std::sync::Arc;

use crate::db::Database;
use crate::repositories::{
    CafeRepository, CafeStore, ReviewRepository, ReviewStore, SavedPlaceRepository,
    SavedPlaceStore, UserRepository, UserStore,
};
use crate::services::AccountService;

/// 핸들러에 주입되는 애플리케이션 컨텍스트
pub struct AppContext {
    /// `users` 컬렉션 저장소
    pub users: Arc<dyn UserStore>,
    /// `cafes` 컬렉션 저장소
    pub cafes: Arc<dyn CafeStore>,
    /// `reviews` 컬렉션 저장소
    pub reviews: Arc<dyn ReviewStore>,
    /// `saved_places` 컬렉션 저장소
    pub saved_places: Arc<dyn SavedPlaceStore>,
    /// 계정 서비스
    pub accounts: AccountService,
}

impl AppContext {
    /// 저장소 구현을 직접 지정해 컨텍스트를 구성합니다.
    ///
    /// 테스트는 이 생성자에 인메모리 구현을 넘깁니다.
    pub fn new(
        users: Arc<dyn UserStore>,
        cafes: Arc<dyn CafeStore>,
        reviews: Arc<dyn ReviewStore>,
        saved_places: Arc<dyn SavedPlaceStore>,
    ) -> Self {
        let accounts = AccountService::new(users.clone());

        Self {
            users,
            cafes,
            reviews,
            saved_places,
            accounts,
        }
    }

    /// MongoDB 연결로부터 컨텍스트를 구성합니다.
    pub fn with_mongo(db: Arc<Database>) -> Self {
        Self::new(
            Arc::new(UserRepository::new(db.clone())),
            Arc::new(CafeRepository::new(db.clone())),
            Arc::new(ReviewRepository::new(db.clone())),
            Arc::new(SavedPlaceRepository::new(db)),
        )
    }
}
