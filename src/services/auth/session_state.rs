//! 세션 상태 관리
//!
//! "누가 로그인해 있는가"에 대한 단일 진실 공급원입니다.
//! 전역 변수가 아니라 명시적으로 소유되는 객체이며, `web::Data<SessionState>`로
//! 필요한 컴포넌트에 주입됩니다.
//!
//! # 상태 전이 (자격 증명 슬롯 기준)
//!
//! ```text
//! Empty ──login 성공──► Present&Valid ──exp 경과──► Present&Expired
//!   ▲                        │                           │
//!   └────────logout──────────┴───────────logout──────────┘
//! ```
//!
//! `Present&Valid`와 `Present&Expired`는 저장된 플래그가 아니라
//! [`TokenValidator::is_valid`]를 매번 다시 계산하여 구분합니다.
//!
//! # 쓰기 규칙
//!
//! 세션 슬롯을 바꾸는 것은 `login`과 `logout`뿐입니다. 다른 컴포넌트는 읽기만 합니다.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::dto::RegistrationResult;
use crate::domain::models::CurrentUser;
use crate::errors::{AppError, AppResult};
use crate::services::auth::{AuthBackend, TokenStore, TokenValidator};

/// 현재 자격 증명과 그로부터 디코딩한 사용자 정보
#[derive(Debug, Clone, Default)]
struct SessionSlot {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl SessionSlot {
    /// 디코딩에 실패해도 원본 자격 증명은 그대로 유지하고 사용자 정보만 비웁니다.
    fn from_token(token: Option<String>) -> Self {
        let user = token.as_deref().and_then(|t| match TokenValidator::decode_claims(t) {
            Ok(claims) => Some(CurrentUser::from_claims(&claims)),
            Err(e) => {
                log::warn!("저장된 자격 증명에서 사용자 정보를 읽지 못했습니다: {}", e);
                None
            }
        });

        Self { token, user }
    }
}

/// 진행 중인 로그인 표시. drop 되면 (취소 포함) 해제됩니다.
struct InFlightLogin<'a>(&'a AtomicBool);

impl<'a> InFlightLogin<'a> {
    fn acquire(flag: &'a AtomicBool) -> AppResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| AppError::LoginInProgress)
    }
}

impl Drop for InFlightLogin<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// 프로세스 전역 세션 상태
///
/// 한 번에 최대 하나의 자격 증명만 보관합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let store = TokenStore::new(Arc::new(FileStorage::open(StorageConfig::path())?));
/// let backend = Arc::new(HttpAuthBackend::from_env(store.clone())?);
/// let session = SessionState::initialize(store, backend);
///
/// session.login("ops@example.com", "SecurePass123").await?;
/// assert!(session.is_authenticated());
///
/// session.logout();
/// assert!(!session.is_authenticated());
/// ```
pub struct SessionState {
    store: TokenStore,
    backend: Arc<dyn AuthBackend>,
    slot: RwLock<SessionSlot>,
    login_in_flight: AtomicBool,
    /// logout 때마다 증가. 보류 중인 로그인 결과가 아직 유효한지 판단하는 데 사용
    generation: AtomicU64,
}

impl SessionState {
    /// 보관소에 남아 있는 자격 증명으로 세션을 초기화합니다.
    ///
    /// 네트워크 호출은 하지 않습니다. 만료된 자격 증명도 그대로 읽어 들이며,
    /// 만료 여부는 [`is_authenticated`](Self::is_authenticated) 호출 시점에 판단합니다.
    pub fn initialize(store: TokenStore, backend: Arc<dyn AuthBackend>) -> Self {
        let slot = SessionSlot::from_token(store.load());

        match (&slot.token, &slot.user) {
            (None, _) => log::info!("🔓 저장된 자격 증명 없음 - 로그아웃 상태로 시작"),
            (Some(_), Some(user)) => log::info!(
                "🔑 저장된 자격 증명 복원 - 사용자: {}",
                user.display_name().unwrap_or("-")
            ),
            (Some(_), None) => log::warn!("🔑 저장된 자격 증명 복원 (사용자 정보 없음)"),
        }

        Self {
            store,
            backend,
            slot: RwLock::new(slot),
            login_in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    /// 현재 자격 증명이 유효한지 매번 다시 계산합니다.
    pub fn is_authenticated(&self) -> bool {
        TokenValidator::is_valid(self.read_slot().token.as_deref())
    }

    /// 현재 보관 중인 자격 증명 (만료 여부와 무관)
    pub fn token(&self) -> Option<String> {
        self.read_slot().token.clone()
    }

    /// 현재 사용자 정보
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.read_slot().user.clone()
    }

    /// 인증 백엔드로 로그인합니다.
    ///
    /// 성공하면 새 자격 증명을 보관소와 세션에 기록합니다.
    /// 실패하면 백엔드 에러를 그대로 돌려주며 세션은 바뀌지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::LoginInProgress` - 다른 로그인이 아직 끝나지 않음
    /// * `AppError::LoginSuperseded` - 응답 도착 전에 로그아웃되어 결과를 버림
    /// * `AppError::BackendUnavailable` / `AppError::BackendRejected` - 백엔드 실패
    /// * `AppError::StorageError` - 자격 증명 저장 실패
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let _in_flight = InFlightLogin::acquire(&self.login_in_flight)?;
        let started_at = self.generation.load(Ordering::Acquire);

        let response = self.backend.login(email, password).await?;

        let mut slot = self.write_slot();
        if self.generation.load(Ordering::Acquire) != started_at {
            log::warn!("로그인 응답 도착 전에 세션이 변경되어 결과를 버립니다");
            return Err(AppError::LoginSuperseded);
        }

        self.store.save(&response.token)?;
        *slot = SessionSlot::from_token(Some(response.token));

        log::info!(
            "✅ 로그인 성공 - 사용자: {}",
            slot.user.as_ref().and_then(CurrentUser::display_name).unwrap_or(email)
        );
        Ok(())
    }

    /// 인증 백엔드에 회원가입을 위임합니다. 세션은 바뀌지 않습니다.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<RegistrationResult> {
        let result = self.backend.register(name, email, password).await?;
        log::info!("회원가입 요청 처리 - 성공: {}", result.success);
        Ok(result)
    }

    /// 로컬 세션을 무효화합니다. 항상 성공하며 백엔드에는 알리지 않습니다.
    pub fn logout(&self) {
        let mut slot = self.write_slot();
        self.generation.fetch_add(1, Ordering::AcqRel);

        if let Err(e) = self.store.clear() {
            log::error!("저장된 자격 증명 삭제 실패: {}", e);
        }
        *slot = SessionSlot::default();

        log::info!("🚪 로그아웃 완료");
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, SessionSlot> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, SessionSlot> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }
}
