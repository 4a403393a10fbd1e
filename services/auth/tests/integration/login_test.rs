use hotelier_auth::error::AuthServiceError;
use hotelier_auth::usecase::resolver::{AccessCodeAuthenticator, access_code_authenticator};
use hotelier_auth::usecase::session::{CheckSessionUseCase, LoginUseCase, LogoutUseCase};
use hotelier_auth_types::token::decode_session_token;
use hotelier_domain::role::Role;
use hotelier_testing::clock::ManualClock;

use crate::helpers::{
    ADMIN_CODE, MockEmployeeRepo, MockProfileRepo, TEST_SECRET, employee, profile, seeded_admin,
    ttl,
};

fn login_usecase(
    profiles: MockProfileRepo,
    employees: MockEmployeeRepo,
    clock: ManualClock,
) -> LoginUseCase<AccessCodeAuthenticator<MockProfileRepo, MockEmployeeRepo>, ManualClock> {
    LoginUseCase {
        authenticator: access_code_authenticator(profiles, employees),
        clock,
        ttl: ttl(),
        secret: TEST_SECRET.to_owned(),
    }
}

fn check_usecase(clock: ManualClock) -> CheckSessionUseCase<ManualClock> {
    CheckSessionUseCase {
        clock,
        ttl: ttl(),
        secret: TEST_SECRET.to_owned(),
    }
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_log_in_seeded_admin() {
    let clock = ManualClock::fixed();
    let usecase = login_usecase(
        MockProfileRepo::new(vec![(ADMIN_CODE, seeded_admin())]),
        MockEmployeeRepo::empty(),
        clock.clone(),
    );

    let out = usecase.execute(ADMIN_CODE).await.unwrap();

    assert_eq!(out.session.identity.id, seeded_admin().id);
    assert_eq!(out.session.identity.role, Role::Admin);
    assert_eq!(out.session.identity.role.home_path(), "/admin");
    assert_eq!(out.session.expires_at, clock_now(&clock) + ttl());

    let restored = decode_session_token(&out.token, TEST_SECRET).unwrap();
    assert_eq!(restored, out.session);
}

#[tokio::test]
async fn should_keep_stored_role_for_profiles() {
    let usecase = login_usecase(
        MockProfileRepo::new(vec![("1111111", profile("Stock", Role::StockManager))]),
        MockEmployeeRepo::empty(),
        ManualClock::fixed(),
    );

    let out = usecase.execute("1111111").await.unwrap();

    assert_eq!(out.session.identity.role, Role::StockManager);
}

#[tokio::test]
async fn should_assign_employee_role_to_employee_codes() {
    let clerk = employee("Nadia", "Haddad");
    let usecase = login_usecase(
        MockProfileRepo::empty(),
        MockEmployeeRepo::new(vec![("2222222", clerk.clone())]),
        ManualClock::fixed(),
    );

    let out = usecase.execute("2222222").await.unwrap();

    assert_eq!(out.session.identity.id, clerk.id);
    assert_eq!(out.session.identity.role, Role::Employee);
    assert_eq!(out.session.identity.name, "Nadia Haddad");
}

#[tokio::test]
async fn should_prefer_profile_when_code_matches_both_tables() {
    let employees = MockEmployeeRepo::new(vec![("3333333", employee("Shadow", "Row"))]);
    let usecase = login_usecase(
        MockProfileRepo::new(vec![("3333333", profile("Guest", Role::User))]),
        employees,
        ManualClock::fixed(),
    );

    let out = usecase.execute("3333333").await.unwrap();

    assert_eq!(out.session.identity.role, Role::User);
}

#[tokio::test]
async fn should_reject_unknown_code() {
    let usecase = login_usecase(
        MockProfileRepo::new(vec![(ADMIN_CODE, seeded_admin())]),
        MockEmployeeRepo::empty(),
        ManualClock::fixed(),
    );

    let result = usecase.execute("0000000").await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_code() {
    let usecase = login_usecase(
        MockProfileRepo::empty(),
        MockEmployeeRepo::empty(),
        ManualClock::fixed(),
    );

    let result = usecase.execute("").await;

    assert!(matches!(result, Err(AuthServiceError::InvalidCode)));
}

#[tokio::test]
async fn should_report_lookup_failure_as_invalid_code() {
    let employees = MockEmployeeRepo::new(vec![("2222222", employee("Nadia", "Haddad"))]);
    let usecase = login_usecase(MockProfileRepo::failing(), employees, ManualClock::fixed());

    let result = usecase.execute("2222222").await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
}

// ── CheckSessionUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_accept_session_until_expiry() {
    let clock = ManualClock::fixed();
    let login = login_usecase(
        MockProfileRepo::new(vec![(ADMIN_CODE, seeded_admin())]),
        MockEmployeeRepo::empty(),
        clock.clone(),
    );
    let out = login.execute(ADMIN_CODE).await.unwrap();
    let check = check_usecase(clock.clone());

    clock.advance(3599);
    let session = check.execute(Some(&out.token)).await.unwrap();
    assert_eq!(session.identity.role, Role::Admin);

    clock.advance(2);
    let result = check.execute(Some(&out.token)).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_missing_or_forged_session() {
    let check = check_usecase(ManualClock::fixed());

    assert!(matches!(
        check.execute(None).await,
        Err(AuthServiceError::InvalidSession)
    ));
    assert!(matches!(
        check.execute(Some("forged")).await,
        Err(AuthServiceError::InvalidSession)
    ));
}

// ── LogoutUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_who_logged_out_and_tolerate_repeats() {
    let clock = ManualClock::fixed();
    let login = login_usecase(
        MockProfileRepo::new(vec![(ADMIN_CODE, seeded_admin())]),
        MockEmployeeRepo::empty(),
        clock.clone(),
    );
    let out = login.execute(ADMIN_CODE).await.unwrap();
    let logout = LogoutUseCase {
        clock,
        ttl: ttl(),
        secret: TEST_SECRET.to_owned(),
    };

    let ended = logout.execute(Some(&out.token)).await;
    assert_eq!(ended.map(|i| i.id), Some(seeded_admin().id));

    assert!(logout.execute(None).await.is_none());
}

fn clock_now(clock: &ManualClock) -> chrono::DateTime<chrono::Utc> {
    use hotelier_auth_types::session::Clock;
    clock.now()
}
