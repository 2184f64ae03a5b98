//! Tests for the users resource resolver.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::UserDraft;
use crate::domain::ports::MockUserRepository;

fn resolver(repo: MockUserRepository) -> UserResolver<MockUserRepository> {
    UserResolver::new(Arc::new(repo))
}

fn user(id: u64, name: &str, bio: &str) -> User {
    User::new(
        UserId::new(id),
        UserDraft::new(name, bio).expect("fixture draft"),
    )
}

fn ada() -> User {
    user(1, "Ada", "mathematician")
}

fn payload(name: Option<&str>, bio: Option<&str>) -> UserPayload {
    UserPayload {
        name: name.map(str::to_owned),
        bio: bio.map(str::to_owned),
    }
}

#[rstest]
#[case(payload(None, Some("mathematician")))]
#[case(payload(Some("Ada"), None))]
#[case(payload(Some(""), Some("mathematician")))]
#[case(payload(Some("Ada"), Some("")))]
#[case(payload(None, None))]
#[tokio::test]
async fn create_rejects_incomplete_payload_without_touching_storage(#[case] body: UserPayload) {
    let mut repo = MockUserRepository::new();
    repo.expect_create().never();

    let outcome = resolver(repo).create(body).await;

    assert_eq!(
        outcome,
        Outcome::ValidationFailed(messages::CREATE_INVALID.to_owned())
    );
}

#[tokio::test]
async fn create_returns_stored_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|draft| draft.name() == "Ada" && draft.bio() == "mathematician")
        .times(1)
        .return_once(|draft| Ok(User::new(UserId::new(1), draft)));

    let outcome = resolver(repo)
        .create(UserPayload::new("Ada", "mathematician"))
        .await;

    assert_eq!(outcome, Outcome::Created(ada()));
}

#[tokio::test]
async fn create_accepts_whitespace_values_verbatim() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|draft| draft.name() == "   " && draft.bio() == "x")
        .times(1)
        .return_once(|draft| Ok(User::new(UserId::new(1), draft)));

    let outcome = resolver(repo).create(UserPayload::new("   ", "x")).await;

    assert_eq!(outcome, Outcome::Created(user(1, "   ", "x")));
}

#[tokio::test]
async fn create_reports_storage_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::query("disk full")));

    let outcome = resolver(repo)
        .create(UserPayload::new("Ada", "mathematician"))
        .await;

    assert_eq!(
        outcome,
        Outcome::StorageFailed(messages::CREATE_FAILED.to_owned())
    );
}

#[tokio::test]
async fn list_treats_empty_store_as_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_list().times(1).return_once(|| Ok(Vec::new()));

    let outcome = resolver(repo).list().await;

    assert_eq!(outcome, Outcome::OkList(Vec::new()));
}

#[tokio::test]
async fn list_returns_records() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Ok(vec![ada(), user(2, "Grace", "admiral")]));

    let Outcome::OkList(users) = resolver(repo).list().await else {
        panic!("expected a list outcome");
    };
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].name(), "Grace");
}

#[tokio::test]
async fn list_reports_storage_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(UserPersistenceError::connection("refused")));

    let outcome = resolver(repo).list().await;

    assert_eq!(
        outcome,
        Outcome::StorageFailed(messages::LIST_FAILED.to_owned())
    );
}

#[tokio::test]
async fn get_returns_existing_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == UserId::new(1))
        .times(1)
        .return_once(|_| Ok(Some(ada())));

    assert_eq!(resolver(repo).get("1").await, Outcome::Ok(ada()));
}

#[tokio::test]
async fn get_reports_missing_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    assert_eq!(resolver(repo).get("99").await, Outcome::not_found());
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("-1")]
#[tokio::test]
async fn get_treats_unparseable_ids_as_missing(#[case] raw: &str) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().never();

    assert_eq!(resolver(repo).get(raw).await, Outcome::not_found());
}

#[tokio::test]
async fn get_distinguishes_failure_from_absence() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::query("timeout")));

    assert_eq!(
        resolver(repo).get("1").await,
        Outcome::StorageFailed(messages::FETCH_FAILED.to_owned())
    );
}

#[rstest]
#[case(payload(Some("Ada"), Some("mathematician")))]
#[case(payload(None, None))]
#[case(payload(Some(""), Some("")))]
#[tokio::test]
async fn update_checks_existence_before_payload(#[case] body: UserPayload) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_update().never();

    assert_eq!(resolver(repo).update("7", body).await, Outcome::not_found());
}

#[rstest]
#[case(payload(Some("Ada"), None))]
#[case(payload(Some(""), Some("poet")))]
#[case(payload(None, Some("poet")))]
#[tokio::test]
async fn update_rejects_incomplete_payload_for_existing_record(#[case] body: UserPayload) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ada())));
    repo.expect_update().never();

    assert_eq!(
        resolver(repo).update("1", body).await,
        Outcome::ValidationFailed(messages::UPDATE_INVALID.to_owned())
    );
}

#[tokio::test]
async fn update_replaces_fields() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ada())));
    repo.expect_update()
        .withf(|id, draft| *id == UserId::new(1) && draft.bio() == "poet")
        .times(1)
        .return_once(|id, draft| Ok(User::new(id, draft)));

    let outcome = resolver(repo)
        .update("1", UserPayload::new("Ada", "poet"))
        .await;

    assert_eq!(outcome, Outcome::Ok(user(1, "Ada", "poet")));
}

#[tokio::test]
async fn update_reports_storage_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ada())));
    repo.expect_update()
        .times(1)
        .return_once(|_, _| Err(UserPersistenceError::query("constraint")));

    let outcome = resolver(repo)
        .update("1", UserPayload::new("Ada", "poet"))
        .await;

    assert_eq!(
        outcome,
        Outcome::StorageFailed(messages::UPDATE_FAILED.to_owned())
    );
}

#[tokio::test]
async fn update_reports_lookup_failure_as_modification_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::connection("refused")));
    repo.expect_update().never();

    let outcome = resolver(repo).update("1", UserPayload::default()).await;

    assert_eq!(
        outcome,
        Outcome::StorageFailed(messages::UPDATE_FAILED.to_owned())
    );
}

#[tokio::test]
async fn update_racing_a_delete_resolves_as_missing() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ada())));
    repo.expect_update()
        .times(1)
        .return_once(|id, _| Err(UserPersistenceError::not_found(id)));

    let outcome = resolver(repo)
        .update("1", UserPayload::new("Ada", "poet"))
        .await;

    assert_eq!(outcome, Outcome::not_found());
}

#[tokio::test]
async fn delete_removes_existing_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ada())));
    repo.expect_delete()
        .withf(|id| *id == UserId::new(1))
        .times(1)
        .return_once(|_| Ok(()));

    assert_eq!(resolver(repo).delete("1").await, Outcome::NoContent);
}

#[tokio::test]
async fn delete_reports_missing_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_delete().never();

    assert_eq!(resolver(repo).delete("1").await, Outcome::not_found());
}

#[tokio::test]
async fn delete_reports_storage_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ada())));
    repo.expect_delete()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::query("locked")));

    assert_eq!(
        resolver(repo).delete("1").await,
        Outcome::StorageFailed(messages::DELETE_FAILED.to_owned())
    );
}

#[tokio::test]
async fn delete_reports_lookup_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::connection("refused")));
    repo.expect_delete().never();

    assert_eq!(
        resolver(repo).delete("1").await,
        Outcome::StorageFailed(messages::DELETE_FAILED.to_owned())
    );
}
