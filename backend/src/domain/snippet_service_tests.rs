//! Behaviour coverage for the snippet lifecycle service.

use std::sync::Arc;

use rstest::rstest;

use crate::domain::ports::UserRepository;
use crate::domain::{
    Error, ErrorCode, Language, SnippetDraft, SnippetId, SnippetPatch, SnippetService, Style,
    User, UserId, Username,
};
use crate::outbound::persistence::{MemorySnippetRepository, MemoryUserRepository};

struct Harness {
    service: SnippetService,
    ada: UserId,
    grace: UserId,
}

async fn harness() -> Harness {
    let users = Arc::new(MemoryUserRepository::new());
    let snippets = Arc::new(MemorySnippetRepository::new());
    let ada = seed_user(&users, "ada").await;
    let grace = seed_user(&users, "grace").await;
    Harness {
        service: SnippetService::new(snippets, users),
        ada,
        grace,
    }
}

async fn seed_user(users: &Arc<MemoryUserRepository>, name: &str) -> UserId {
    let username = match Username::new(name) {
        Ok(username) => username,
        Err(err) => panic!("fixture username must validate: {err}"),
    };
    let user = User::new(UserId::random(), username);
    let id = *user.id();
    assert!(users.upsert(&user).await.is_ok());
    id
}

fn draft(title: &str, code: &str) -> SnippetDraft {
    match SnippetDraft::new(title, code, false, Language::Python, Style::Friendly) {
        Ok(draft) => draft,
        Err(err) => panic!("fixture draft must validate: {err}"),
    }
}

fn code_of(err: Option<Error>) -> Option<ErrorCode> {
    err.map(|e| e.code())
}

#[tokio::test]
async fn create_assigns_owner_from_the_principal() {
    let h = harness().await;
    let view = h.service.create(draft("hello", "print(1)"), &h.ada).await;
    let Ok(view) = view else {
        panic!("create must succeed: {view:?}");
    };
    assert_eq!(view.snippet.owner(), &h.ada);
    assert_eq!(view.owner.as_ref(), "ada");
}

#[tokio::test]
async fn create_rejects_unknown_principals() {
    let h = harness().await;
    let ghost = UserId::random();
    let result = h.service.create(draft("x", "y"), &ghost).await;
    assert_eq!(code_of(result.err()), Some(ErrorCode::Unauthorized));
}

#[tokio::test]
async fn retrieve_missing_is_not_found_never_forbidden() {
    let h = harness().await;
    let result = h.service.retrieve(&SnippetId::random()).await;
    assert_eq!(code_of(result.err()), Some(ErrorCode::NotFound));
}

#[rstest]
#[case::update(false)]
#[case::patch(true)]
#[tokio::test]
async fn non_owner_writes_are_forbidden_and_leave_the_record_unchanged(#[case] partial: bool) {
    let h = harness().await;
    let created = h.service.create(draft("hello", "print(1)"), &h.ada).await;
    let Ok(created) = created else {
        panic!("create must succeed: {created:?}");
    };
    let id = *created.snippet.id();

    let result = if partial {
        let patch = SnippetPatch::new(Some("hacked".to_owned()), None, None, None, None);
        let Ok(patch) = patch else {
            panic!("fixture patch must validate");
        };
        h.service.patch(&id, patch, &h.grace).await
    } else {
        h.service.update(&id, draft("hacked", "pwned"), &h.grace).await
    };
    assert_eq!(code_of(result.err()), Some(ErrorCode::Forbidden));

    let unchanged = h.service.retrieve(&id).await;
    assert_eq!(
        unchanged.map(|v| v.snippet.title().to_owned()).ok(),
        Some("hello".to_owned())
    );
}

#[tokio::test]
async fn owner_update_replaces_fields_but_never_identity() {
    let h = harness().await;
    let created = h.service.create(draft("hello", "print(1)"), &h.ada).await;
    let Ok(created) = created else {
        panic!("create must succeed: {created:?}");
    };
    let id = *created.snippet.id();
    let created_at = created.snippet.created();

    let updated = h.service.update(&id, draft("hi", "print(2)"), &h.ada).await;
    let Ok(updated) = updated else {
        panic!("update must succeed: {updated:?}");
    };
    assert_eq!(updated.snippet.title(), "hi");
    assert_eq!(updated.snippet.code(), "print(2)");
    assert_eq!(updated.snippet.owner(), &h.ada);
    assert_eq!(updated.snippet.created(), created_at);
}

#[tokio::test]
async fn patch_merges_only_present_fields() {
    let h = harness().await;
    let created = h.service.create(draft("hello", "print(1)"), &h.ada).await;
    let Ok(created) = created else {
        panic!("create must succeed: {created:?}");
    };
    let id = *created.snippet.id();

    let patch = SnippetPatch::new(None, None, Some(true), Some(Language::Rust), None);
    let Ok(patch) = patch else {
        panic!("fixture patch must validate");
    };
    let patched = h.service.patch(&id, patch, &h.ada).await;
    let Ok(patched) = patched else {
        panic!("patch must succeed: {patched:?}");
    };
    assert_eq!(patched.snippet.title(), "hello");
    assert_eq!(patched.snippet.code(), "print(1)");
    assert!(patched.snippet.linenos());
    assert_eq!(patched.snippet.language(), Language::Rust);
}

#[tokio::test]
async fn destroy_requires_ownership_and_is_not_idempotent() {
    let h = harness().await;
    let created = h.service.create(draft("hello", "print(1)"), &h.ada).await;
    let Ok(created) = created else {
        panic!("create must succeed: {created:?}");
    };
    let id = *created.snippet.id();

    let denied = h.service.destroy(&id, &h.grace).await;
    assert_eq!(code_of(denied.err()), Some(ErrorCode::Forbidden));
    assert!(h.service.retrieve(&id).await.is_ok());

    assert!(h.service.destroy(&id, &h.ada).await.is_ok());
    let again = h.service.destroy(&id, &h.ada).await;
    assert_eq!(code_of(again.err()), Some(ErrorCode::NotFound));
}

#[tokio::test]
async fn list_orders_by_creation_time() {
    let h = harness().await;
    for code in ["one", "two", "three"] {
        let result = h.service.create(draft(code, code), &h.ada).await;
        assert!(result.is_ok());
    }
    let listed = h.service.list().await.unwrap_or_default();
    let titles: Vec<&str> = listed.iter().map(|v| v.snippet.title()).collect();
    assert_eq!(titles, ["one", "two", "three"]);
}

#[tokio::test]
async fn highlight_renders_html_for_existing_snippets_only() {
    let h = harness().await;
    let created = h.service.create(draft("demo", "a < b"), &h.ada).await;
    let Ok(created) = created else {
        panic!("create must succeed: {created:?}");
    };

    let html = h.service.highlight(created.snippet.id()).await;
    assert!(html.is_ok_and(|h| h.contains("a &lt; b")));

    let missing = h.service.highlight(&SnippetId::random()).await;
    assert_eq!(code_of(missing.err()), Some(ErrorCode::NotFound));
}
