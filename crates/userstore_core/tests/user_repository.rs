use userstore_core::{InMemoryUserRepository, NewUser, PageRequest, UserRepository};

#[test]
fn seed_assigns_sequential_ids_from_one() {
    let repo = InMemoryUserRepository::seeded();

    assert_eq!(repo.count_users(), 3);
    let alen = repo.get_user(1).unwrap();
    assert_eq!(alen.name, "Alen Muratovic");
    assert_eq!(alen.email, "alen@example.com");
    assert_eq!(repo.get_user(2).unwrap().name, "Ziga Zoric");
    assert_eq!(repo.get_user(3).unwrap().name, "David Lazic");
    assert!(repo.get_user(0).is_none());
}

#[test]
fn create_then_get_returns_identical_record() {
    let repo = InMemoryUserRepository::new();

    let created = repo.create_user(&NewUser::new("Mia", "mia@example.com"));
    let loaded = repo.get_user(created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.created_at, loaded.updated_at);
    assert!(loaded.validate().is_ok());
}

#[test]
fn get_unknown_id_is_none() {
    let repo = InMemoryUserRepository::seeded();
    assert!(repo.get_user(99).is_none());
    assert!(repo.get_user(-1).is_none());
}

#[test]
fn update_overwrites_fields_and_advances_updated_at() {
    let repo = InMemoryUserRepository::seeded();
    let before = repo.get_user(2).unwrap();

    let updated = repo
        .update_user(2, &NewUser::new("Ziga Z.", "ziga.z@example.com"))
        .unwrap();
    let loaded = repo.get_user(2).unwrap();

    assert_eq!(loaded, updated);
    assert_eq!(loaded.name, "Ziga Z.");
    assert_eq!(loaded.email, "ziga.z@example.com");
    assert_eq!(loaded.created_at, before.created_at);
    assert!(loaded.updated_at > before.updated_at);
}

#[test]
fn update_unknown_id_has_no_side_effects() {
    let repo = InMemoryUserRepository::seeded();

    assert!(repo
        .update_user(42, &NewUser::new("Ghost", "ghost@example.com"))
        .is_none());
    assert_eq!(repo.count_users(), 3);
    assert!(!repo.user_exists(42));
    assert!(repo.get_user_by_email("ghost@example.com").is_none());
}

#[test]
fn delete_is_idempotent() {
    let repo = InMemoryUserRepository::seeded();

    assert!(repo.delete_user(1));
    assert!(!repo.delete_user(1));
    assert!(repo.get_user(1).is_none());
    assert!(!repo.user_exists(1));
}

#[test]
fn count_after_seed_and_delete() {
    let repo = InMemoryUserRepository::seeded();
    repo.delete_user(3);
    assert_eq!(repo.count_users(), 2);
}

#[test]
fn list_pages_in_ascending_id_order() {
    let repo = InMemoryUserRepository::seeded();

    let first: Vec<_> = repo
        .list_users(&PageRequest::new(2, 1))
        .into_iter()
        .map(|user| user.id)
        .collect();
    assert_eq!(first, vec![1, 2]);

    let second: Vec<_> = repo
        .list_users(&PageRequest::new(2, 2))
        .into_iter()
        .map(|user| user.id)
        .collect();
    assert_eq!(second, vec![3]);
}

#[test]
fn list_past_the_end_is_empty() {
    let repo = InMemoryUserRepository::seeded();
    assert!(repo.list_users(&PageRequest::new(2, 3)).is_empty());
    assert!(repo.list_users(&PageRequest::new(10, 500)).is_empty());
}

#[test]
fn list_skips_deleted_ids_without_gaps_in_pages() {
    let repo = InMemoryUserRepository::seeded();
    repo.create_user(&NewUser::new("Four", "four@example.com"));
    repo.delete_user(2);

    let ids: Vec<_> = repo
        .list_users(&PageRequest::new(2, 1))
        .into_iter()
        .map(|user| user.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let ids: Vec<_> = repo
        .list_users(&PageRequest::new(2, 2))
        .into_iter()
        .map(|user| user.id)
        .collect();
    assert_eq!(ids, vec![4]);
}

#[test]
fn get_by_email_is_case_insensitive_and_stores_verbatim() {
    let repo = InMemoryUserRepository::seeded();
    let created = repo.create_user(&NewUser::new("Mixed", "Mixed.Case@Example.com"));

    let alen = repo.get_user_by_email("ALEN@EXAMPLE.COM").unwrap();
    assert_eq!(alen.id, 1);
    assert_eq!(alen.email, "alen@example.com");

    let mixed = repo.get_user_by_email("mixed.case@example.com").unwrap();
    assert_eq!(mixed.id, created.id);
    assert_eq!(mixed.email, "Mixed.Case@Example.com");

    assert!(repo.get_user_by_email("nobody@example.com").is_none());
}

#[test]
fn duplicate_emails_are_accepted() {
    let repo = InMemoryUserRepository::seeded();
    let duplicate = repo.create_user(&NewUser::new("Alen Two", "ALEN@example.com"));

    assert_eq!(repo.count_users(), 4);
    let found = repo.get_user_by_email("alen@example.com").unwrap();
    assert!(found.id == 1 || found.id == duplicate.id);
}

#[test]
fn returned_copies_do_not_alias_stored_records() {
    let repo = InMemoryUserRepository::seeded();

    let mut copy = repo.get_user(1).unwrap();
    copy.name = "Changed locally".to_string();

    assert_eq!(repo.get_user(1).unwrap().name, "Alen Muratovic");
}
