//! User repository contract and concurrent in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD, count and lookup APIs over the user map.
//! - Allocate identifiers atomically under concurrent creates.
//!
//! # Invariants
//! - `next_id` starts at 1 and only ever moves forward.
//! - Writes hold the map's write lock only while touching one entry, so a
//!   reader never observes a half-applied update.
//! - List, count and email scans run under one read lock and see a single
//!   consistent key set.
//! - Returned users are clones; mutating them does not touch the store.

use crate::model::user::{NewUser, User, UserId};
use crate::repo::page::PageRequest;
use log::debug;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

const FIRST_USER_ID: UserId = 1;

/// Repository interface for user storage.
pub trait UserRepository {
    fn get_user(&self, id: UserId) -> Option<User>;
    fn list_users(&self, page: &PageRequest) -> Vec<User>;
    fn create_user(&self, candidate: &NewUser) -> User;
    fn update_user(&self, id: UserId, candidate: &NewUser) -> Option<User>;
    fn delete_user(&self, id: UserId) -> bool;
    fn count_users(&self) -> usize;
    fn user_exists(&self, id: UserId) -> bool;
    fn get_user_by_email(&self, email: &str) -> Option<User>;
}

/// Fixture users loaded by [`InMemoryUserRepository::seeded`].
pub fn sample_users() -> Vec<NewUser> {
    vec![
        NewUser::new("Alen Muratovic", "alen@example.com"),
        NewUser::new("Ziga Zoric", "ziga@example.com"),
        NewUser::new("David Lazic", "david@example.com"),
    ]
}

/// Volatile, process-local user store.
///
/// # Thread Safety
/// - Records live in one `BTreeMap` behind a `parking_lot::RwLock`; reads
///   share the lock and iterate in ascending id order without sorting.
/// - `next_id` is advanced with a single `fetch_add`, so two concurrent
///   creates can never be handed the same id.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(FIRST_USER_ID),
        }
    }

    /// Creates a store preloaded with `initial` users, assigning ids
    /// sequentially from 1 in iteration order.
    pub fn with_seed<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = NewUser>,
    {
        let repo = Self::new();
        for candidate in initial {
            repo.insert_new(&candidate);
        }
        debug!(
            "event=store_seed module=repo status=ok count={}",
            repo.users.read().len()
        );
        repo
    }

    /// Creates a store preloaded with [`sample_users`].
    pub fn seeded() -> Self {
        Self::with_seed(sample_users())
    }

    fn allocate_id(&self) -> UserId {
        self.next_id.fetch_add(1, Ordering::AcqRel)
    }

    fn insert_new(&self, candidate: &NewUser) -> User {
        let user = User::from_candidate(self.allocate_id(), candidate);
        debug_assert!(user.validate().is_ok());
        self.users.write().insert(user.id, user.clone());
        user
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_user(&self, id: UserId) -> Option<User> {
        debug!("event=user_get module=repo id={id}");
        self.users.read().get(&id).cloned()
    }

    fn list_users(&self, page: &PageRequest) -> Vec<User> {
        debug!(
            "event=user_list module=repo page_number={} page_size={}",
            page.page_number(),
            page.page_size()
        );
        self.users
            .read()
            .values()
            .skip(page.offset())
            .take(page.page_size())
            .cloned()
            .collect()
    }

    fn create_user(&self, candidate: &NewUser) -> User {
        let user = self.insert_new(candidate);
        debug!("event=user_create module=repo status=ok id={}", user.id);
        user
    }

    fn update_user(&self, id: UserId, candidate: &NewUser) -> Option<User> {
        let updated = self.users.write().get_mut(&id).map(|user| {
            user.apply(candidate);
            user.clone()
        });
        debug!(
            "event=user_update module=repo id={id} found={}",
            updated.is_some()
        );
        updated
    }

    fn delete_user(&self, id: UserId) -> bool {
        let removed = self.users.write().remove(&id).is_some();
        debug!("event=user_delete module=repo id={id} removed={removed}");
        removed
    }

    fn count_users(&self) -> usize {
        self.users.read().len()
    }

    fn user_exists(&self, id: UserId) -> bool {
        self.users.read().contains_key(&id)
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        debug!("event=user_get_by_email module=repo");
        self.users
            .read()
            .values()
            .find(|user| user.matches_email(email))
            .cloned()
    }
}
