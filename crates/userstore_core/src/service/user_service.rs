//! User access façade.
//!
//! # Responsibility
//! - Translate caller-facing verbs into repository calls.
//! - Substitute pagination defaults and clamp out-of-range page input.
//!
//! # Invariants
//! - The service holds no state besides its repository.
//! - No business validation happens here: empty names and malformed or
//!   duplicate emails are passed through unchanged.

use crate::model::user::{NewUser, User, UserId};
use crate::repo::page::{PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::repo::user_repo::UserRepository;
use log::{debug, info};

/// Use-case service wrapper for user operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository contract.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Gets one user by id; `None` when unknown.
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.repo.get_user(id)
    }

    /// Lists users ordered by ascending id.
    ///
    /// # Contract
    /// - Omitted `page_size` defaults to 10, omitted `page_number` to 1.
    /// - Values below 1 are clamped to 1.
    /// - Pages past the end yield an empty list.
    pub fn list_users(&self, page_size: Option<i32>, page_number: Option<i32>) -> Vec<User> {
        let page = PageRequest::new(
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
        );
        let users = self.repo.list_users(&page);
        debug!(
            "event=users_listed module=service page_number={} page_size={} returned={}",
            page.page_number(),
            page.page_size(),
            users.len()
        );
        users
    }

    /// Creates a user and returns the stored record with its assigned id.
    pub fn create_user(&self, name: impl Into<String>, email: impl Into<String>) -> User {
        let user = self.repo.create_user(&NewUser::new(name, email));
        info!("event=user_created module=service status=ok id={}", user.id);
        user
    }

    /// Overwrites name and email of an existing user.
    ///
    /// Returns `None` without side effects when `id` is unknown.
    pub fn update_user(
        &self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Option<User> {
        let updated = self.repo.update_user(id, &NewUser::new(name, email));
        match &updated {
            Some(_) => info!("event=user_updated module=service status=ok id={id}"),
            None => info!("event=user_updated module=service status=not_found id={id}"),
        }
        updated
    }

    /// Deletes a user; `false` when nothing was removed.
    pub fn delete_user(&self, id: UserId) -> bool {
        let removed = self.repo.delete_user(id);
        info!("event=user_deleted module=service id={id} removed={removed}");
        removed
    }

    pub fn count_users(&self) -> usize {
        self.repo.count_users()
    }

    pub fn user_exists(&self, id: UserId) -> bool {
        self.repo.user_exists(id)
    }

    /// Finds a user by case-insensitive email match.
    ///
    /// With duplicate emails, which match is returned is unspecified.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.repo.get_user_by_email(email)
    }
}
