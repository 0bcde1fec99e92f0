//! In-memory user directory with reporting queries.
//!
//! Age filters: `users_over_30` and `all_users_at_least` include the boundary,
//! `users_in_age_range` is inclusive on both ends, and
//! `upper_case_names_above_age` is strictly greater. Max-style queries keep
//! the earliest user on a tie.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tally_core::query::{first_max_by_key, group_by};
use tally_core::{DomainError, DomainResult, Money};

use crate::user::User;

/// Ordered, mutable collection of users.
///
/// Not synchronized: wrap in a lock if it must be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut directory = Self::new();
        for user in users {
            directory.add(user);
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn add(&mut self, user: User) {
        tracing::debug!(name = user.name(), department = user.department(), "user added");
        self.users.push(user);
    }

    pub fn names(&self) -> Vec<&str> {
        self.users.iter().map(User::name).collect()
    }

    /// Youngest first; equal ages keep directory order.
    pub fn sorted_by_age(&self) -> Vec<&User> {
        let mut view: Vec<&User> = self.users.iter().collect();
        view.sort_by_key(|user| user.age());
        view
    }

    pub fn users_over_30(&self) -> Vec<&User> {
        self.filter(|user| user.age() >= 30)
    }

    pub fn group_by_department(&self) -> BTreeMap<String, Vec<&User>> {
        group_by(&self.users, |user| user.department().to_owned())
    }

    pub fn total_age(&self) -> u64 {
        self.users.iter().map(|user| u64::from(user.age())).sum()
    }

    /// Mean salary, rounded to the nearest cent.
    pub fn average_salary(&self) -> DomainResult<Money> {
        Money::average(self.users.iter().map(User::salary))
            .ok_or_else(|| DomainError::not_found("no users to average salary over"))
    }

    /// Users aged `min_age..=max_age`.
    pub fn users_in_age_range(&self, min_age: u32, max_age: u32) -> Vec<&User> {
        self.filter(|user| (min_age..=max_age).contains(&user.age()))
    }

    /// First user with exactly this name.
    pub fn find_by_name(&self, name: &str) -> DomainResult<&User> {
        self.users
            .iter()
            .find(|user| user.name() == name)
            .ok_or_else(|| DomainError::not_found(format!("user named {name}")))
    }

    /// Whether every user is at least `age` (true for an empty directory).
    pub fn all_users_at_least(&self, age: u32) -> bool {
        self.users.iter().all(|user| user.age() >= age)
    }

    /// First user matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> DomainResult<&User>
    where
        P: FnMut(&User) -> bool,
    {
        self.users
            .iter()
            .find(|user| predicate(user))
            .ok_or_else(|| DomainError::not_found("no user matches the predicate"))
    }

    /// Oldest user in each department; the earliest listed wins on equal age.
    pub fn oldest_user_by_department(&self) -> BTreeMap<String, &User> {
        self.group_by_department()
            .into_iter()
            .filter_map(|(department, members)| {
                first_max_by_key(members, |user| user.age()).map(|oldest| (department, oldest))
            })
            .collect()
    }

    /// User with the most characters in their name; the earliest listed wins a tie.
    pub fn user_with_longest_name(&self) -> DomainResult<&User> {
        first_max_by_key(&self.users, |user| user.name_len())
            .ok_or_else(|| DomainError::not_found("no users in directory"))
    }

    /// Upper-cased names of users strictly older than `age`.
    pub fn upper_case_names_above_age(&self, age: u32) -> Vec<String> {
        self.users
            .iter()
            .filter(|user| user.age() > age)
            .map(|user| user.name().to_uppercase())
            .collect()
    }

    pub fn map<R, F>(&self, mapper: F) -> Vec<R>
    where
        F: FnMut(&User) -> R,
    {
        self.users.iter().map(mapper).collect()
    }

    /// All names, comma separated.
    pub fn joined_names(&self) -> String {
        self.names().join(", ")
    }

    pub fn average_age_by_department(&self) -> BTreeMap<String, f64> {
        self.group_by_department()
            .into_iter()
            .map(|(department, members)| {
                let total: u64 = members.iter().map(|user| u64::from(user.age())).sum();
                (department, total as f64 / members.len() as f64)
            })
            .collect()
    }

    /// Departments by descending average age; equal averages stay in name order.
    pub fn departments_by_average_age(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self.average_age_by_department().into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Users matching `predicate`, in directory order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&User>
    where
        P: FnMut(&User) -> bool,
    {
        self.users.iter().filter(|user| predicate(user)).collect()
    }

    /// Same as [`UserDirectory::filter`].
    pub fn select<P>(&self, predicate: P) -> Vec<&User>
    where
        P: FnMut(&User) -> bool,
    {
        self.filter(predicate)
    }

    pub fn for_each<F>(&self, process: F)
    where
        F: FnMut(&User),
    {
        self.users.iter().for_each(process);
    }

    /// Re-sort the stored users (stable). Later queries see the new order.
    pub fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&User, &User) -> Ordering,
    {
        self.users.sort_by(compare);
        tracing::debug!(users = self.users.len(), "directory re-sorted");
    }

    pub fn average_age(&self) -> DomainResult<f64> {
        if self.users.is_empty() {
            return Err(DomainError::not_found("no users to average age over"));
        }
        Ok(self.total_age() as f64 / self.users.len() as f64)
    }

    /// Independent copy of every user in directory order.
    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }
}
