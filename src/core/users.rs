//! Employee directory rules: filtering, add, inline edit, credential reset
//! and delete. All functions work on the in-memory list; uploading the result
//! is the caller's job.

use crate::errors::{AppError, AppResult};
use crate::models::{Role, User};

pub const DEFAULT_POSITION: &str = "Guru Kelas";

/// Name (case-insensitive) or NIP substring.
pub fn filter<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.trim();
    let lower = term.to_lowercase();
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&lower) || u.nip.contains(term))
        .collect()
}

/// Data entered in the "add employee" dialog.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub nip: String,
    pub position: Option<String>,
    pub rank: Option<String>,
    pub role: Option<Role>,
    pub username: Option<String>,
    pub password: Option<String>,
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Add an employee. Username and password default to the NIP.
pub fn add_user(users: &mut Vec<User>, input: NewUser) -> AppResult<&User> {
    let name = input.name.trim();
    let nip = input.nip.trim();

    if name.is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if nip.is_empty() {
        return Err(AppError::Validation("NIP is required".into()));
    }
    if users.iter().any(|u| u.nip == nip) {
        return Err(AppError::DuplicateNip(nip.to_string()));
    }

    let user = User {
        name: name.to_string(),
        nip: nip.to_string(),
        position: non_blank(input.position).unwrap_or_else(|| DEFAULT_POSITION.to_string()),
        rank: non_blank(input.rank),
        role: input.role.unwrap_or_default(),
        username: non_blank(input.username).or_else(|| Some(nip.to_string())),
        password: non_blank(input.password).or_else(|| Some(nip.to_string())),
    };

    users.push(user);
    Ok(&users[users.len() - 1])
}

/// Fields editable inline in the employee table; `None` keeps the value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub nip: Option<String>,
    pub position: Option<String>,
    pub rank: Option<String>,
    pub role: Option<Role>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.nip.is_none()
            && self.position.is_none()
            && self.rank.is_none()
            && self.role.is_none()
    }
}

fn position_of(users: &[User], nip: &str) -> AppResult<usize> {
    users
        .iter()
        .position(|u| u.nip == nip)
        .ok_or_else(|| AppError::UserNotFound(nip.to_string()))
}

/// Apply `patch` to the user identified by `original_nip`.
/// A new NIP must not belong to another employee.
pub fn update_user(users: &mut [User], original_nip: &str, patch: UserPatch) -> AppResult<User> {
    let idx = position_of(users, original_nip)?;

    if let Some(new_nip) = patch.nip.as_deref().map(str::trim) {
        if new_nip.is_empty() {
            return Err(AppError::Validation("NIP cannot be empty".into()));
        }
        if new_nip != original_nip && users.iter().any(|u| u.nip == new_nip) {
            return Err(AppError::DuplicateNip(new_nip.to_string()));
        }
    }

    let user = &mut users[idx];
    if let Some(name) = non_blank(patch.name) {
        user.name = name;
    }
    if let Some(nip) = non_blank(patch.nip) {
        user.nip = nip;
    }
    if let Some(position) = non_blank(patch.position) {
        user.position = position;
    }
    if let Some(rank) = patch.rank {
        // an empty rank clears the column
        user.rank = non_blank(Some(rank));
    }
    if let Some(role) = patch.role {
        user.role = role;
    }

    Ok(user.clone())
}

/// Reset login credentials. Blank values fall back to the NIP.
pub fn reset_credentials(
    users: &mut [User],
    nip: &str,
    username: Option<String>,
    password: Option<String>,
) -> AppResult<User> {
    let idx = position_of(users, nip)?;
    let user = &mut users[idx];
    user.username = non_blank(username).or_else(|| Some(user.nip.clone()));
    user.password = non_blank(password).or_else(|| Some(user.nip.clone()));
    Ok(user.clone())
}

pub fn delete_user(users: &mut Vec<User>, nip: &str) -> AppResult<User> {
    let idx = position_of(users, nip)?;
    Ok(users.remove(idx))
}
