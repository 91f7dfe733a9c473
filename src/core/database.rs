//! Filters behind the raw database view.

use crate::models::{LeaveRequest, Status, User};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    #[default]
    Requests,
    Users,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Requests => "Data Ijin",
            Tab::Users => "Data Pegawai",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub fn accepts(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == Status::Pending,
            StatusFilter::Approved => status == Status::Approved,
            StatusFilter::Rejected => status == Status::Rejected,
        }
    }
}

/// Requests whose name, NIP or type contains `term` (case-insensitive)
/// and whose status passes `status`.
pub fn filter_requests<'a>(
    requests: &'a [LeaveRequest],
    term: &str,
    status: StatusFilter,
) -> Vec<&'a LeaveRequest> {
    let needle = term.trim().to_lowercase();
    requests
        .iter()
        .filter(|r| status.accepts(r.status))
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.nip.contains(&needle)
                || r.kind.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Users whose name, NIP or position contains `term`.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let needle = term.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.nip.contains(&needle)
                || u.position.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn status_and_term_combine() {
        let reqs = mock::requests();
        assert_eq!(filter_requests(&reqs, "", StatusFilter::All).len(), 3);
        assert_eq!(filter_requests(&reqs, "", StatusFilter::Approved).len(), 1);

        let ahmad = filter_requests(&reqs, "AHMAD", StatusFilter::All);
        assert_eq!(ahmad.len(), 2);

        let cuti_rejected = filter_requests(&reqs, "cuti", StatusFilter::Rejected);
        assert_eq!(cuti_rejected.len(), 1);
        assert!(filter_requests(&reqs, "cuti", StatusFilter::Pending).is_empty());
    }

    #[test]
    fn users_match_position() {
        let users = mock::users();
        let heads = filter_users(&users, "kepala");
        assert_eq!(heads.len(), 1);
        assert_eq!(heads[0].name, "Sri Wahyuni, S.Pd");
    }
}
