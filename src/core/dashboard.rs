//! Derived data for the request list: counts, per-type tally, search,
//! paging and the actions each viewer may take on a row.

use crate::models::{LeaveRequest, Status, User};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl Stats {
    pub fn from_requests(requests: &[LeaveRequest]) -> Self {
        let mut s = Stats {
            total: requests.len(),
            ..Stats::default()
        };
        for r in requests {
            match r.status {
                Status::Approved => s.approved += 1,
                Status::Pending => s.pending += 1,
                Status::Rejected => s.rejected += 1,
            }
        }
        s
    }
}

/// Count requests per type, most frequent first (ties by name).
pub fn type_tally(requests: &[LeaveRequest]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in requests {
        *counts.entry(r.type_or_other()).or_default() += 1;
    }

    let mut tally: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tally
}

/// Case-insensitive substring match over name, NIP, type and reason.
pub fn matches_search(req: &LeaveRequest, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [&req.name, &req.nip, &req.kind, &req.reason]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn search<'a>(requests: &'a [LeaveRequest], term: &str) -> Vec<&'a LeaveRequest> {
    requests
        .iter()
        .filter(|r| matches_search(r, term))
        .collect()
}

/// First `page_size` rows unless expanded; also reports how many are hidden.
pub fn visible<T>(rows: &[T], page_size: usize, expanded: bool) -> (&[T], usize) {
    if expanded || rows.len() <= page_size {
        (rows, 0)
    } else {
        (&rows[..page_size], rows.len() - page_size)
    }
}

/// Controls shown for one row to one viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub approve: bool,
    pub reject: bool,
    pub edit: bool,
    pub delete: bool,
    pub open_form: bool,
}

impl RowActions {
    pub fn for_viewer(req: &LeaveRequest, viewer: &User) -> Self {
        let approver = viewer.is_approver();
        let owner = req.is_owned_by(&viewer.nip);
        let pending = req.status == Status::Pending;
        let approved = req.status == Status::Approved;

        Self {
            approve: approver && pending,
            reject: approver && pending,
            edit: owner && pending,
            delete: approver || (owner && !approved),
            open_form: approved,
        }
    }

    /// Short codes for the actions column.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.approve {
            out.push("approve");
        }
        if self.reject {
            out.push("reject");
        }
        if self.edit {
            out.push("edit");
        }
        if self.delete {
            out.push("del");
        }
        if self.open_form {
            out.push("form");
        }
        out
    }
}

/// Pick the request to announce to the principal: one that appeared since
/// `previous`, was not submitted by the viewer, and only when the list grew.
pub fn new_request_notice<'a>(
    previous: &[String],
    current: &'a [LeaveRequest],
    viewer: &User,
) -> Option<&'a LeaveRequest> {
    if !viewer.is_approver() || current.len() <= previous.len() {
        return None;
    }

    let seen: HashSet<&str> = previous.iter().map(String::as_str).collect();
    current
        .iter()
        .filter(|r| !seen.contains(r.id.as_str()))
        .find(|r| r.nip != viewer.nip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;
    use crate::models::Role;

    fn principal() -> User {
        mock::users().remove(0)
    }

    fn teacher() -> User {
        mock::users().remove(1)
    }

    #[test]
    fn counts_sum_to_total() {
        let mut reqs = mock::requests();
        reqs.extend(mock::requests());
        let s = Stats::from_requests(&reqs);
        assert_eq!(s.total, 6);
        assert_eq!(s.approved + s.pending + s.rejected, s.total);
        assert_eq!(s.pending, 2);
    }

    #[test]
    fn tally_orders_by_count_then_name() {
        let mut reqs = mock::requests();
        let mut extra = reqs[0].clone();
        extra.id = "zz".into();
        reqs.push(extra);
        let tally = type_tally(&reqs);
        assert_eq!(tally[0], ("Ijin".to_string(), 2));
        assert_eq!(tally[1].0, "Cuti Tahunan");
        assert_eq!(tally.iter().map(|t| t.1).sum::<usize>(), reqs.len());
    }

    #[test]
    fn search_is_case_insensitive_over_fields() {
        let reqs = mock::requests();
        assert_eq!(search(&reqs, "AHMAD").len(), 2);
        assert_eq!(search(&reqs, "bimtek").len(), 1);
        assert_eq!(search(&reqs, "cuti tah").len(), 1);
        assert_eq!(search(&reqs, "1990012020").len(), 1);
        assert_eq!(search(&reqs, "  ").len(), reqs.len());
        assert!(search(&reqs, "tidak ada").is_empty());
    }

    #[test]
    fn paging_shows_first_rows() {
        let rows = [1, 2, 3, 4, 5];
        assert_eq!(visible(&rows, 3, false), (&rows[..3], 2));
        assert_eq!(visible(&rows, 3, true), (&rows[..], 0));
        assert_eq!(visible(&rows[..2], 3, false), (&rows[..2], 0));
    }

    #[test]
    fn approve_and_reject_only_for_principal() {
        let reqs = mock::requests();
        let pending = &reqs[0];
        let a = RowActions::for_viewer(pending, &principal());
        assert!(a.approve && a.reject && a.delete);
        assert!(!a.edit);

        let t = RowActions::for_viewer(pending, &teacher());
        assert!(!t.approve && !t.reject);
        assert!(t.edit && t.delete);
    }

    #[test]
    fn edit_hidden_from_non_owner() {
        let reqs = mock::requests();
        let other = User::new("Lain", "999", "Guru Kelas", Role::Guru);
        let a = RowActions::for_viewer(&reqs[0], &other);
        assert!(!a.edit && !a.delete && !a.approve);
    }

    #[test]
    fn approved_rows_open_form_and_lock_owner_delete() {
        let reqs = mock::requests();
        let dewi = mock::users().remove(2);
        let a = RowActions::for_viewer(&reqs[1], &dewi);
        assert!(a.open_form);
        assert!(!a.delete && !a.edit);
    }

    #[test]
    fn notice_only_for_principal_and_new_foreign_rows() {
        let reqs = mock::requests();
        let previous: Vec<String> = reqs[1..].iter().map(|r| r.id.clone()).collect();

        let hit = new_request_notice(&previous, &reqs, &principal()).unwrap();
        assert_eq!(hit.id, reqs[0].id);

        assert!(new_request_notice(&previous, &reqs, &teacher()).is_none());

        let all: Vec<String> = reqs.iter().map(|r| r.id.clone()).collect();
        assert!(new_request_notice(&all, &reqs, &principal()).is_none());
    }
}
