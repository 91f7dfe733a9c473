//! Submission / edit form: turns user input into a `LeaveRequest`.

use crate::errors::{AppError, AppResult};
use crate::models::category::OTHER_OPTION;
use crate::models::{CutiType, LeaveCategory, LeaveRequest, Status, User};
use crate::utils::date::parse_date;
use crate::utils::id::new_request_id;
use crate::utils::time::normalize_time;
use chrono::{DateTime, Local};

pub const DEFAULT_START_TIME: &str = "07:00";
pub const DEFAULT_END_TIME: &str = "14:00";

/// Reason as picked in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonChoice {
    /// 1-based index into the category's fixed list.
    Preset(usize),
    /// Free text: the only input for free-text categories, the "Lainnya"
    /// escape hatch for the others.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveForm {
    pub category: LeaveCategory,
    pub cuti_type: CutiType,
    /// Free-text sub-type, used when `cuti_type` is `Lainnya`.
    pub custom_type: Option<String>,
    pub reason: Option<ReasonChoice>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

impl LeaveForm {
    pub fn new(category: LeaveCategory) -> Self {
        Self {
            category,
            cuti_type: CutiType::Tahunan,
            custom_type: None,
            reason: None,
            start_date: None,
            end_date: None,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
        }
    }

    /// Pre-fill the form from an existing request (edit mode).
    pub fn from_request(req: &LeaveRequest) -> Self {
        let category = req.category();
        let mut form = Self::new(category);

        if category == LeaveCategory::Cuti {
            match CutiType::from_label(&req.kind) {
                Some(t) => form.cuti_type = t,
                None => {
                    form.cuti_type = CutiType::Lainnya;
                    form.custom_type = Some(req.kind.clone());
                }
            }
        }

        let preset = category
            .reason_options()
            .and_then(|opts| opts.iter().position(|o| *o == req.reason.trim()));
        form.reason = Some(match preset {
            Some(i) => ReasonChoice::Preset(i + 1),
            None => ReasonChoice::Text(req.reason.clone()),
        });

        form.start_date = Some(req.start_day());
        form.end_date = Some(req.end_day());
        if !req.start_time.trim().is_empty() {
            form.start_time = req.start_time.clone();
        }
        if !req.end_time.trim().is_empty() {
            form.end_time = req.end_time.clone();
        }

        form
    }

    /// Value stored in the request's `type` column.
    pub fn resolve_type(&self) -> AppResult<String> {
        if self.category != LeaveCategory::Cuti {
            return Ok(self.category.label().to_string());
        }

        if self.cuti_type != CutiType::Lainnya {
            return Ok(self.cuti_type.label().to_string());
        }

        let custom = self
            .custom_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("type the kind of Cuti (--custom-type)".into()))?;

        if custom.to_lowercase().contains("cuti") {
            Ok(custom.to_string())
        } else {
            Ok(format!("Cuti {custom}"))
        }
    }

    pub fn resolve_reason(&self) -> AppResult<String> {
        let choice = self
            .reason
            .as_ref()
            .ok_or_else(|| AppError::Validation("a reason is required".into()))?;

        match (choice, self.category.reason_options()) {
            (ReasonChoice::Preset(i), Some(opts)) => opts
                .get(i.wrapping_sub(1))
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "reason option {i} does not exist for {} (1-{}, or free text for {OTHER_OPTION})",
                        self.category,
                        opts.len()
                    ))
                }),
            (ReasonChoice::Preset(_), None) => Err(AppError::Validation(format!(
                "{} takes a free-text reason",
                self.category
            ))),
            (ReasonChoice::Text(t), _) => {
                let t = t.trim();
                if t.is_empty() {
                    Err(AppError::Validation("a reason is required".into()))
                } else {
                    Ok(t.to_string())
                }
            }
        }
    }

    /// Validate and build the request.
    ///
    /// Identity fields come from `user`. With `existing`, the id and
    /// creation time are kept; the status always goes back to pending.
    pub fn build(
        &self,
        user: &User,
        department: &str,
        existing: Option<&LeaveRequest>,
        now: DateTime<Local>,
    ) -> AppResult<LeaveRequest> {
        let start_raw = self
            .start_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("start date is required".into()))?;
        let start = parse_date(start_raw).ok_or_else(|| AppError::InvalidDate(start_raw.into()))?;

        let end = match self.end_date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.into()))?,
            None => start,
        };

        if end < start {
            return Err(AppError::Validation(format!(
                "end date {end} is before start date {start}"
            )));
        }

        let start_time = normalize_time(&self.start_time)?;
        let end_time = normalize_time(&self.end_time)?;
        if start == end && end_time < start_time {
            return Err(AppError::Validation(format!(
                "end time {end_time} is before start time {start_time}"
            )));
        }

        let kind = self.resolve_type()?;
        let reason = self.resolve_reason()?;

        let (id, created_at) = match existing {
            Some(prev) => (prev.id.clone(), prev.created_at.clone()),
            None => (new_request_id(), now.to_rfc3339()),
        };

        Ok(LeaveRequest {
            id,
            name: user.name.clone(),
            nip: user.nip.clone(),
            position: user.position.clone(),
            rank: user.rank.clone(),
            department: department.to_string(),
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            start_time,
            end_time,
            kind,
            reason,
            status: Status::Pending,
            created_at,
            doc_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RequestRow, mock};
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
    }

    fn teacher() -> User {
        mock::users().remove(1)
    }

    fn ijin_form() -> LeaveForm {
        let mut f = LeaveForm::new(LeaveCategory::Ijin);
        f.reason = Some(ReasonChoice::Preset(1));
        f.start_date = Some("2025-03-10".into());
        f
    }

    #[test]
    fn new_request_is_pending_with_defaults() {
        let r = ijin_form().build(&teacher(), "SDN", None, now()).unwrap();
        assert_eq!(r.status, Status::Pending);
        assert_eq!(r.end_date, "2025-03-10");
        assert_eq!(r.start_time, "07:00");
        assert_eq!(r.end_time, "14:00");
        assert_eq!(r.kind, "Ijin");
        assert_eq!(r.reason, "Sakit");
        assert_eq!(r.nip, teacher().nip);
        assert_eq!(r.id.len(), 9);
        assert_eq!(r.created_at, now().to_rfc3339());
    }

    #[test]
    fn edit_keeps_id_and_created_at() {
        let mut original = mock::requests().remove(2);
        original.status = Status::Rejected;
        original.doc_url = Some("https://drive/doc".into());

        let mut form = LeaveForm::from_request(&original);
        form.end_date = Some("2025-01-09".into());

        let edited = form.build(&teacher(), "SDN", Some(&original), now()).unwrap();
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.status, Status::Pending);
        assert_eq!(edited.doc_url, None);
        assert_eq!(edited.kind, "Cuti Tahunan");
        assert_eq!(edited.reason, original.reason);
    }

    #[test]
    fn edit_writes_back_the_local_day_of_a_timestamp_cell() {
        let mut original = mock::requests().remove(0);
        original.start_date = "2025-03-09T17:00:00.000Z".into();
        original.end_date = "2025-03-09T17:00:00.000Z".into();
        let local_day = chrono::DateTime::parse_from_rfc3339("2025-03-09T17:00:00.000Z")
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();

        let form = LeaveForm::from_request(&original);
        assert_eq!(form.start_date.as_deref(), Some(local_day.as_str()));

        let edited = form.build(&teacher(), "SDN", Some(&original), now()).unwrap();
        assert_eq!(edited.start_date, local_day);
        assert_eq!(edited.end_date, local_day);
        assert_eq!(RequestRow::from(&edited).mulai, local_day);
    }

    #[test]
    fn prefill_recovers_preset_reason() {
        let dinas = mock::requests().remove(1);
        let form = LeaveForm::from_request(&dinas);
        assert_eq!(form.category, LeaveCategory::DispensasiDinas);
        assert_eq!(form.reason, Some(ReasonChoice::Preset(2)));
    }

    #[test]
    fn required_fields() {
        let mut f = ijin_form();
        f.start_date = None;
        assert!(matches!(f.build(&teacher(), "SDN", None, now()), Err(AppError::Validation(_))));

        let mut f = ijin_form();
        f.reason = None;
        assert!(matches!(f.build(&teacher(), "SDN", None, now()), Err(AppError::Validation(_))));

        let mut f = ijin_form();
        f.reason = Some(ReasonChoice::Text("   ".into()));
        assert!(f.build(&teacher(), "SDN", None, now()).is_err());
    }

    #[test]
    fn date_and_time_checks() {
        let mut f = ijin_form();
        f.end_date = Some("2025-03-09".into());
        assert!(matches!(f.build(&teacher(), "SDN", None, now()), Err(AppError::Validation(_))));

        let mut f = ijin_form();
        f.start_date = Some("10-03-2025".into());
        assert!(matches!(f.build(&teacher(), "SDN", None, now()), Err(AppError::InvalidDate(_))));

        let mut f = ijin_form();
        f.start_time = "13:00".into();
        f.end_time = "09:00".into();
        assert!(f.build(&teacher(), "SDN", None, now()).is_err());
    }

    #[test]
    fn preset_rules_per_category() {
        let mut f = ijin_form();
        f.reason = Some(ReasonChoice::Preset(9));
        assert!(f.resolve_reason().is_err());

        let mut f = LeaveForm::new(LeaveCategory::DispensasiPribadi);
        f.reason = Some(ReasonChoice::Preset(1));
        assert!(f.resolve_reason().is_err());
        f.reason = Some(ReasonChoice::Text("Wisuda anak".into()));
        assert_eq!(f.resolve_reason().unwrap(), "Wisuda anak");
    }

    #[test]
    fn cuti_custom_type_gets_prefix() {
        let mut f = LeaveForm::new(LeaveCategory::Cuti);
        f.cuti_type = CutiType::Lainnya;
        assert!(f.resolve_type().is_err());

        f.custom_type = Some("Besar".into());
        assert_eq!(f.resolve_type().unwrap(), "Cuti Besar");

        f.custom_type = Some("Cuti di Luar Tanggungan Negara".into());
        assert_eq!(f.resolve_type().unwrap(), "Cuti di Luar Tanggungan Negara");

        f.cuti_type = CutiType::Haji;
        assert_eq!(f.resolve_type().unwrap(), "Cuti Haji");
    }
}
