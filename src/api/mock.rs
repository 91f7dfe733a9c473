//! Fixed dataset served when the sheet cannot be reached.

use crate::models::{LeaveRequest, Role, Status, User};

const DEPARTMENT: &str = "UPT SD Negeri Remen 2";

pub fn users() -> Vec<User> {
    vec![
        User {
            name: "Sri Wahyuni, S.Pd".to_string(),
            nip: "196805121990032004".to_string(),
            position: "Kepala Sekolah".to_string(),
            rank: Some("Pembina / IV a".to_string()),
            role: Role::KepalaSekolah,
            username: Some("kepsek".to_string()),
            password: None,
        },
        User {
            name: "Ahmad Fauzi, S.Pd".to_string(),
            nip: "198703152010011002".to_string(),
            position: "Guru Kelas".to_string(),
            rank: Some("Penata / III c".to_string()),
            role: Role::Guru,
            username: None,
            password: None,
        },
        User {
            name: "Dewi Lestari, S.Pd.SD".to_string(),
            nip: "199001202019022003".to_string(),
            position: "Guru Kelas".to_string(),
            rank: Some("Penata Muda / III a".to_string()),
            role: Role::Guru,
            username: Some("dewi".to_string()),
            password: Some("dewi123".to_string()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: &str,
    user: &User,
    kind: &str,
    reason: &str,
    start: &str,
    end: &str,
    status: Status,
    created_at: &str,
) -> LeaveRequest {
    LeaveRequest {
        id: id.to_string(),
        name: user.name.clone(),
        nip: user.nip.clone(),
        position: user.position.clone(),
        rank: user.rank.clone(),
        department: DEPARTMENT.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        start_time: "07:00".to_string(),
        end_time: "14:00".to_string(),
        kind: kind.to_string(),
        reason: reason.to_string(),
        status,
        created_at: created_at.to_string(),
        doc_url: None,
    }
}

pub fn requests() -> Vec<LeaveRequest> {
    let users = users();
    let ahmad = &users[1];
    let dewi = &users[2];

    vec![
        request(
            "m0ck1jn01",
            ahmad,
            "Ijin",
            "Sakit",
            "2025-02-03",
            "2025-02-03",
            Status::Pending,
            "2025-02-02T19:10:00+07:00",
        ),
        request(
            "m0ckdns02",
            dewi,
            "Dispensasi Dinas",
            "Bimtek / Pelatihan",
            "2025-01-21",
            "2025-01-22",
            Status::Approved,
            "2025-01-15T08:30:00+07:00",
        ),
        request(
            "m0ckct103",
            ahmad,
            "Cuti Tahunan",
            "Acara keluarga di luar kota",
            "2025-01-06",
            "2025-01-08",
            Status::Rejected,
            "2024-12-20T10:00:00+07:00",
        ),
    ]
}
