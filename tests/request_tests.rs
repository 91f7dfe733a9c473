use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{AHMAD, DEWI, KEPSEK, home, login_offline, sl};

#[test]
fn submit_validates_before_sending() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args(["--offline", "submit", "-c", "ijin", "--option", "2"])
        .assert()
        .failure()
        .stderr(contains("start date is required"));

    sl(home.path())
        .args([
            "--offline", "submit", "-c", "ijin", "--option", "9", "--from", "2025-03-03",
        ])
        .assert()
        .failure()
        .stderr(contains("reason option 9 does not exist"));

    sl(home.path())
        .args([
            "--offline",
            "submit",
            "-c",
            "pribadi",
            "--reason",
            "Wisuda anak",
            "--from",
            "2025-03-05",
            "--to",
            "2025-03-04",
        ])
        .assert()
        .failure()
        .stderr(contains("before start date"));
}

#[test]
fn submit_offline_reports_failure() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args([
            "--offline", "submit", "-c", "cuti", "--cuti", "haji", "--reason", "Ibadah haji",
            "--from", "2025-06-01", "--to", "2025-06-30",
        ])
        .assert()
        .failure()
        .stderr(contains("'create' was not sent"));
}

#[test]
fn edit_is_limited_to_own_pending_requests() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args(["--offline", "edit", "m0ck1jn01", "--reason", "Demam"])
        .assert()
        .failure()
        .stderr(contains("Not allowed").and(contains("belongs to")));

    sl(home.path())
        .args(["--offline", "edit", "m0ckdns02", "--option", "1"])
        .assert()
        .failure()
        .stderr(contains("already Disetujui"));
}

#[test]
fn only_principal_decides() {
    let home = home();
    login_offline(home.path(), AHMAD);

    sl(home.path())
        .args(["--offline", "approve", "m0ck1jn01"])
        .assert()
        .failure()
        .stderr(contains("only the principal"));

    let home = common::home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "reject", "m0ckdns02"])
        .assert()
        .failure()
        .stderr(contains("already Disetujui"));

    sl(home.path())
        .args(["--offline", "approve", "m0ck1jn01"])
        .assert()
        .failure()
        .stderr(contains("'update_status' was not sent"));

    sl(home.path())
        .args(["--offline", "approve", "nope"])
        .assert()
        .failure()
        .stderr(contains("Leave request not found"));
}

#[test]
fn delete_rules() {
    let home = home();
    login_offline(home.path(), DEWI);

    // approved and owned by Dewi: only the principal may remove it
    sl(home.path())
        .args(["--offline", "del", "m0ckdns02", "--yes"])
        .assert()
        .failure()
        .stderr(contains("cannot be deleted"));

    let home = common::home();
    login_offline(home.path(), KEPSEK);
    sl(home.path())
        .args(["--offline", "del", "m0ckdns02", "--yes"])
        .assert()
        .failure()
        .stderr(contains("'delete' was not sent"));
}

#[test]
fn form_link_for_approved_request() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args(["--offline", "form", "m0ckdns02"])
        .assert()
        .success()
        .stdout(contains("1FAIpQLSfsQHG4r8RASmnxieutoZINa9qRDWUwlNQPljj_CWnDOEF8PA"));

    sl(home.path())
        .args(["--offline", "form", "m0ck1jn01"])
        .assert()
        .failure()
        .stderr(contains("after approval"));
}

#[test]
fn pdf_only_for_approved() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "pdf", "m0ckct103"])
        .assert()
        .failure()
        .stderr(contains("only for approved"));
}
