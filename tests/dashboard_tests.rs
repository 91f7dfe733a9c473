use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{AHMAD, DEWI, KEPSEK, home, login_offline, sl};

#[test]
fn offline_dashboard_shows_sample_stats() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Offline mode"))
        .stdout(contains("Total: 3"))
        .stdout(contains("Disetujui: 1"))
        .stdout(contains("Menunggu: 1"))
        .stdout(contains("Ditolak: 1"))
        .stdout(contains("m0ck1jn01"));
}

#[test]
fn principal_sees_approve_actions_teacher_does_not() {
    let home = home();
    login_offline(home.path(), KEPSEK);
    sl(home.path())
        .args(["--offline", "dashboard", "--search", "sakit"])
        .assert()
        .success()
        .stdout(contains("approve reject del"));

    let home = common::home();
    login_offline(home.path(), DEWI);
    sl(home.path())
        .args(["--offline", "dashboard", "--search", "sakit"])
        .assert()
        .success()
        .stdout(contains("m0ck1jn01"))
        .stdout(contains("approve").not());
}

#[test]
fn owner_can_edit_pending_request() {
    let home = home();
    login_offline(home.path(), AHMAD);

    sl(home.path())
        .args(["--offline", "dashboard", "--mine", "--search", "SAKIT"])
        .assert()
        .success()
        .stdout(contains("edit del"));
}

#[test]
fn search_without_match() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "dashboard", "-s", "tidak ada"])
        .assert()
        .success()
        .stdout(contains("Belum ada data."));
}

#[test]
fn page_size_hides_extra_rows() {
    let home = home();
    std::fs::write(home.path().join("siaplapor.conf"), "page_size: 1\n").unwrap();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "dashboard"])
        .assert()
        .success()
        .stdout(contains("2 more request(s) hidden"));

    sl(home.path())
        .args(["--offline", "dashboard", "--all"])
        .assert()
        .success()
        .stdout(contains("hidden").not())
        .stdout(contains("m0ckct103"));
}

#[test]
fn options_lists_reasons() {
    let home = home();
    sl(home.path())
        .arg("options")
        .assert()
        .success()
        .stdout(contains("Rapat Dinas"))
        .stdout(contains("Cuti Melahirkan"))
        .stdout(contains("--category pribadi"));

    sl(home.path())
        .args(["options", "bogus"])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));
}
