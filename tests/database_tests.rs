use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{DEWI, KEPSEK, home, login_offline, sl};

#[test]
fn database_view_is_for_the_principal() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args(["--offline", "db"])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));

    sl(home.path())
        .args(["--offline", "users", "list"])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));
}

#[test]
fn database_filters_by_status_and_term() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "db"])
        .assert()
        .success()
        .stdout(contains("Menampilkan 3 baris data."));

    sl(home.path())
        .args(["--offline", "db", "--status", "approved"])
        .assert()
        .success()
        .stdout(contains("Menampilkan 1 baris data.").and(contains("Bimtek")));

    sl(home.path())
        .args(["--offline", "db", "--tab", "users", "-s", "kepala"])
        .assert()
        .success()
        .stdout(contains("Sri Wahyuni").and(contains("Menampilkan 1 baris data.")));
}

#[test]
fn user_list_and_offline_mutations() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "users", "list"])
        .assert()
        .success()
        .stdout(contains("Dewi Lestari").and(contains("3 pegawai.")));

    sl(home.path())
        .args([
            "--offline", "users", "add", "--name", "Budi", "--nip", "199001202019022003",
        ])
        .assert()
        .failure()
        .stderr(contains("NIP already registered"));

    sl(home.path())
        .args(["--offline", "users", "add", "--name", "Budi", "--nip", "2001"])
        .assert()
        .failure()
        .stderr(contains("'sync_users' was not sent"));

    sl(home.path())
        .args(["--offline", "users", "edit", "2001", "--name", "X"])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));
}

#[test]
fn export_json_and_csv() {
    let home = home();
    login_offline(home.path(), KEPSEK);
    let out = home.path().join("ijin.json");
    let out_str = out.to_string_lossy().to_string();

    sl(home.path())
        .args(["--offline", "export", "--format", "json", "--file", &out_str])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("m0ckct103"));
    assert!(content.contains("\"type\": \"Cuti Tahunan\""));

    let users_csv = home.path().join("pegawai.csv");
    let users_str = users_csv.to_string_lossy().to_string();
    sl(home.path())
        .args([
            "--offline", "export", "--tab", "users", "--format", "csv", "--file", &users_str,
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&users_csv).unwrap();
    assert!(csv.starts_with("name,nip,position,rank,role"));
    assert!(csv.contains("KEPALA_SEKOLAH"));
    assert!(!csv.contains("dewi123"));
}

#[test]
fn export_xlsx_and_pdf_are_written() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    for (fmt, name) in [("xlsx", "rekap.xlsx"), ("pdf", "rekap.pdf")] {
        let out = home.path().join(name);
        let out_str = out.to_string_lossy().to_string();
        sl(home.path())
            .args([
                "--offline",
                "export",
                "--format",
                fmt,
                "--status",
                "rejected",
                "--file",
                &out_str,
                "--force",
            ])
            .assert()
            .success();

        let bytes = fs::read(&out).unwrap();
        assert!(!bytes.is_empty());
        if fmt == "pdf" {
            assert!(bytes.starts_with(b"%PDF"));
        } else {
            assert!(bytes.starts_with(b"PK"));
        }
    }
}

#[test]
fn export_rejects_relative_paths() {
    let home = home();
    login_offline(home.path(), KEPSEK);

    sl(home.path())
        .args(["--offline", "export", "--file", "relatif.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
