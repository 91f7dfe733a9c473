use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{AHMAD, DEWI, KEPSEK, home, login_offline, sl};

#[test]
fn init_writes_config_with_endpoint() {
    let home = home();

    sl(home.path())
        .args(["init", "--url", "https://script.example/macros/s/abc/exec"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conf = std::fs::read_to_string(home.path().join("siaplapor.conf")).unwrap();
    assert!(conf.contains("https://script.example/macros/s/abc/exec"));
    assert!(conf.contains("UPT SD Negeri Remen 2"));
}

#[test]
fn config_check_and_migrate() {
    let home = home();
    std::fs::write(home.path().join("siaplapor.conf"), "page_size: 5\n").unwrap();

    sl(home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("department")));

    sl(home.path())
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration updated"));

    sl(home.path())
        .args(["config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("complete").and(contains("page_size: 5")));
}

#[test]
fn login_by_username_and_whoami() {
    let home = home();
    login_offline(home.path(), KEPSEK);
    assert!(home.path().join("session.yml").exists());

    sl(home.path())
        .args(["--offline", "whoami"])
        .assert()
        .success()
        .stdout(contains("Sri Wahyuni").and(contains("KEPALA_SEKOLAH")));
}

#[test]
fn login_by_nip_with_nip_password() {
    let home = home();
    sl(home.path())
        .args(["--offline", "login", AHMAD.0, "--password", AHMAD.1])
        .assert()
        .success()
        .stdout(contains("Selamat datang, Ahmad Fauzi"));
}

#[test]
fn login_errors_are_reported() {
    let home = home();

    sl(home.path())
        .args(["--offline", "login", "dewi", "--password", "salah"])
        .assert()
        .failure()
        .stderr(contains("Wrong password"));

    sl(home.path())
        .args(["--offline", "login", "tidakada", "--password", "x"])
        .assert()
        .failure()
        .stderr(contains("Username not found"));

    assert!(!home.path().join("session.yml").exists());
}

#[test]
fn commands_need_a_session() {
    let home = home();
    sl(home.path())
        .args(["--offline", "dashboard"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn logout_ends_the_session() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("Logged out"));

    sl(home.path())
        .args(["--offline", "whoami"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    sl(home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("No active session"));
}

#[test]
fn profile_shows_current_user() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args(["--offline", "profile"])
        .assert()
        .success()
        .stdout(contains("199001202019022003").and(contains("Penata Muda / III a")));
}

#[test]
fn profile_edit_offline_fails_to_sync() {
    let home = home();
    login_offline(home.path(), DEWI);

    sl(home.path())
        .args(["--offline", "profile", "--name", "Dewi L."])
        .assert()
        .failure()
        .stderr(contains("sync_users"));
}
