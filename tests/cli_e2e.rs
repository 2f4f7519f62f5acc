use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = "tool,command,description,tags\n\
git,git log,show history,vcs\n\
tar,tar -xzf file.tar.gz,extract tarball,files\n\
git,git log --oneline,compact history,vcs\n";

fn cheat_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cheat").unwrap();
    cmd.env("CHEAT_DATA_DIR", data_dir.as_os_str());
    cmd
}

fn write_fixture(data_dir: &Path) {
    fs::create_dir_all(data_dir).unwrap();
    fs::write(data_dir.join("commands.csv"), FIXTURE).unwrap();
}

fn read_data(data_dir: &Path) -> String {
    fs::read_to_string(data_dir.join("commands.csv")).unwrap()
}

#[test]
fn no_args_prints_usage_without_seeding() {
    let temp = TempDir::new().unwrap();

    cheat_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cheat <term>"))
        .stdout(predicate::str::contains("cheat add"))
        .stdout(predicate::str::contains("cheat delete <query>"));

    assert!(!temp.path().join("commands.csv").exists());
}

#[test]
fn first_search_seeds_data_file_from_bundled_default() {
    let temp = TempDir::new().unwrap();

    cheat_cmd(temp.path())
        .arg("git")
        .assert()
        .success()
        .stdout(predicate::str::contains("git status"));

    // Seed file landed in the data dir and matches the bundled dataset.
    let seeded = read_data(temp.path());
    assert!(seeded.starts_with("tool,command,description,tags\n"));
    assert!(seeded.contains("tar -xzf archive.tar.gz"));
}

#[test]
fn search_matches_any_field_case_insensitively() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    // "HISTORY" only appears in descriptions.
    cheat_cmd(temp.path())
        .arg("HISTORY")
        .assert()
        .success()
        .stdout(predicate::str::contains("git log"))
        .stdout(predicate::str::contains("git log --oneline"))
        .stdout(predicate::str::contains("tar").not());
}

#[test]
fn search_without_results_prints_no_results_line() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    cheat_cmd(temp.path())
        .arg("kubernetes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found."));
}

#[test]
fn add_appends_record_and_persists() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    cheat_cmd(temp.path())
        .arg("add")
        .write_stdin("curl\ncurl -I https://example.com\nheaders only\nnetwork\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive add mode"))
        .stdout(predicate::str::contains("Command added."));

    let data = read_data(temp.path());
    // Appended last, earlier rows untouched.
    assert!(data.starts_with(FIXTURE));
    assert!(data.ends_with("curl,curl -I https://example.com,headers only,network\n"));
}

#[test]
fn add_rejects_duplicate_command_and_leaves_file_unchanged() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    cheat_cmd(temp.path())
        .arg("add")
        .write_stdin("git\ngit log\nanother description\nvcs\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command already exists."));

    assert_eq!(read_data(temp.path()), FIXTURE);
}

#[test]
fn add_trims_whitespace_from_input() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    cheat_cmd(temp.path())
        .arg("add")
        .write_stdin("  du  \n  du -sh *  \n disk usage \n system \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command added."));

    assert!(read_data(temp.path()).contains("du,du -sh *,disk usage,system\n"));
}

#[test]
fn delete_without_query_prints_usage_without_seeding() {
    let temp = TempDir::new().unwrap();

    cheat_cmd(temp.path())
        .arg("delete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cheat delete <query>"));

    assert!(!temp.path().join("commands.csv").exists());
}

#[test]
fn delete_with_no_match_changes_nothing() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    cheat_cmd(temp.path())
        .args(["delete", "kubectl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match found."));

    assert_eq!(read_data(temp.path()), FIXTURE);
}

#[test]
fn delete_matches_command_field_only() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    // "history" matches two descriptions but no command field.
    cheat_cmd(temp.path())
        .args(["delete", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match found."));
}

#[test]
fn delete_cancelled_unless_answer_is_yes() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    cheat_cmd(temp.path())
        .args(["delete", "git log"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    // Empty answer cancels too.
    cheat_cmd(temp.path())
        .args(["delete", "git log"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert_eq!(read_data(temp.path()), FIXTURE);
}

#[test]
fn delete_confirmed_removes_matched_rows_in_order() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    // Confirmation is case-insensitive; shows the candidates first.
    cheat_cmd(temp.path())
        .args(["delete", "GIT LOG"])
        .write_stdin("YES\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("git log --oneline"))
        .stdout(predicate::str::contains("Deleted."));

    assert_eq!(
        read_data(temp.path()),
        "tool,command,description,tags\ntar,tar -xzf file.tar.gz,extract tarball,files\n"
    );
}

#[test]
fn unreadable_table_aborts_with_nonzero_exit() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path()).unwrap();
    fs::write(temp.path().join("commands.csv"), "name,cmd\nx,y\n").unwrap();

    cheat_cmd(temp.path())
        .arg("git")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed header"));
}
