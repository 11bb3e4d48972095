use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zflat() -> Command {
    Command::cargo_bin("zflat").expect("zflat binary")
}

fn seed_repo_dir(entry: &str, modules: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("truenas.zsh"), entry).expect("entry");
    let lib = dir.path().join("lib");
    std::fs::create_dir_all(&lib).expect("lib dir");
    for (name, content) in modules {
        std::fs::write(lib.join(name), content).expect("module");
    }
    dir
}

#[test]
fn flatten_inlines_modules_to_stdout() {
    let dir = seed_repo_dir(
        "# entry\nsource \"${0:A:h}/lib/colors.zsh\"\n",
        &[("colors.zsh", "autoload -U colors\n")],
    );

    zflat()
        .arg("flatten")
        .args(["--repo", "owner/repo"])
        .arg("--repo-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# ======================================== colors.zsh \
             ========================================",
        ))
        .stdout(predicate::str::contains("autoload -U colors"))
        .stdout(predicate::str::contains(
            "# Install: fetch -qo ~/.zshrc.truenas \
             https://raw.githubusercontent.com/owner/repo/flat/truenas.zsh",
        ));
}

#[test]
fn flatten_keeps_directive_for_missing_module() {
    let dir = seed_repo_dir("source \"${0:A:h}/lib/ghost.zsh\"\n", &[]);

    zflat()
        .arg("flatten")
        .args(["--repo", "owner/repo"])
        .arg("--repo-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("source \"${0:A:h}/lib/ghost.zsh\""));
}

#[test]
fn flatten_writes_output_file() {
    let dir = seed_repo_dir("plain line\n", &[]);
    let out = dir.path().join("truenas.zsh.flat");

    zflat()
        .arg("flatten")
        .args(["--repo", "owner/repo"])
        .arg("--repo-dir")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let artifact = std::fs::read_to_string(&out).expect("artifact");
    assert!(artifact.starts_with("# ="));
    assert!(artifact.contains("plain line"));
    assert!(artifact.ends_with('\n'));
}

#[test]
fn flatten_uses_github_repository_env_when_no_flag() {
    let dir = seed_repo_dir("plain line\n", &[]);

    zflat()
        .env("GITHUB_REPOSITORY", "enved/fromenv")
        .arg("flatten")
        .arg("--repo-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Source: https://github.com/enved/fromenv",
        ));
}

#[test]
fn flatten_without_repo_slug_fails() {
    let dir = seed_repo_dir("plain line\n", &[]);

    zflat()
        .env_remove("GITHUB_REPOSITORY")
        .arg("flatten")
        .arg("--repo-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_REPOSITORY"));
}

#[test]
fn flatten_rejects_malformed_repo_slug() {
    let dir = seed_repo_dir("plain line\n", &[]);

    zflat()
        .arg("flatten")
        .args(["--repo", "not-a-slug"])
        .arg("--repo-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository slug"));
}

#[test]
fn run_fails_outside_a_git_checkout() {
    // No .git here: source identity capture fails before any publish.
    let dir = seed_repo_dir("plain line\n", &[]);

    zflat()
        .arg("run")
        .args(["--repo", "owner/repo"])
        .arg("--repo-dir")
        .arg(dir.path())
        .assert()
        .failure();
}
