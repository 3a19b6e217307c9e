// Rust guideline compliant 2026-10-16

//! End-to-end tests for the `hookkit` binary.

use git2::{Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn hookkit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hookkit"))
        .current_dir(dir)
        .args(["--backend", "libgit2", "--no-color"])
        .args(args)
        .env_remove("HOOKKIT_PROTECTED_BRANCHES")
        .env_remove("HOOKKIT_SUFFIXES")
        .env_remove("HOOKKIT_COMMENT_MARKER")
        .env_remove("HOOKKIT_ON_ERROR")
        .output()
        .expect("run hookkit")
}

fn init_repo_on(dir: &Path, branch: &str) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(branch);
    Repository::init_opts(dir, &opts).expect("init repository")
}

fn commit_empty(repo: &Repository) {
    let sig = Signature::now("Tester", "tester@example.com").expect("signature");
    let tree_id = repo
        .index()
        .expect("index")
        .write_tree()
        .expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .expect("commit");
}

/// Returns whether a `git` executable can be spawned.
fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs `git` in `dir` with the hookkit binary on `PATH` and isolated config.
fn git(dir: &Path, args: &[&str]) -> Output {
    let bin_dir = Path::new(env!("CARGO_BIN_EXE_hookkit"))
        .parent()
        .expect("binary dir")
        .to_path_buf();
    let mut paths = vec![bin_dir];
    if let Some(path) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&path));
    }
    Command::new("git")
        .current_dir(dir)
        .args(args)
        .env("PATH", std::env::join_paths(paths).expect("join PATH"))
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_NAME", "Tester")
        .env("GIT_AUTHOR_EMAIL", "tester@example.com")
        .env("GIT_COMMITTER_NAME", "Tester")
        .env("GIT_COMMITTER_EMAIL", "tester@example.com")
        .env_remove("HOOKKIT_BACKEND")
        .env_remove("HOOKKIT_PROTECTED_BRANCHES")
        .env_remove("HOOKKIT_SUFFIXES")
        .env_remove("HOOKKIT_COMMENT_MARKER")
        .env_remove("HOOKKIT_ON_ERROR")
        .output()
        .expect("run git")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn hookkit_stamp_adds_header() {
    let temp_dir = TempDir::new().expect("temp dir");
    init_repo_on(temp_dir.path(), "feature/x");
    fs::create_dir(temp_dir.path().join("scripts")).expect("create scripts");
    let file = temp_dir.path().join("scripts/run.py");
    fs::write(&file, "run()\n").expect("write file");

    let output = hookkit(temp_dir.path(), &["stamp", "scripts/run.py", "Makefile"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        fs::read_to_string(&file).expect("read file"),
        "# scripts/run.py\nrun()\n"
    );
    assert!(stderr_of(&output).contains("scripts/run.py"));
}

#[test]
fn hookkit_stamp_check_fails_when_file_changes() {
    let temp_dir = TempDir::new().expect("temp dir");
    let file = temp_dir.path().join("a.py");
    fs::write(&file, "x = 1\n").expect("write file");

    let output = hookkit(temp_dir.path(), &["stamp", "--check", "a.py"]);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr_of(&output));
    assert_eq!(fs::read_to_string(&file).expect("read file"), "# a.py\nx = 1\n");
    assert!(stderr_of(&output).contains("stage them"));

    let output = hookkit(temp_dir.path(), &["stamp", "--check", "a.py"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
}

#[test]
fn hookkit_stamp_without_files_succeeds() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = hookkit(temp_dir.path(), &["stamp"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
}

#[test]
fn hookkit_stamp_skip_policy_keeps_going() {
    let temp_dir = TempDir::new().expect("temp dir");
    let file = temp_dir.path().join("ok.py");
    fs::write(&file, "ok = True\n").expect("write file");

    let output = Command::new(env!("CARGO_BIN_EXE_hookkit"))
        .current_dir(temp_dir.path())
        .args(["--backend", "libgit2", "--no-color", "stamp", "gone.py", "ok.py"])
        .env("HOOKKIT_ON_ERROR", "skip")
        .output()
        .expect("run hookkit");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("gone.py"));
    assert_eq!(
        fs::read_to_string(&file).expect("read file"),
        "# ok.py\nok = True\n"
    );
}

#[test]
fn hookkit_guard_rejects_master() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = init_repo_on(temp_dir.path(), "master");
    commit_empty(&repo);

    let output = hookkit(temp_dir.path(), &["guard"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"master\""), "stdout: {}", stdout);
}

#[test]
fn hookkit_guard_allows_feature_branch() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = init_repo_on(temp_dir.path(), "feature/x");
    commit_empty(&repo);

    let output = hookkit(temp_dir.path(), &["guard"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn hookkit_init_writes_config_and_hook() {
    let temp_dir = TempDir::new().expect("temp dir");
    init_repo_on(temp_dir.path(), "main");

    let output = hookkit(temp_dir.path(), &["init"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let config = fs::read_to_string(temp_dir.path().join(".hookkit/config.toml"))
        .expect("read config");
    assert!(config.contains("protected_branches"));

    let hook_path = temp_dir.path().join(".git/hooks/pre-commit");
    let hook = fs::read_to_string(&hook_path).expect("read hook");
    assert!(hook.starts_with("#!/bin/sh"));
    assert!(hook.contains("hookkit guard"));
    assert!(hook.contains("hookkit stamp --check"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook_path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "hook should be executable");
    }
}

#[test]
fn hookkit_init_keeps_existing_hook_without_force() {
    let temp_dir = TempDir::new().expect("temp dir");
    init_repo_on(temp_dir.path(), "main");
    let hooks_dir = temp_dir.path().join(".git/hooks");
    fs::create_dir_all(&hooks_dir).expect("create hooks dir");
    fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\necho custom\n").expect("write hook");

    let output = hookkit(temp_dir.path(), &["init"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        fs::read_to_string(hooks_dir.join("pre-commit")).expect("read hook"),
        "#!/bin/sh\necho custom\n"
    );

    let output = hookkit(temp_dir.path(), &["init", "--force"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(fs::read_to_string(hooks_dir.join("pre-commit"))
        .expect("read hook")
        .contains("hookkit guard"));
}

#[test]
fn hookkit_init_outside_repository_fails() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = hookkit(temp_dir.path(), &["init"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Not a git repository"));
}

#[test]
fn hookkit_rejects_unknown_log_level() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = hookkit(temp_dir.path(), &["--log-level", "loud", "stamp"]);

    assert!(!output.status.success());
}

#[test]
fn pre_commit_hook_refuses_unstamped_commit() {
    if !git_available() {
        return;
    }
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = init_repo_on(temp_dir.path(), "feature/x");
    commit_empty(&repo);

    let output = hookkit(temp_dir.path(), &["init"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let file = temp_dir.path().join("a.py");
    fs::write(&file, "x = 1\n").expect("write file");
    let output = git(temp_dir.path(), &["add", "a.py"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let output = git(temp_dir.path(), &["commit", "-m", "add a.py"]);
    assert!(!output.status.success(), "commit without header should be refused");
    assert_eq!(fs::read_to_string(&file).expect("read file"), "# a.py\nx = 1\n");

    let output = git(temp_dir.path(), &["add", "a.py"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let output = git(temp_dir.path(), &["commit", "-m", "add a.py"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let output = git(temp_dir.path(), &["show", "HEAD:a.py"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "# a.py\nx = 1\n");
}
