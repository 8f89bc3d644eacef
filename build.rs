use std::{path::Path, process::Command};

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_string()).filter(|s| !s.is_empty())
}

/// Rebuild when HEAD or any ref changes
fn rerun_on_git_changes(git_dir: &str) {
    let git_path = Path::new(git_dir);
    for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
        if git_path.join(watched).exists() {
            println!("cargo:rerun-if-changed={git_dir}/{watched}");
        }
    }
}

fn main() {
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        rerun_on_git_changes(&git_dir);
    }

    if let Some(git_info) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
