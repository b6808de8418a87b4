use assert_cmd::Command;
use std::path::Path;

pub fn landmarks_cmd() -> Command {
    let mut cmd = Command::cargo_bin("landmarks").unwrap();
    cmd.env_remove("LANDMARKS_ROOT");
    cmd.env_remove("LANDMARKS_USER");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `note add` in `dir` and return the printed note id
#[allow(dead_code)]
pub fn add_note(dir: &Path, user: &str, landmark: &str, text: &str) -> String {
    let output = landmarks_cmd()
        .current_dir(dir)
        .args(["note", "add", user, landmark, text])
        .output()
        .unwrap();
    assert!(output.status.success(), "note add failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
