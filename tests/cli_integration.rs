#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Env {
    temp: TempDir,
    conf: PathBuf,
}

impl Env {
    /// `layers` are (name, readonly) pairs, most global first. Each gets a
    /// directory of the same name under the temp root.
    fn new(layers: &[(&str, bool)], editor: &str, viewer: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let mut yaml = format!("editor: '{}'\nviewer: '{}'\ncheatpaths:\n", editor, viewer);
        for (name, readonly) in layers {
            let dir = temp.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            yaml.push_str(&format!(
                "  - name: {}\n    path: '{}'\n    readonly: {}\n    tags: [{}]\n",
                name,
                dir.display(),
                readonly,
                name
            ));
        }
        let conf = temp.path().join("conf.yml");
        fs::write(&conf, yaml).unwrap();
        Self { temp, conf }
    }

    fn dir(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cheat").unwrap();
        cmd.current_dir(self.temp.path())
            .env_remove("RUST_LOG")
            .arg("--conf")
            .arg(&self.conf);
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_directories_lists_layers_in_order() {
    let env = Env::new(&[("global", true), ("work", false)], "true", "cat");

    env.cmd()
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "global: {} (readonly: true)\nwork: {} (readonly: false)\n",
            env.dir("global").display(),
            env.dir("work").display()
        )));
}

#[test]
fn test_local_dot_cheat_is_listed_last() {
    let env = Env::new(&[("global", true)], "true", "cat");
    fs::create_dir_all(env.temp.path().join(".cheat")).unwrap();

    env.cmd()
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "local: {} (readonly: false)\n",
            env.temp.path().join(".cheat").display()
        )));
}

#[test]
fn test_list_is_sorted_and_deduplicated() {
    let env = Env::new(&[("global", true), ("work", false)], "true", "cat");
    env.write("global/tar.md", "g");
    env.write("work/tar.txt", "w");
    env.write("work/git/branch.md", "w");
    env.write("global/.hidden", "h");

    env.cmd()
        .arg("-l")
        .assert()
        .success()
        .stdout("git/branch\ntar\n");
}

#[test]
fn test_list_filtered_by_cheatpath() {
    let env = Env::new(&[("global", true), ("work", false)], "true", "cat");
    env.write("global/tar.md", "g");
    env.write("work/kubectl.md", "w");

    env.cmd()
        .args(["-l", "-p", "work"])
        .assert()
        .success()
        .stdout("kubectl\n");
}

#[test]
fn test_search_prints_hits() {
    let env = Env::new(&[("global", true)], "true", "cat");
    env.write("global/tar.md", "# tar\n\ntar -xzf file.tar.gz\n");

    env.cmd()
        .args(["-s", "xzf"])
        .assert()
        .success()
        .stdout("tar:3: tar -xzf file.tar.gz\n");
}

#[test]
fn test_view_uses_configured_viewer() {
    let env = Env::new(&[("global", true)], "true", "cat");
    env.write("global/tar.md", "tar -xzf file.tar.gz\n");

    env.cmd()
        .arg("tar")
        .assert()
        .success()
        .stdout("tar -xzf file.tar.gz\n");
}

#[test]
fn test_view_prefers_local_sheet() {
    let env = Env::new(&[("global", true)], "true", "cat");
    env.write("global/tar.md", "global version\n");
    env.write(".cheat/tar.md", "local version\n");

    env.cmd()
        .arg("tar")
        .assert()
        .success()
        .stdout("local version\n");
}

#[test]
fn test_view_falls_back_to_raw_output() {
    let env = Env::new(&[("global", true)], "true", "cheat-test-no-such-pager-xyz");
    env.write("global/tar.md", "tar -xzf file.tar.gz\n");

    env.cmd()
        .arg("tar")
        .assert()
        .success()
        .stdout(predicate::str::contains("tar -xzf file.tar.gz"));
}

#[test]
fn test_view_missing_sheet_fails() {
    let env = Env::new(&[("global", true)], "true", "cat");

    env.cmd()
        .arg("missing")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No cheatsheet found for 'missing'"));
}

#[test]
fn test_view_cannot_escape_cheatpath() {
    let env = Env::new(&[("global", true)], "true", "cat");
    env.write("secret", "do not show\n");

    env.cmd()
        .arg("../secret")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("do not show").not());
}

#[test]
fn test_edit_copies_readonly_sheet() {
    let env = Env::new(&[("global", true), ("work", false)], "true", "cat");
    env.write("global/tar.md", "tar -xzf file.tar.gz\n");

    env.cmd()
        .args(["-e", "tar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied to"));

    assert_eq!(read(&env.dir("work").join("tar.md")), "tar -xzf file.tar.gz\n");
    assert_eq!(read(&env.dir("global").join("tar.md")), "tar -xzf file.tar.gz\n");
}

#[test]
fn test_edit_new_sheet_creates_directories_only() {
    let env = Env::new(&[("global", true), ("work", false)], "true", "cat");

    env.cmd().args(["-e", "docker/compose"]).assert().success();

    assert!(env.dir("work").join("docker").is_dir());
    assert!(!env.dir("work").join("docker").join("compose").exists());
}

#[test]
fn test_edit_without_writable_cheatpath_fails() {
    let env = Env::new(&[("global", true)], "true", "cat");

    env.cmd()
        .args(["-e", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No writable cheatpath"));

    assert!(!env.dir("global").join("missing").exists());
}

#[test]
fn test_edit_requires_a_name() {
    let env = Env::new(&[("work", false)], "true", "cat");

    env.cmd()
        .arg("-e")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify a cheatsheet to edit"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("cheat")
        .unwrap()
        .current_dir(temp.path())
        .arg("--conf")
        .arg(temp.path().join("nope.yml"))
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_entry_without_path_fails() {
    let temp = TempDir::new().unwrap();
    let conf = temp.path().join("conf.yml");
    fs::write(&conf, "cheatpaths:\n  - name: broken\n").unwrap();

    Command::cargo_bin("cheat")
        .unwrap()
        .current_dir(temp.path())
        .arg("--conf")
        .arg(&conf)
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing the required field `path`"));
}
