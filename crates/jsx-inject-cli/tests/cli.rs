//! End-to-end tests for the `jsx-inject` binary.

use std::fs;

use assert_cmd::Command;
use camino::{Utf8Path, Utf8PathBuf};
use predicates::prelude::*;
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = Utf8Path::from_path(dir.path())
            .expect("utf-8 temp path")
            .to_owned();
        fs::create_dir_all(root.join("src")).expect("mkdir src");
        Self { _dir: dir, root }
    }

    fn write(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root.join(name)).expect("read back")
    }

    fn command(&self) -> Command {
        let mut command = Command::cargo_bin("jsx-inject").expect("binary");
        command.current_dir(&self.root);
        command
    }
}

const THEME_WRAPPER: &str = "export default function Theme() {\n  return <div />;\n}\n";
const NAMED_WRAPPER: &str = "export function Wrap() {\n  return <div />;\n}\n";
const PAGE: &str = "export function Page(): JSX.Element {\n  return <div><span /></div>;\n}\n";

#[test]
fn root_mode_wraps_and_reports() {
    let ws = Workspace::new();
    ws.write("theme.tsx", THEME_WRAPPER);
    ws.write("src/page.tsx", PAGE);

    ws.command()
        .args([
            "-i",
            "theme.tsx",
            "-t",
            "src/**/*.tsx",
            "--import-path",
            "~/theme",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target files: 1"))
        .stdout(predicate::str::contains("Replacements: 1"))
        .stdout(predicate::str::contains("Imports added: 1"));

    let output = ws.read("src/page.tsx");
    assert!(output.starts_with("import Theme from '~/theme';\n"));
    assert!(output.contains("<Theme><div><span /></div></Theme>"));
}

#[test]
fn named_mode_wraps_each_target_with_props() {
    let ws = Workspace::new();
    ws.write("wrap.tsx", NAMED_WRAPPER);
    ws.write(
        "src/page.tsx",
        "export function Page(): JSX.Element {\n  return <div><Button /><section><Button /></section></div>;\n}\n",
    );

    ws.command()
        .args([
            "-i",
            "wrap.tsx",
            "-t",
            "src/**/*.tsx",
            "--import-path",
            "~/wrap",
            "-c",
            "Button",
            "-p",
            "variant=\"x\"",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacements: 2"));

    let output = ws.read("src/page.tsx");
    assert!(output.starts_with("import { Wrap } from '~/wrap';\n"));
    assert_eq!(output.matches("<Wrap variant=\"x\"><Button /></Wrap>").count(), 2);
}

#[test]
fn second_run_changes_nothing() {
    let ws = Workspace::new();
    ws.write("theme.tsx", THEME_WRAPPER);
    ws.write("src/page.tsx", PAGE);
    let args = ["-i", "theme.tsx", "-t", "src/**/*.tsx", "--import-path", "~/theme"];

    ws.command().args(args).assert().success();
    let after_first = ws.read("src/page.tsx");

    ws.command()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacements: 0"))
        .stdout(predicate::str::contains("Imports added: 0"));
    assert_eq!(ws.read("src/page.tsx"), after_first);
}

#[test]
fn exclude_pattern_limits_the_targets() {
    let ws = Workspace::new();
    ws.write("theme.tsx", THEME_WRAPPER);
    ws.write("src/page.tsx", PAGE);
    ws.write(
        "src/skip.tsx",
        "export function Skip(): JSX.Element {\n  return <p />;\n}\n",
    );

    ws.command()
        .args([
            "-i",
            "theme.tsx",
            "-t",
            "src/**/*.tsx",
            "-e",
            "src/skip.tsx",
            "--import-path",
            "~/theme",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target files: 1"));

    assert!(!ws.read("src/skip.tsx").contains("Theme"));
}

#[test]
fn missing_input_file_fails_without_touching_targets() {
    let ws = Workspace::new();
    ws.write("src/page.tsx", PAGE);

    ws.command()
        .args([
            "-i",
            "nope.tsx",
            "-t",
            "src/**/*.tsx",
            "--import-path",
            "~/nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is invalid input file path"));

    assert_eq!(ws.read("src/page.tsx"), PAGE);
}

#[test]
fn input_without_source_extension_is_rejected() {
    let ws = Workspace::new();
    ws.write("theme.css", "");
    ws.write("src/page.tsx", PAGE);

    ws.command()
        .args([
            "-i",
            "theme.css",
            "-t",
            "src/**/*.tsx",
            "--import-path",
            "~/theme",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".js, .jsx, .ts, or .tsx"));
}

#[test]
fn unmatched_target_glob_fails() {
    let ws = Workspace::new();
    ws.write("theme.tsx", THEME_WRAPPER);

    ws.command()
        .args([
            "-i",
            "theme.tsx",
            "-t",
            "pages/**/*.tsx",
            "--import-path",
            "~/theme",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not found"));
}

#[test]
fn config_mode_probes_the_import_path() {
    let ws = Workspace::new();
    ws.write("theme.tsx", THEME_WRAPPER);
    ws.write("src/page.tsx", PAGE);
    ws.write(
        "jsx-inject.config.json",
        r#"[{"importPath": "./theme", "target": ["src/**/*.tsx"]}]"#,
    );

    ws.command()
        .args(["--config", "jsx-inject.config.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacements: 1"));

    let output = ws.read("src/page.tsx");
    assert!(output.starts_with("import Theme from './theme';\n"));
}

#[test]
fn config_mode_runs_entries_sequentially() {
    let ws = Workspace::new();
    ws.write("theme.tsx", THEME_WRAPPER);
    ws.write("wrap.tsx", NAMED_WRAPPER);
    ws.write("src/page.tsx", PAGE);
    ws.write(
        "jsx-inject.config.json",
        r#"[
  {"importPath": "./wrap", "target": ["src/**/*.tsx"], "targetComponent": "span"},
  {"importPath": "./theme", "target": ["src/**/*.tsx"]}
]"#,
    );

    ws.command()
        .args(["--config", "jsx-inject.config.json"])
        .assert()
        .success();

    let output = ws.read("src/page.tsx");
    assert!(output.contains("import { Wrap } from './wrap';"));
    assert!(output.contains("import Theme from './theme';"));
    assert!(output.contains("<Theme><div><Wrap><span /></Wrap></div></Theme>"));
}

#[test]
fn config_mode_with_missing_wrapper_fails() {
    let ws = Workspace::new();
    ws.write("src/page.tsx", PAGE);
    ws.write(
        "jsx-inject.config.json",
        r#"[{"importPath": "./absent", "target": ["src/**/*.tsx"]}]"#,
    );

    ws.command()
        .args(["--config", "jsx-inject.config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("import file not found"));

    assert_eq!(ws.read("src/page.tsx"), PAGE);
}

#[test]
fn config_flag_conflicts_with_input_flag() {
    let ws = Workspace::new();

    ws.command()
        .args(["--config", "c.json", "-i", "theme.tsx"])
        .assert()
        .code(2);
}

#[test]
fn help_prints_to_stdout() {
    let ws = Workspace::new();

    ws.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--import-path"));
}
