//! End-to-end wrap-run behaviour over real files.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use jsx_inject_core::{
    FormatError, FormatOptions, Formatter, WrapError, WrapRequest, run, run_with,
};

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
        Self { _dir: dir, root }
    }

    fn write(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn read(&self, path: &Utf8Path) -> String {
        fs::read_to_string(path).expect("read back")
    }
}

fn request(
    wrapper: &Utf8Path,
    targets: Vec<Utf8PathBuf>,
    target_component: Option<&str>,
    props: Option<&str>,
) -> WrapRequest {
    WrapRequest {
        import_file_path: wrapper.to_owned(),
        import_path: "~/wrapper".to_owned(),
        targets,
        target_component: target_component.map(str::to_owned),
        props: props.map(str::to_owned),
    }
}

const THEME_WRAPPER: &str =
    "export default function Theme() {\n  return <div />;\n}\n";
const NAMED_WRAPPER: &str =
    "export function Wrap() {\n  return <div />;\n}\n";

#[test]
fn root_mode_wraps_and_imports_default() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  return <div><span /></div>;\n}\n",
    );

    let report = run(&request(&wrapper, vec![page.clone()], None, None)).expect("run");

    assert_eq!(report.replacements_applied, 1);
    assert_eq!(report.imports_added, 1);
    assert_eq!(report.files_written, 1);
    assert_eq!(report.files_failed, 0);

    let output = ws.read(&page);
    assert!(output.starts_with("import Theme from '~/wrapper';\n"));
    assert!(output.contains("return <Theme><div><span /></div></Theme>;"));
}

#[test]
fn root_mode_is_idempotent() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  return <div />;\n}\n",
    );

    run(&request(&wrapper, vec![page.clone()], None, None)).expect("first run");
    let after_first = ws.read(&page);

    let second = run(&request(&wrapper, vec![page.clone()], None, None)).expect("second run");

    assert_eq!(second.replacements_applied, 0);
    assert_eq!(second.imports_added, 0);
    assert_eq!(ws.read(&page), after_first);
}

#[test]
fn named_mode_is_idempotent() {
    let ws = Workspace::new();
    let wrapper = ws.write("wrap.tsx", NAMED_WRAPPER);
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  return <div><Button /></div>;\n}\n",
    );

    run(&request(&wrapper, vec![page.clone()], Some("Button"), None)).expect("first run");
    let after_first = ws.read(&page);
    assert!(after_first.contains("<Wrap><Button /></Wrap>"));

    let second =
        run(&request(&wrapper, vec![page.clone()], Some("Button"), None)).expect("second run");

    assert_eq!(second.replacements_applied, 0);
    assert_eq!(ws.read(&page), after_first);
}

#[test]
fn named_mode_wraps_each_target_independently() {
    let ws = Workspace::new();
    let wrapper = ws.write("wrap.tsx", NAMED_WRAPPER);
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  return <div><Button /><section><Button /></section></div>;\n}\n",
    );

    let report = run(&request(
        &wrapper,
        vec![page.clone()],
        Some("Button"),
        Some("variant=\"x\""),
    ))
    .expect("run");

    assert_eq!(report.replacements_applied, 2);
    assert_eq!(report.imports_added, 1);

    let output = ws.read(&page);
    assert!(output.starts_with("import { Wrap } from '~/wrapper';\n"));
    assert!(output.contains(
        "<div><Wrap variant=\"x\"><Button /></Wrap><section><Wrap variant=\"x\"><Button /></Wrap></section></div>"
    ));
}

#[test]
fn one_import_per_file_across_many_returns() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let one = ws.write(
        "one.tsx",
        "export function A(): JSX.Element {\n  return <a />;\n}\nexport function B(): JSX.Element {\n  return <b />;\n}\n",
    );
    let two = ws.write(
        "two.tsx",
        "export function C(): JSX.Element {\n  return <c />;\n}\n",
    );

    let report = run(&request(&wrapper, vec![one.clone(), two.clone()], None, None)).expect("run");

    assert_eq!(report.replacements_applied, 3);
    assert_eq!(report.imports_added, 2);
    assert_eq!(ws.read(&one).matches("import Theme").count(), 1);
    assert_eq!(ws.read(&two).matches("import Theme").count(), 1);
}

#[test]
fn non_jsx_returns_leave_file_untouched() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let source = "export function Page(): JSX.Element {\n  return null;\n}\nexport function Text(): JSX.Element {\n  return 'hello';\n}\n";
    let page = ws.write("page.tsx", source);

    let report = run(&request(&wrapper, vec![page.clone()], None, None)).expect("run");

    assert_eq!(report.candidates_found, 0);
    assert_eq!(report.replacements_applied, 0);
    assert_eq!(report.imports_added, 0);
    assert_eq!(report.files_written, 0);
    assert_eq!(ws.read(&page), source);
}

#[test]
fn missing_wrapper_aborts_before_touching_targets() {
    let ws = Workspace::new();
    let source = "export function Page(): JSX.Element {\n  return <div />;\n}\n";
    let page = ws.write("page.tsx", source);
    let missing = ws.root.join("nope.tsx");

    let result = run(&request(&missing, vec![page.clone()], None, None));

    assert!(matches!(result, Err(WrapError::ImportFileNotFound { .. })));
    assert_eq!(ws.read(&page), source);
}

#[test]
fn wrapper_without_exports_is_fatal() {
    let ws = Workspace::new();
    let wrapper = ws.write("empty.tsx", "const hidden = () => <div />;\n");
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  return <div />;\n}\n",
    );

    let result = run(&request(&wrapper, vec![page], None, None));

    assert!(matches!(result, Err(WrapError::NoExportsFound { .. })));
}

#[test]
fn branch_returns_each_wrapped() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  if (flag) {\n    return <section />;\n  }\n  return <main />;\n}\n",
    );

    let report = run(&request(&wrapper, vec![page.clone()], None, None)).expect("run");

    assert_eq!(report.replacements_applied, 2);
    let output = ws.read(&page);
    assert!(output.contains("<Theme><section /></Theme>"));
    assert!(output.contains("<Theme><main /></Theme>"));
}

#[test]
fn parenthesised_return_is_unwrapped_once() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let page = ws.write(
        "page.tsx",
        "export function Page(): JSX.Element {\n  return (\n    <div />\n  );\n}\n",
    );

    let report = run(&request(&wrapper, vec![page.clone()], None, None)).expect("run");

    assert_eq!(report.replacements_applied, 1);
    assert!(ws.read(&page).contains("<Theme><div /></Theme>"));
}

#[test]
fn format_failure_loses_only_that_file() {
    // Refuses any text mentioning Flaky; everything else passes through.
    struct FailOnFlaky;
    impl Formatter for FailOnFlaky {
        fn format(&self, text: &str, _options: &FormatOptions) -> Result<String, FormatError> {
            if text.contains("Flaky") {
                return Err(FormatError::new("refusing to format"));
            }
            Ok(text.to_owned())
        }
    }

    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let flaky_source = "export function Flaky(): JSX.Element {\n  return <div />;\n}\n";
    let flaky = ws.write("flaky.tsx", flaky_source);
    let good = ws.write(
        "good.tsx",
        "export function Good(): JSX.Element {\n  return <main />;\n}\n",
    );

    let report = run_with(
        &request(&wrapper, vec![flaky.clone(), good.clone()], None, None),
        &FailOnFlaky,
        &FormatOptions::default(),
    )
    .expect("run");

    assert_eq!(report.replacements_applied, 2);
    assert_eq!(report.files_failed, 1);
    assert_eq!(report.files_written, 1);
    // The failing file's edits are lost; the other file still lands.
    assert_eq!(ws.read(&flaky), flaky_source);
    assert!(ws.read(&good).contains("<Theme><main /></Theme>"));
}

#[test]
fn unreadable_target_is_skipped_not_fatal() {
    let ws = Workspace::new();
    let wrapper = ws.write("theme.tsx", THEME_WRAPPER);
    let good = ws.write(
        "good.tsx",
        "export function Page(): JSX.Element {\n  return <div />;\n}\n",
    );
    let missing = ws.root.join("missing.tsx");

    let report = run(&request(&wrapper, vec![missing, good.clone()], None, None)).expect("run");

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.replacements_applied, 1);
    assert!(ws.read(&good).contains("<Theme><div /></Theme>"));
}
