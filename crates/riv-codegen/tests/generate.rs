//! Rendering and writing generated TypeScript modules.

use std::collections::BTreeMap;
use std::fs;

use riv_codegen::{
    ARTBOARD_CONSTANTS_FILE, ARTBOARDS_FILE, CodegenError, GenerateOptions, INDEX_FILE,
    STATE_MACHINES_FILE, generate, render, write_artifacts,
};
use tempfile::TempDir;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn state_machines(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(artboard, machines)| ((*artboard).to_string(), names(machines)))
        .collect()
}

#[test]
fn artboards_module() {
    let set = render(&names(&["Main", "OrderButton"]), &GenerateOptions::default()).unwrap();
    insta::assert_snapshot!(set.file(ARTBOARDS_FILE).unwrap(), @r#"
    // Generated by riv-typegen. Do not edit.

    export type RiveArtboardName = "Main" | "OrderButton";

    export const RiveArtboardNames = ["Main", "OrderButton"] as const;

    const artboardNameSet: ReadonlySet<string> = new Set(RiveArtboardNames);

    export function isRiveArtboardName(value: string): value is RiveArtboardName {
      return artboardNameSet.has(value);
    }
    "#);
}

#[test]
fn constants_module() {
    let set = render(
        &names(&["Main", "Tip Button", "123"]),
        &GenerateOptions::default(),
    )
    .unwrap();
    insta::assert_snapshot!(set.file(ARTBOARD_CONSTANTS_FILE).unwrap(), @r#"
    // Generated by riv-typegen. Do not edit.

    export const RiveArtboard = {
      Main: "Main",
      Tip_Button: "Tip Button",
      _123: "123",
    } as const;

    export type RiveArtboardRef = (typeof RiveArtboard)[keyof typeof RiveArtboard];
    "#);
}

#[test]
fn state_machine_module() {
    let options = GenerateOptions::new()
        .with_base_name("Widget")
        .with_state_machines(state_machines(&[
            ("Main", &["Idle", "Hover"]),
            ("OrderButton", &["Pressed", "Idle"]),
        ]));
    let set = render(&names(&["Main", "OrderButton", "Icon", "Main"]), &options).unwrap();

    assert_eq!(set.state_machine_names, names(&["Hover", "Idle", "Pressed"]));
    insta::assert_snapshot!(set.file(STATE_MACHINES_FILE).unwrap(), @r#"
    // Generated by riv-typegen. Do not edit.

    export type WidgetStateMachineName = "Hover" | "Idle" | "Pressed";

    export const WidgetStateMachineNames = ["Hover", "Idle", "Pressed"] as const;

    const stateMachineNameSet: ReadonlySet<string> = new Set(WidgetStateMachineNames);

    export function isWidgetStateMachineName(value: string): value is WidgetStateMachineName {
      return stateMachineNameSet.has(value);
    }

    export const WidgetStateMachinesByArtboard = {
      "Main": ["Idle", "Hover"],
      "OrderButton": ["Pressed", "Idle"],
      "Icon": [],
    } as const;
    "#);
    insta::assert_snapshot!(set.file(INDEX_FILE).unwrap(), @r#"
    // Generated by riv-typegen. Do not edit.

    export * from "./artboards";
    export * from "./artboard-constants";
    export * from "./state-machines";
    "#);
}

#[test]
fn state_machine_module_is_conditional() {
    let empty = GenerateOptions::new().with_state_machines(state_machines(&[("Main", &[])]));
    let set = render(&names(&["Main"]), &empty).unwrap();
    assert_eq!(
        set.file_names(),
        vec![ARTBOARDS_FILE, ARTBOARD_CONSTANTS_FILE, INDEX_FILE]
    );
    assert!(!set.has_state_machines());
    assert!(!set.file(INDEX_FILE).unwrap().contains("state-machines"));
}

#[test]
fn base_name_is_sanitized() {
    let options = GenerateOptions::new().with_base_name("my widget!");
    let set = render(&names(&["Main"]), &options).unwrap();
    let artboards = set.file(ARTBOARDS_FILE).unwrap();
    assert!(artboards.contains("export type my_widgetArtboardName = \"Main\";"));
    assert!(artboards.contains("export function ismy_widgetArtboardName("));
}

#[test]
fn predicate_tests_set_membership() {
    let set = render(&names(&["Main"]), &GenerateOptions::default()).unwrap();
    let artboards = set.file(ARTBOARDS_FILE).unwrap();
    assert!(artboards.contains("new Set(RiveArtboardNames)"));
    assert!(artboards.contains("return artboardNameSet.has(value);"));
    assert!(!artboards.contains("\"X\""));
}

#[test]
fn untrusted_names_are_escaped() {
    let set = render(
        &names(&["He said \"go\"", "back\\slash", "</script>"]),
        &GenerateOptions::default(),
    )
    .unwrap();
    let artboards = set.file(ARTBOARDS_FILE).unwrap();
    assert!(artboards.contains(r#""He said \"go\"" | "back\\slash" | "</script>""#));
    let constants = set.file(ARTBOARD_CONSTANTS_FILE).unwrap();
    assert!(constants.contains(r#"  He_said_go: "He said \"go\"","#));
    assert!(constants.contains(r#"  script: "</script>","#));
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("generated");
    let input = names(&["Main", "OrderButton"]);
    let options = GenerateOptions::new().with_base_name("Widget");

    let first = generate(&out, &input, &options).unwrap();
    let before: Vec<Vec<u8>> = first
        .file_names()
        .iter()
        .map(|name| fs::read(out.join(name)).unwrap())
        .collect();

    let second = generate(&out, &input, &options).unwrap();
    let after: Vec<Vec<u8>> = second
        .file_names()
        .iter()
        .map(|name| fs::read(out.join(name)).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
    let artboards = fs::read_to_string(out.join(ARTBOARDS_FILE)).unwrap();
    assert!(artboards.contains(r#"export type WidgetArtboardName = "Main" | "OrderButton";"#));
}

#[test]
fn stale_state_machine_module_is_removed() {
    let dir = TempDir::new().unwrap();
    let with_machines =
        GenerateOptions::new().with_state_machines(state_machines(&[("Main", &["Idle"])]));
    generate(dir.path(), &names(&["Main"]), &with_machines).unwrap();
    assert!(dir.path().join(STATE_MACHINES_FILE).exists());

    let written = write_artifacts(
        dir.path(),
        &render(&names(&["Main"]), &GenerateOptions::default()).unwrap(),
    )
    .unwrap();
    assert_eq!(written.len(), 3);
    assert!(!dir.path().join(STATE_MACHINES_FILE).exists());
}

#[test]
fn write_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let err = generate(&blocker, &names(&["Main"]), &GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, CodegenError::CreateDir { .. }));
}

#[test]
fn empty_name_list_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("generated");
    let err = generate(&out, &[], &GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, CodegenError::NoArtboards));
    assert!(!out.exists());
}
