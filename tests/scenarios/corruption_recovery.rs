//! Projects damaged by hand edits or merges, and getting them back.

use crate::common::*;

const BAR_ROW: &str = "\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Bar.swift in Sources */ = {isa = PBXBuildFile; fileRef = A1B2C3D4E5F6A7B8C9D0E1F5 /* Bar.swift */; };";

#[test]
fn scenario_duplicate_build_file_is_refused_then_repaired() {
    let env = TestEnv::with_project(&duplicated_project());
    let before = env.read_project();

    let refused = env.run(&["add", BUNDLE, "New.swift", "-g", "Views"]);
    assert!(!refused.is_success());
    assert!(
        refused.stderr.contains("duplicate identifier A1B2C3D4E5F6A7B8C9D0E1F4"),
        "stderr:\n{}",
        refused.stderr
    );
    assert!(refused.stderr.contains("pbxmend repair"));
    assert_eq!(env.read_project(), before, "refused edit must not touch the file");

    let check = env.run(&["check", BUNDLE]);
    assert!(!check.is_success());

    let repaired = env.run(&["repair", BUNDLE]);
    assert!(repaired.is_success(), "{}", repaired.combined_output());

    let text = env.read_project();
    assert!(text.contains(BAR_ROW), "first occurrence must stay byte-identical");
    let qux_row = text
        .lines()
        .find(|l| l.contains("/* Qux.swift in Sources */ = {isa = PBXBuildFile"))
        .unwrap();
    let fresh = qux_row.trim().split(' ').next().unwrap();
    assert_ne!(fresh, "A1B2C3D4E5F6A7B8C9D0E1F4");
    assert!(text.contains(&format!("\t\t\t\t{fresh} /* Qux.swift in Sources */,\n")));
    assert!(text.contains("\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Bar.swift in Sources */,\n"));

    let check = env.run(&["check", BUNDLE]);
    assert!(check.is_success(), "{}", check.combined_output());

    let again = env.run(&["repair", BUNDLE]);
    assert!(again.is_success());
    assert_eq!(env.read_project(), text, "second repair must be a no-op");
}

#[test]
fn scenario_repair_flag_fixes_before_editing() {
    let env = TestEnv::with_project(&duplicated_project());

    let result = env.run(&["add", BUNDLE, "New.swift", "-g", "Views", "--repair"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let text = env.read_project();
    assert_eq!(group_members(&text, "Views"), ["New.swift"]);
    assert!(text.contains(BAR_ROW));
    assert!(env.run(&["check", BUNDLE]).is_success());
}

#[test]
fn scenario_fused_list_close_is_split() {
    let env = TestEnv::with_project(&fused_close_project());

    let refused = env.run(&["add", BUNDLE, "New.swift", "-g", "Demo"]);
    assert!(!refused.is_success());
    assert!(refused.stderr.contains("dangling syntax"), "{}", refused.stderr);

    let repaired = env.run(&["repair", BUNDLE]);
    assert!(repaired.is_success(), "{}", repaired.combined_output());

    let text = env.read_project();
    assert!(text.contains("\t\t\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */\n\t\t\t);"));
    assert_eq!(env.run(&["repair", BUNDLE]).exit_code, 0);
    assert_eq!(env.read_project(), text);

    let added = env.run(&["add", BUNDLE, "New.swift", "-g", "Demo"]);
    assert!(added.is_success(), "{}", added.combined_output());
    assert_eq!(
        group_members(&env.read_project(), "Demo"),
        ["AppDelegate.swift", "Bar.swift", "Assets.xcassets", "Info.plist", "Views", "New.swift"]
    );
}
