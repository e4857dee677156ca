//! First edits on a project: a bare skeleton and an existing app.

use crate::common::*;

/// Leading identifier of an entry line
fn leading_id(line: &str) -> &str {
    line.trim().split_whitespace().next().unwrap_or_default()
}

#[test]
fn scenario_add_to_a_skeleton_writes_one_line_per_section() {
    let env = TestEnv::with_project(MARKERS_ONLY);

    let result = env.run(&["add", BUNDLE, "Foo.swift", "--group", "App", "--role", "compile"]);
    assert!(result.is_success(), "add failed:\n{}", result.combined_output());

    let after = env.read_project();
    let added = added_lines(MARKERS_ONLY, &after);
    assert_eq!(added.len(), 4, "added lines: {added:#?}");

    let build_row = added
        .iter()
        .find(|l| l.contains("isa = PBXBuildFile"))
        .expect("build-file row");
    let ref_row = added
        .iter()
        .find(|l| l.contains("isa = PBXFileReference"))
        .expect("file-reference row");
    let build_id = leading_id(build_row);
    let ref_id = leading_id(ref_row);

    assert_ne!(build_id, ref_id);
    assert_eq!(build_id.len(), 24);
    assert!(build_row.contains(&format!("fileRef = {ref_id} /* Foo.swift */")));
    assert!(added.iter().any(|l| l.trim() == format!("{ref_id} /* Foo.swift */,")));
    assert!(added
        .iter()
        .any(|l| l.trim() == format!("{build_id} /* Foo.swift in Sources */,")));
    assert!(!after.contains(",)"), "dangling punctuation:\n{after}");

    let check = env.run(&["check", BUNDLE]);
    assert!(check.is_success(), "check failed:\n{}", check.combined_output());
}

#[test]
fn scenario_add_after_an_anchor_keeps_the_pair_together() {
    let env = TestEnv::demo();

    let result = env.run(&["add", BUNDLE, "Baz.swift", "--group", "Demo", "--after", "Bar.swift"]);
    assert!(result.is_success(), "add failed:\n{}", result.combined_output());

    let text = env.read_project();
    let group = group_members(&text, "Demo");
    let at = group.iter().position(|m| m == "Bar.swift").unwrap();
    assert_eq!(group[at + 1], "Baz.swift");

    let phase = phase_members(&text, "Sources");
    assert_eq!(phase, ["AppDelegate.swift", "Bar.swift", "Baz.swift"]);
}

#[test]
fn scenario_build_out_a_feature_folder() {
    let env = TestEnv::demo();

    let added = env.run(&["add", BUNDLE, "Sources/Views/List.swift", "Sources/Views/Row.swift", "-g", "Views"]);
    assert!(added.is_success(), "{}", added.combined_output());
    let resource = env.run(&["add", BUNDLE, "Icons.xcassets", "-g", "Views", "-r", "resource"]);
    assert!(resource.is_success(), "{}", resource.combined_output());

    let text = env.read_project();
    assert_eq!(group_members(&text, "Views"), ["List.swift", "Row.swift", "Icons.xcassets"]);
    assert_eq!(
        phase_members(&text, "Resources"),
        ["Assets.xcassets", "Icons.xcassets"]
    );

    // second thoughts: Row belongs next to AppDelegate
    let moved = env.run(&["move", BUNDLE, "Row.swift", "-g", "Demo", "-a", "AppDelegate.swift"]);
    assert!(moved.is_success(), "{}", moved.combined_output());

    let text = env.read_project();
    assert_eq!(group_members(&text, "Views"), ["List.swift", "Icons.xcassets"]);
    assert_eq!(group_members(&text, "Demo")[..2], ["AppDelegate.swift", "Row.swift"]);
    assert_eq!(count(&text, "Row.swift in Sources */,"), 1);

    let check = env.run(&["check", BUNDLE]);
    assert!(check.is_success(), "{}", check.combined_output());
}
