//! Project fixtures and text helpers shared by integration tests

/// Small app project: two sources, an asset catalog, a plist, an empty `Views` group
pub const DEMO_PROJECT: &str = "// !$*UTF8*$!
{
\tarchiveVersion = 1;
\tclasses = {
\t};
\tobjectVersion = 56;
\tobjects = {

/* Begin PBXBuildFile section */
\t\tA1B2C3D4E5F6A7B8C9D0E1F2 /* AppDelegate.swift in Sources */ = {isa = PBXBuildFile; fileRef = A1B2C3D4E5F6A7B8C9D0E1F3 /* AppDelegate.swift */; };
\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Bar.swift in Sources */ = {isa = PBXBuildFile; fileRef = A1B2C3D4E5F6A7B8C9D0E1F5 /* Bar.swift */; };
\t\tA1B2C3D4E5F6A7B8C9D0E1F6 /* Assets.xcassets in Resources */ = {isa = PBXBuildFile; fileRef = A1B2C3D4E5F6A7B8C9D0E1F7 /* Assets.xcassets */; };
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
\t\tA1B2C3D4E5F6A7B8C9D0E1F3 /* AppDelegate.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = AppDelegate.swift; sourceTree = \"<group>\"; };
\t\tA1B2C3D4E5F6A7B8C9D0E1F5 /* Bar.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = Bar.swift; sourceTree = \"<group>\"; };
\t\tA1B2C3D4E5F6A7B8C9D0E1F7 /* Assets.xcassets */ = {isa = PBXFileReference; lastKnownFileType = folder.assetcatalog; path = Assets.xcassets; sourceTree = \"<group>\"; };
\t\tA1B2C3D4E5F6A7B8C9D0E1F8 /* Demo.app */ = {isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = Demo.app; sourceTree = BUILT_PRODUCTS_DIR; };
\t\tA1B2C3D4E5F6A7B8C9D0E1F9 /* Info.plist */ = {isa = PBXFileReference; lastKnownFileType = text.plist.xml; path = Info.plist; sourceTree = \"<group>\"; };
/* End PBXFileReference section */

/* Begin PBXFrameworksBuildPhase section */
\t\tA1B2C3D4E5F6A7B8C9D0E200 /* Frameworks */ = {
\t\t\tisa = PBXFrameworksBuildPhase;
\t\t\tbuildActionMask = 2147483647;
\t\t\tfiles = (
\t\t\t);
\t\t\trunOnlyForDeploymentPostprocessing = 0;
\t\t};
/* End PBXFrameworksBuildPhase section */

/* Begin PBXGroup section */
\t\tA1B2C3D4E5F6A7B8C9D0E201 = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E202 /* Demo */,
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E203 /* Products */,
\t\t\t);
\t\t\tsourceTree = \"<group>\";
\t\t};
\t\tA1B2C3D4E5F6A7B8C9D0E202 /* Demo */ = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F3 /* AppDelegate.swift */,
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F5 /* Bar.swift */,
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F7 /* Assets.xcassets */,
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F9 /* Info.plist */,
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */,
\t\t\t);
\t\t\tpath = Demo;
\t\t\tsourceTree = \"<group>\";
\t\t};
\t\tA1B2C3D4E5F6A7B8C9D0E203 /* Products */ = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F8 /* Demo.app */,
\t\t\t);
\t\t\tname = Products;
\t\t\tsourceTree = \"<group>\";
\t\t};
\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */ = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t);
\t\t\tpath = Views;
\t\t\tsourceTree = \"<group>\";
\t\t};
/* End PBXGroup section */

/* Begin PBXResourcesBuildPhase section */
\t\tA1B2C3D4E5F6A7B8C9D0E205 /* Resources */ = {
\t\t\tisa = PBXResourcesBuildPhase;
\t\t\tbuildActionMask = 2147483647;
\t\t\tfiles = (
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F6 /* Assets.xcassets in Resources */,
\t\t\t);
\t\t\trunOnlyForDeploymentPostprocessing = 0;
\t\t};
/* End PBXResourcesBuildPhase section */

/* Begin PBXSourcesBuildPhase section */
\t\tA1B2C3D4E5F6A7B8C9D0E206 /* Sources */ = {
\t\t\tisa = PBXSourcesBuildPhase;
\t\t\tbuildActionMask = 2147483647;
\t\t\tfiles = (
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F2 /* AppDelegate.swift in Sources */,
\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Bar.swift in Sources */,
\t\t\t);
\t\t\trunOnlyForDeploymentPostprocessing = 0;
\t\t};
/* End PBXSourcesBuildPhase section */
\t};
\trootObject = A1B2C3D4E5F6A7B8C9D0E207 /* Project object */;
}
";

/// Only the markers and the two list owners exist
pub const MARKERS_ONLY: &str = "// !$*UTF8*$!
{
\tobjects = {

/* Begin PBXBuildFile section */
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
/* End PBXFileReference section */

/* Begin PBXGroup section */
\t\t1A0000210A00000000000001 /* App */ = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t);
\t\t\tsourceTree = \"<group>\";
\t\t};
/* End PBXGroup section */

/* Begin PBXSourcesBuildPhase section */
\t\t1A0000320A00000000000001 /* Sources */ = {
\t\t\tisa = PBXSourcesBuildPhase;
\t\t\tfiles = (
\t\t\t);
\t\t};
/* End PBXSourcesBuildPhase section */
\t};
}
";

/// Qux.swift was pasted in with Bar.swift's build-file identifier
pub fn duplicated_project() -> String {
    DEMO_PROJECT
        .replace(
            "/* End PBXBuildFile section */",
            "\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Qux.swift in Sources */ = {isa = PBXBuildFile; fileRef = A1B2C3D4E5F6A7B8C9D0E1FA /* Qux.swift */; };\n/* End PBXBuildFile section */",
        )
        .replace(
            "/* End PBXFileReference section */",
            "\t\tA1B2C3D4E5F6A7B8C9D0E1FA /* Qux.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = Qux.swift; sourceTree = \"<group>\"; };\n/* End PBXFileReference section */",
        )
        .replace(
            "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F9 /* Info.plist */,\n",
            "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F9 /* Info.plist */,\n\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1FA /* Qux.swift */,\n",
        )
        .replace(
            "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Bar.swift in Sources */,\n",
            "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Bar.swift in Sources */,\n\t\t\t\tA1B2C3D4E5F6A7B8C9D0E1F4 /* Qux.swift in Sources */,\n",
        )
}

/// The `Demo` group's last member has its list close fused onto it
pub fn fused_close_project() -> String {
    DEMO_PROJECT.replace(
        "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */,\n\t\t\t);",
        "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */,);",
    )
}

pub fn count(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}

/// Lines of `after` that are not in `before`, matched as a multiset
pub fn added_lines(before: &str, after: &str) -> Vec<String> {
    let mut pool: Vec<&str> = before.lines().collect();
    let mut added = Vec::new();
    for line in after.lines() {
        match pool.iter().position(|l| *l == line) {
            Some(i) => {
                pool.swap_remove(i);
            }
            None => added.push(line.to_string()),
        }
    }
    added
}

/// File names listed in the `children` of the group whose header comment is `group`
pub fn group_members(text: &str, group: &str) -> Vec<String> {
    list_members(text, &format!("/* {group} */ = {{"), "children = (")
}

/// File names listed in the `files` of the build phase named `phase`
pub fn phase_members(text: &str, phase: &str) -> Vec<String> {
    list_members(text, &format!("/* {phase} */ = {{"), "files = (")
        .into_iter()
        .map(|m| m.trim_end_matches(&format!(" in {phase}")).to_string())
        .collect()
}

fn list_members(text: &str, header: &str, opener: &str) -> Vec<String> {
    let mut lines = text.lines().skip_while(|l| !l.contains(header));
    let mut members = Vec::new();
    if lines.by_ref().find(|l| l.contains(opener)).is_none() {
        return members;
    }
    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with(')') {
            break;
        }
        if let (Some(start), Some(end)) = (trimmed.find("/* "), trimmed.find(" */")) {
            members.push(trimmed[start + 3..end].to_string());
        }
        if trimmed.ends_with(");") {
            break;
        }
    }
    members
}
