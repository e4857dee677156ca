//! Shared pbxproj fixtures for unit tests

/// Small app project: two sources, an asset catalog, a plist, an empty `Views` group
pub(crate) const DEMO_PROJECT: &str = "// !$*UTF8*$!
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
pub(crate) const MARKERS_ONLY: &str = "// !$*UTF8*$!
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
