//! Every write leaves a backup behind, and restore puts it back.

use crate::common::*;

#[test]
fn scenario_undo_an_edit_with_restore() {
    let env = TestEnv::demo();

    let added = env.run(&["add", BUNDLE, "Oops.swift", "-g", "Views"]);
    assert!(added.is_success(), "{}", added.combined_output());
    assert!(added.stdout.contains("Backup:"), "{}", added.stdout);

    let backups = env.backups();
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0]).unwrap(), DEMO_PROJECT);
    assert_ne!(env.read_project(), DEMO_PROJECT);

    let preview = env.run(&["restore", BUNDLE, "--dry-run"]);
    assert!(preview.is_success(), "{}", preview.combined_output());
    assert_ne!(env.read_project(), DEMO_PROJECT);

    let restored = env.run(&["restore", BUNDLE]);
    assert!(restored.is_success(), "{}", restored.combined_output());
    assert!(restored.stdout.contains("Restored from backup"));
    assert_eq!(env.read_project(), DEMO_PROJECT);

    let again = env.run(&["restore", BUNDLE]);
    assert!(again.is_success());
    assert!(again.stdout.contains("already matches"), "{}", again.stdout);
}

#[test]
fn scenario_no_backup_flag_and_unchanged_runs_leave_no_backup() {
    let env = TestEnv::demo();

    let unchanged = env.run(&["add", BUNDLE, "Bar.swift"]);
    assert!(unchanged.is_success(), "{}", unchanged.combined_output());
    assert!(unchanged.stdout.contains("Already up-to-date"));
    assert!(env.backups().is_empty());

    let added = env.run(&["add", BUNDLE, "Baz.swift", "-g", "Views", "--no-backup"]);
    assert!(added.is_success(), "{}", added.combined_output());
    assert!(env.backups().is_empty());

    let restore = env.run(&["restore", BUNDLE]);
    assert!(!restore.is_success());
    assert!(restore.stderr.contains("no backup"), "{}", restore.stderr);
}

#[test]
fn scenario_restore_recreates_a_deleted_project_file() {
    let env = TestEnv::demo();
    assert!(env.run(&["remove", BUNDLE, "Bar.swift"]).is_success());

    std::fs::remove_file(env.pbxproj()).unwrap();

    let restored = env.run(&["restore", BUNDLE]);
    assert!(restored.is_success(), "{}", restored.combined_output());
    assert_eq!(env.read_project(), DEMO_PROJECT);
}
