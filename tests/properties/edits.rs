//! Properties of add / remove / move.

use proptest::prelude::*;

use pbxmend::domain::services::{SequentialIdGenerator, SequentialScheme};
use pbxmend::{ConsistencyChecker, FileDescriptor, FileRole, IntegrityPatcher, Placement, ProjectDocument};

use crate::common::DEMO_PROJECT;

const POOL: [&str; 8] = [
    "Alpha.swift",
    "Beta.swift",
    "Gamma.m",
    "Delta.h",
    "Epsilon.storyboard",
    "Zeta.json",
    "Eta.swift",
    "Theta.xib",
];
const GROUPS: [&str; 2] = ["Demo", "Views"];

fn ids() -> SequentialIdGenerator {
    SequentialIdGenerator::new(SequentialScheme::default()).unwrap()
}

fn role() -> impl Strategy<Value = FileRole> {
    prop_oneof![
        Just(FileRole::Compile),
        Just(FileRole::Resource),
        Just(FileRole::Reference),
    ]
}

fn descriptors() -> impl Strategy<Value = Vec<FileDescriptor>> {
    proptest::sample::subsequence(POOL.to_vec(), 1..=POOL.len())
        .prop_flat_map(|names| {
            let n = names.len();
            (Just(names), proptest::collection::vec(role(), n))
        })
        .prop_map(|(names, roles)| {
            names
                .into_iter()
                .zip(roles)
                .map(|(name, role)| FileDescriptor::new(name, role))
                .collect()
        })
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize, FileRole, usize),
    Remove(usize),
    Move(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..POOL.len(), role(), 0..GROUPS.len()).prop_map(|(f, r, g)| Op::Add(f, r, g)),
        (0..POOL.len()).prop_map(Op::Remove),
        (0..POOL.len(), 0..GROUPS.len()).prop_map(|(f, g)| Op::Move(f, g)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding the same files twice changes nothing the second time.
    #[test]
    fn property_add_is_idempotent(files in descriptors(), group in 0..GROUPS.len()) {
        let patcher = IntegrityPatcher::default();
        let placement = Placement::group(GROUPS[group]);
        let mut doc = ProjectDocument::parse(DEMO_PROJECT);

        let first = patcher.add(&mut doc, &files, &placement, &mut ids()).unwrap();
        prop_assert!(first.has_changes());
        let once = doc.to_text();

        let second = patcher.add(&mut doc, &files, &placement, &mut ids()).unwrap();
        prop_assert!(!second.has_changes());
        prop_assert_eq!(second.unchanged.len(), files.len());
        prop_assert_eq!(doc.to_text(), once);
    }

    /// PROPERTY: removing what was just added restores the original text.
    #[test]
    fn property_add_then_remove_converges(files in descriptors(), group in 0..GROUPS.len()) {
        let patcher = IntegrityPatcher::default();
        let mut doc = ProjectDocument::parse(DEMO_PROJECT);

        patcher
            .add(&mut doc, &files, &Placement::group(GROUPS[group]), &mut ids())
            .unwrap();
        let names: Vec<&str> = files.iter().map(FileDescriptor::name).collect();
        patcher.remove(&mut doc, &names).unwrap();

        prop_assert_eq!(doc.to_text(), DEMO_PROJECT);
    }

    /// PROPERTY: any edit sequence leaves a project the checker finds no errors in.
    #[test]
    fn property_edit_sequences_keep_the_project_consistent(
        ops in proptest::collection::vec(op(), 1..12)
    ) {
        let patcher = IntegrityPatcher::default();
        let checker = ConsistencyChecker::default();
        let mut doc = ProjectDocument::parse(DEMO_PROJECT);
        let mut present = std::collections::HashSet::new();

        for op in &ops {
            match *op {
                Op::Add(f, role, g) => {
                    let file = FileDescriptor::new(POOL[f], role);
                    patcher
                        .add(&mut doc, &[file], &Placement::group(GROUPS[g]), &mut ids())
                        .unwrap();
                    present.insert(f);
                }
                Op::Remove(f) => {
                    patcher.remove(&mut doc, &[POOL[f]]).unwrap();
                    present.remove(&f);
                }
                Op::Move(f, g) => {
                    let moved = patcher.move_files(&mut doc, &[POOL[f]], &Placement::group(GROUPS[g]));
                    prop_assert_eq!(moved.is_ok(), present.contains(&f));
                }
            }

            let errors: Vec<_> = checker.check(&doc).into_iter().filter(|d| d.is_error()).collect();
            prop_assert!(errors.is_empty(), "after {:?}: {:?}", op, errors);
        }

        let text = doc.to_text();
        for (i, name) in POOL.iter().enumerate() {
            let refs = text.matches(&format!("/* {name} */ = {{isa = PBXFileReference")).count();
            prop_assert_eq!(refs, usize::from(present.contains(&i)), "{}", name);
        }
    }
}
