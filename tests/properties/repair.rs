//! Properties of the repair passes and the checker.

use proptest::prelude::*;

use pbxmend::domain::services::{SequentialIdGenerator, SequentialScheme};
use pbxmend::{ConsistencyChecker, ProjectDocument, ProjectRepairer};

use crate::common::{duplicated_project, fused_close_project, DEMO_PROJECT};

fn ids() -> SequentialIdGenerator {
    SequentialIdGenerator::new(SequentialScheme::default()).unwrap()
}

fn damaged() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(DEMO_PROJECT.to_string()),
        Just(duplicated_project()),
        Just(fused_close_project()),
        Just(duplicated_project().replace(
            "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */,\n\t\t\t);",
            "\t\t\t\tA1B2C3D4E5F6A7B8C9D0E204 /* Views */,);",
        )),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second repair pass never changes anything.
    #[test]
    fn property_repair_is_idempotent(text in damaged()) {
        let repairer = ProjectRepairer::default();
        let mut doc = ProjectDocument::parse(&text);
        if repairer.repair(&mut doc, &mut ids()).is_err() {
            return Ok(());
        }
        let once = doc.to_text();

        let again = repairer.repair(&mut doc, &mut ids()).unwrap();
        prop_assert!(!again.has_changes());
        prop_assert_eq!(doc.to_text(), once);
    }

    /// PROPERTY: the checker never panics, whatever the input.
    #[test]
    fn property_check_never_panics(text in "(?s).{0,512}") {
        let _ = ConsistencyChecker::default().check(&ProjectDocument::parse(&text));
    }

    /// PROPERTY: the checker never panics on a project with lines dropped.
    #[test]
    fn property_check_survives_truncated_projects(cut in 0usize..140, len in 1usize..20) {
        let lines: Vec<&str> = DEMO_PROJECT.lines().collect();
        let end = (cut + len).min(lines.len());
        let start = cut.min(end);
        let mangled: Vec<&str> = lines[..start].iter().chain(&lines[end..]).copied().collect();
        let _ = ConsistencyChecker::default().check(&ProjectDocument::parse(&mangled.join("\n")));
    }
}
