//! Catalog and path resolution properties

use std::collections::BTreeMap;
use std::sync::Arc;

use linthold::domain::entities::EntryKind;
use linthold::infrastructure::LocalFs;
use linthold::{
    CatalogKey, CatalogResolver, LintholdError, PathResolver, VersionCatalog, VersionCatalogEntry,
};
use proptest::prelude::*;

fn catalog_of(entries: &BTreeMap<String, String>) -> VersionCatalog {
    VersionCatalog::from_entries(entries.iter().map(|(key, version)| VersionCatalogEntry {
        key: CatalogKey::parse(key).unwrap(),
        version: version.clone(),
        kind: EntryKind::Version,
        coordinate: None,
    }))
    .unwrap()
}

proptest! {
    /// PROPERTY: every present key resolves to its own version
    #[test]
    fn prop_present_keys_resolve(
        entries in prop::collection::btree_map("[a-z][a-z0-9]{0,6}", "[0-9]{1,2}\\.[0-9]{1,2}", 1..8)
    ) {
        let resolver = CatalogResolver::new(Arc::new(catalog_of(&entries)));
        for (key, version) in &entries {
            prop_assert_eq!(&resolver.resolve(key).unwrap(), version);
        }
    }

    /// PROPERTY: an absent key is UnknownKey, never a default
    #[test]
    fn prop_absent_keys_fail(
        entries in prop::collection::btree_map("[a-z]{1,6}", "[0-9]{1,2}", 0..6),
        absent in "[a-z]{1,6}",
    ) {
        prop_assume!(!entries.contains_key(&absent));
        let resolver = CatalogResolver::new(Arc::new(catalog_of(&entries)));
        let is_unknown = matches!(resolver.resolve(&absent), Err(LintholdError::UnknownKey { .. }));
        prop_assert!(is_unknown);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// PROPERTY: resolved paths are canonical and inside the root
    #[test]
    fn prop_resolved_paths_are_canonical(
        dirs in prop::collection::vec("[a-z]{1,6}", 1..4),
        file in "[a-z]{1,8}\\.xml",
    ) {
        let root = tempfile::tempdir().unwrap();
        let relative = format!("{}/{}", dirs.join("/"), file);
        let target = root.path().join(&relative);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "<module name=\"Checker\"/>").unwrap();

        let resolver = PathResolver::new(Arc::new(LocalFs::new()));
        let resolved = resolver.resolve(root.path(), &relative).unwrap();
        let canonical_root = root.path().canonicalize().unwrap();

        prop_assert_eq!(&resolved, &target.canonicalize().unwrap());
        prop_assert!(resolved.starts_with(&canonical_root));

        let dotted = format!("./{}", relative);
        prop_assert_eq!(resolver.resolve(root.path(), &dotted).unwrap(), resolved);
    }
}
