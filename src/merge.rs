//! Merge policy for dependencies and bundles
//!
//! Incoming entries from an import definition are reconciled with the
//! project manifest one at a time. The same rules apply to dependency
//! entries inside a bundle and to whole bundles inside `build.bundles`;
//! only the identity accessor differs.
//!
//! | action    | already present | force | result                   |
//! |-----------|-----------------|-------|--------------------------|
//! | install   | no              | -     | append                   |
//! | install   | yes             | false | skip (existing kept)     |
//! | install   | yes             | true  | replace in place         |
//! | uninstall | no              | -     | nothing to remove        |
//! | uninstall | yes             | -     | remove first match       |

use crate::config::{Action, BundleSpec};
use crate::error::{ImportError, Result};

/// Entries with a name that identifies them inside their collection
pub trait Named {
    fn identity(&self) -> &str;
}

/// What the merge did with one incoming entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Appended on install
    Added,
    /// Replaced an existing entry on forced install
    Replaced,
    /// Already present on install without force
    Skipped,
    /// Removed on uninstall
    Removed,
    /// Not present on uninstall
    Absent,
}

impl MergeOutcome {
    /// Whether the collection was changed
    pub fn is_change(self) -> bool {
        matches!(
            self,
            MergeOutcome::Added | MergeOutcome::Replaced | MergeOutcome::Removed
        )
    }
}

/// Reconcile one incoming entry with an existing collection
pub fn merge_entry<T: Named>(
    existing: &mut Vec<T>,
    incoming: T,
    action: Action,
    force: bool,
) -> MergeOutcome {
    let position = existing
        .iter()
        .position(|entry| entry.identity() == incoming.identity());

    match (position, action) {
        (None, Action::Install) => {
            existing.push(incoming);
            MergeOutcome::Added
        }
        (None, Action::Uninstall) => MergeOutcome::Absent,
        (Some(i), Action::Install) if force => {
            existing[i] = incoming;
            MergeOutcome::Replaced
        }
        (Some(_), Action::Install) => MergeOutcome::Skipped,
        (Some(i), Action::Uninstall) => {
            existing.remove(i);
            MergeOutcome::Removed
        }
    }
}

/// Index of the bundle used when the requested one does not exist
///
/// Projects usually have an app bundle followed by a vendor bundle, so the
/// second bundle is preferred; single-bundle projects use the only one.
pub fn fallback_bundle_index(bundles: &[BundleSpec]) -> Result<usize> {
    match bundles.len() {
        0 => Err(ImportError::DefaultBundleMissing),
        1 => Ok(0),
        _ => Ok(1),
    }
}

/// Index of the target bundle: by name, else the fallback position
///
/// Returns the index and whether the fallback was used.
pub fn resolve_target_bundle(bundles: &[BundleSpec], requested: &str) -> Result<(usize, bool)> {
    match bundles.iter().position(|b| b.name == requested) {
        Some(index) => Ok((index, false)),
        None => fallback_bundle_index(bundles).map(|index| (index, true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DependencyEntry;
    use serde_json::{Map, json};

    fn deps(names: &[&str]) -> Vec<DependencyEntry> {
        names.iter().map(|n| DependencyEntry::named(*n)).collect()
    }

    fn configured(name: &str, main: &str) -> DependencyEntry {
        let mut extra = Map::new();
        extra.insert("main".to_string(), json!(main));
        DependencyEntry::configured(name, extra)
    }

    fn bundles(names: &[&str]) -> Vec<BundleSpec> {
        names.iter().map(|n| BundleSpec::new(*n)).collect()
    }

    #[test]
    fn test_install_appends_new_entry() {
        let mut list = deps(&["a", "b"]);
        let outcome = merge_entry(&mut list, "c".into(), Action::Install, false);
        assert_eq!(outcome, MergeOutcome::Added);
        assert_eq!(list, deps(&["a", "b", "c"]));
    }

    #[test]
    fn test_install_without_force_is_idempotent() {
        let mut list = vec![
            DependencyEntry::named("a"),
            configured("jquery", "dist/jquery"),
        ];
        let before = list.clone();

        let outcome = merge_entry(
            &mut list,
            configured("jquery", "other"),
            Action::Install,
            false,
        );
        assert_eq!(outcome, MergeOutcome::Skipped);
        assert!(!outcome.is_change());
        assert_eq!(list, before);
    }

    #[test]
    fn test_forced_install_replaces_in_place() {
        let mut list = vec![
            DependencyEntry::named("a"),
            DependencyEntry::named("jquery"),
            DependencyEntry::named("z"),
        ];
        let replacement = configured("jquery", "dist/jquery");

        let outcome = merge_entry(&mut list, replacement.clone(), Action::Install, true);
        assert_eq!(outcome, MergeOutcome::Replaced);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], DependencyEntry::named("a"));
        assert_eq!(list[1], replacement);
        assert_eq!(list[2], DependencyEntry::named("z"));
    }

    #[test]
    fn test_identity_matches_across_entry_shapes() {
        let mut list = vec![configured("jquery", "dist/jquery")];
        let outcome = merge_entry(&mut list, "jquery".into(), Action::Uninstall, false);
        assert_eq!(outcome, MergeOutcome::Removed);
        assert!(list.is_empty());
    }

    #[test]
    fn test_uninstall_missing_is_noop() {
        let mut list = deps(&["a", "b"]);
        let outcome = merge_entry(&mut list, "c".into(), Action::Uninstall, true);
        assert_eq!(outcome, MergeOutcome::Absent);
        assert_eq!(list, deps(&["a", "b"]));
    }

    #[test]
    fn test_uninstall_removes_first_match_only() {
        let mut list = deps(&["a", "dup", "b", "dup"]);
        let outcome = merge_entry(&mut list, "dup".into(), Action::Uninstall, false);
        assert_eq!(outcome, MergeOutcome::Removed);
        assert_eq!(list, deps(&["a", "b", "dup"]));
    }

    #[test]
    fn test_bundles_merge_by_name() {
        let mut list = bundles(&["app-bundle.js", "vendor-bundle.js"]);
        let incoming =
            BundleSpec::new("vendor-bundle.js").with_dependencies(["jquery"]);

        assert_eq!(
            merge_entry(&mut list, incoming.clone(), Action::Install, false),
            MergeOutcome::Skipped
        );
        assert!(list[1].dependencies.is_none());

        assert_eq!(
            merge_entry(&mut list, incoming.clone(), Action::Install, true),
            MergeOutcome::Replaced
        );
        assert_eq!(list[1], incoming);
    }

    #[test]
    fn test_target_bundle_by_name() {
        let list = bundles(&["app-bundle", "vendor-bundle.js"]);
        assert_eq!(
            resolve_target_bundle(&list, "vendor-bundle.js").unwrap(),
            (1, false)
        );
    }

    #[test]
    fn test_target_bundle_falls_back_to_only_bundle() {
        let list = bundles(&["only-bundle"]);
        assert_eq!(resolve_target_bundle(&list, "missing").unwrap(), (0, true));
    }

    #[test]
    fn test_target_bundle_falls_back_to_second_bundle() {
        let list = bundles(&["a", "b", "c"]);
        let (index, fallback) = resolve_target_bundle(&list, "missing").unwrap();
        assert!(fallback);
        assert_eq!(list[index].name, "b");
    }

    #[test]
    fn test_fallback_without_bundles_is_fatal() {
        assert!(matches!(
            resolve_target_bundle(&[], "vendor-bundle.js"),
            Err(ImportError::DefaultBundleMissing)
        ));
    }
}
