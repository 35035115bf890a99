use super::ArtifactCoordinate;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// One resolved artifact selected for scanning.
///
/// Identity is the coordinate triple alone: the archive path, the
/// available-version list and the trail are diagnostic payload and take no
/// part in equality or hashing. This is what lets a flat collection of
/// references deduplicate a graph in which the same artifact appears on
/// several paths.
#[derive(Debug, Clone)]
pub struct DependencyReference {
    coordinate: ArtifactCoordinate,
    archive_path: PathBuf,
    available_versions: Vec<String>,
    dependency_trail: Vec<String>,
}

impl DependencyReference {
    pub fn new(
        coordinate: ArtifactCoordinate,
        archive_path: PathBuf,
        available_versions: Vec<String>,
        dependency_trail: Vec<String>,
    ) -> Self {
        Self {
            coordinate,
            archive_path,
            available_versions,
            dependency_trail,
        }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn group_id(&self) -> &str {
        self.coordinate.group_id()
    }

    pub fn artifact_id(&self) -> &str {
        self.coordinate.artifact_id()
    }

    pub fn version(&self) -> &str {
        self.coordinate.version()
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Versions known to exist for this artifact. Diagnostic only; may be
    /// empty.
    pub fn available_versions(&self) -> &[String] {
        &self.available_versions
    }

    pub fn dependency_trail(&self) -> &[String] {
        &self.dependency_trail
    }
}

impl PartialEq for DependencyReference {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for DependencyReference {}

impl Hash for DependencyReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

impl fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinate)
    }
}

/// Deduplicating collection of references, keyed explicitly by the
/// coordinate triple.
///
/// The first reference inserted for a given coordinate wins; later
/// duplicates, and their distinct trails, are silently discarded. Iteration
/// order is unspecified.
#[derive(Debug, Default)]
pub struct ReferenceSet {
    entries: HashMap<ArtifactCoordinate, DependencyReference>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a reference unless an equal-identity one is already present.
    /// Returns true when the reference was actually stored.
    pub fn insert(&mut self, reference: DependencyReference) -> bool {
        let key = reference.coordinate().clone();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, reference);
        true
    }

    pub fn contains(&self, coordinate: &ArtifactCoordinate) -> bool {
        self.entries.contains_key(coordinate)
    }

    pub fn get(&self, coordinate: &ArtifactCoordinate) -> Option<&DependencyReference> {
        self.entries.get(coordinate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyReference> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn reference(version: &str, path: &str, trail: &[&str]) -> DependencyReference {
        DependencyReference::new(
            ArtifactCoordinate::new("org.example", "widget", version),
            PathBuf::from(path),
            vec![],
            trail.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_equality_ignores_path_and_trail() {
        let a = reference("1.0", "/repo/a.jar", &["my-app:1.0"]);
        let b = reference("1.0", "/other/b.jar", &["my-app:1.0", "org.example:mid:2.0"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality_on_version() {
        let a = reference("1.0", "/repo/a.jar", &[]);
        let b = reference("2.0", "/repo/a.jar", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(reference("1.0", "/repo/a.jar", &["trail-one"]));
        set.insert(reference("1.0", "/other/b.jar", &["trail-two"]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        let r = reference("1.0", "/repo/a.jar", &[]);
        assert_eq!(format!("{}", r), "org.example:widget:1.0");
    }

    #[test]
    fn test_reference_set_first_insert_wins() {
        let mut set = ReferenceSet::new();
        assert!(set.insert(reference("1.0", "/repo/a.jar", &["first-trail"])));
        assert!(!set.insert(reference("1.0", "/repo/a.jar", &["second-trail"])));
        assert_eq!(set.len(), 1);

        let kept = set
            .get(&ArtifactCoordinate::new("org.example", "widget", "1.0"))
            .unwrap();
        assert_eq!(kept.dependency_trail(), &["first-trail".to_string()]);
    }

    #[test]
    fn test_reference_set_distinct_coordinates() {
        let mut set = ReferenceSet::new();
        set.insert(reference("1.0", "/repo/a.jar", &[]));
        set.insert(reference("2.0", "/repo/b.jar", &[]));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&ArtifactCoordinate::new("org.example", "widget", "2.0")));
    }
}
