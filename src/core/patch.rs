//! Marker-anchored insertion into registry files.
//!
//! Registry files are pre-seeded with literal end-of-section markers
//! (for example `// End of Imports`). A patch inserts a generated fragment
//! directly before its marker, and a probe fragment makes the operation
//! idempotent: if the probe is already present the content is returned
//! unchanged. The registry structure is a precondition: an absent marker
//! is a hard error, not something the engine repairs.

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// Result of applying a single patch to in-memory content.
#[derive(Debug)]
pub struct Patched {
    pub content: String,
    pub applied: bool,
}

/// One marker/probe/insert triple targeting a registry file.
#[derive(Debug, Clone)]
pub struct RegistryPatch {
    /// Short human-readable identifier for command output (`import`, `route`).
    pub label: &'static str,
    pub marker: &'static str,
    pub probe: String,
    pub insert: String,
}

/// Per-patch outcome reported in command output.
#[derive(Debug, Clone, Serialize)]
pub struct PatchRecord {
    pub file: String,
    pub label: String,
    pub applied: bool,
}

/// Insert `insert` directly before the first occurrence of `marker`.
///
/// If `probe` is already present the content is returned unchanged, so
/// applying the same patch twice yields the same content as applying it
/// once. A missing marker fails with `scaffold.marker_not_found`.
pub fn apply(content: &str, marker: &str, probe: &str, insert: &str) -> Result<Patched> {
    if content.contains(probe) {
        return Ok(Patched {
            content: content.to_string(),
            applied: false,
        });
    }

    if !content.contains(marker) {
        return Err(Error::scaffold_marker_not_found(marker));
    }

    Ok(Patched {
        content: content.replacen(marker, &format!("{}{}", insert, marker), 1),
        applied: true,
    })
}

/// Apply a sequence of patches to one registry file.
///
/// The file is read once, patched in memory, and written back only when
/// something changed, so a fully idempotent run leaves the file untouched
/// on disk, byte for byte.
pub fn apply_to_file(path: &Path, patches: &[RegistryPatch]) -> Result<Vec<PatchRecord>> {
    let original = io::read_file(path, "read registry file")?;
    let mut content = original.clone();
    let mut records = Vec::with_capacity(patches.len());

    for patch in patches {
        let patched = apply(&content, patch.marker, &patch.probe, &patch.insert)
            .map_err(|e| e.with_hint(format!("Registry file: {}", path.display())))?;
        records.push(PatchRecord {
            file: path.display().to_string(),
            label: patch.label.to_string(),
            applied: patched.applied,
        });
        content = patched.content;
    }

    if content != original {
        io::write_file(path, &content, "write registry file")?;
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MARKER: &str = "// End of Imports";

    fn registry() -> String {
        format!("import A from './A';\n{}\nrest of file\n", MARKER)
    }

    #[test]
    fn apply_inserts_before_marker() {
        let patched = apply(
            &registry(),
            MARKER,
            "import B from './B';",
            "import B from './B';\n",
        )
        .unwrap();

        assert!(patched.applied);
        assert_eq!(
            patched.content,
            format!("import A from './A';\nimport B from './B';\n{}\nrest of file\n", MARKER)
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let once = apply(
            &registry(),
            MARKER,
            "import B from './B';",
            "import B from './B';\n",
        )
        .unwrap();
        let twice = apply(
            &once.content,
            MARKER,
            "import B from './B';",
            "import B from './B';\n",
        )
        .unwrap();

        assert!(!twice.applied);
        assert_eq!(twice.content, once.content);
    }

    #[test]
    fn apply_replaces_only_first_marker_occurrence() {
        let content = format!("{}\nmiddle\n{}\n", MARKER, MARKER);
        let patched = apply(&content, MARKER, "inserted", "inserted ").unwrap();
        assert_eq!(patched.content, format!("inserted {}\nmiddle\n{}\n", MARKER, MARKER));
    }

    #[test]
    fn apply_fails_when_marker_absent() {
        let err = apply("no markers here\n", MARKER, "probe", "insert").unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.marker_not_found");
    }

    #[test]
    fn apply_to_file_applies_all_patches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Registry.tsx");
        fs::write(&path, registry()).unwrap();

        let patches = vec![
            RegistryPatch {
                label: "import",
                marker: MARKER,
                probe: "import B from './B';".to_string(),
                insert: "import B from './B';\n".to_string(),
            },
            RegistryPatch {
                label: "import",
                marker: MARKER,
                probe: "import C from './C';".to_string(),
                insert: "import C from './C';\n".to_string(),
            },
        ];

        let records = apply_to_file(&path, &patches).unwrap();
        assert!(records.iter().all(|r| r.applied));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("import B from './B';\nimport C from './C';\n// End of Imports"));
    }

    #[test]
    fn apply_to_file_leaves_patched_file_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Registry.tsx");
        fs::write(&path, registry()).unwrap();

        let patches = vec![RegistryPatch {
            label: "import",
            marker: MARKER,
            probe: "import B from './B';".to_string(),
            insert: "import B from './B';\n".to_string(),
        }];

        apply_to_file(&path, &patches).unwrap();
        let after_first = fs::read_to_string(&path).unwrap();

        let records = apply_to_file(&path, &patches).unwrap();
        assert!(!records[0].applied);
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn apply_to_file_reports_missing_marker_with_file_hint() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Registry.tsx");
        fs::write(&path, "no markers\n").unwrap();

        let patches = vec![RegistryPatch {
            label: "import",
            marker: MARKER,
            probe: "probe".to_string(),
            insert: "insert".to_string(),
        }];

        let err = apply_to_file(&path, &patches).unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.marker_not_found");
        assert!(err.hints[0].message.contains("Registry.tsx"));
    }
}
