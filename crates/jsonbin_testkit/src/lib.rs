//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static SCRATCH_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Return a fresh, not-yet-existing file path under `<target>/jsonbin-scratch`.
///
/// Paths are unique per process and call, so parallel tests never share a file.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("jsonbin-scratch");
	fs::create_dir_all(&dir).expect("scratch dir is creatable");

	let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
	let path = dir.join(format!("{}-{seq}-{name}", std::process::id()));
	let _ = fs::remove_file(&path);
	path
}

/// A small document touching every wire kind that survives the JSON bridge.
pub fn sample_json() -> serde_json::Value {
	serde_json::json!({
		"name": "sample",
		"version": 3,
		"ratio": 2.5,
		"enabled": true,
		"tags": ["a", "bb", "ccc"],
		"nested": {
			"empty_object": {},
			"empty_array": [],
			"unicode": "h\u{e9}llo \u{1F600}",
			"negative": -17
		}
	})
}
