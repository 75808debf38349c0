use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

use strata::builder::{BuildOptions, build_graph};

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn cached_options(cache_dir: &Path) -> BuildOptions {
    BuildOptions {
        cache_dir: Some(cache_dir.to_path_buf()),
        ..BuildOptions::default()
    }
}

fn build(root: &Path, options: &BuildOptions) -> strata::ImportGraph {
    build_graph(&["foo".to_owned()], &[root.to_path_buf()], options).unwrap()
}

fn data_files(cache_dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(cache_dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".data.json"))
        })
        .collect()
}

/// Replace the cached imports of one module with a sentinel, so a subsequent
/// build reveals whether the cache or the scanner supplied the imports.
fn plant_sentinel(cache_dir: &Path, module: &str) {
    for data_file in data_files(cache_dir) {
        let mut value: Value =
            serde_json::from_str(&fs::read_to_string(&data_file).unwrap()).unwrap();
        value[module] = serde_json::json!([["foo.sentinel", 1, "import foo.sentinel"]]);
        fs::write(&data_file, serde_json::to_string(&value).unwrap()).unwrap();
    }
}

#[test]
fn test_cached_imports_are_reused_when_mtimes_match() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src");
    let cache_dir = tmp.path().join("cache");
    write(&root.join("foo/__init__.py"), "");
    write(&root.join("foo/one.py"), "import foo.two\n");
    write(&root.join("foo/two.py"), "");
    write(&root.join("foo/sentinel.py"), "");

    build(&root, &cached_options(&cache_dir));
    plant_sentinel(&cache_dir, "foo.one");

    // Nothing on disk changed, so foo.one's imports come from the cache.
    let graph = build(&root, &cached_options(&cache_dir));
    assert!(
        graph
            .direct_import_exists("foo.one", "foo.sentinel", false)
            .unwrap()
    );
    assert!(!graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
}

#[test]
fn test_modified_module_is_rescanned() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src");
    let cache_dir = tmp.path().join("cache");
    write(&root.join("foo/__init__.py"), "");
    write(&root.join("foo/one.py"), "import foo.two\n");
    write(&root.join("foo/two.py"), "");
    write(&root.join("foo/three.py"), "import foo.two\n");
    write(&root.join("foo/sentinel.py"), "");

    build(&root, &cached_options(&cache_dir));
    plant_sentinel(&cache_dir, "foo.one");
    plant_sentinel(&cache_dir, "foo.three");

    // Rewriting foo.one bumps its mtime: it alone is rescanned, while
    // foo.three still comes back from the cache.
    std::thread::sleep(std::time::Duration::from_millis(20));
    write(&root.join("foo/one.py"), "import foo.two\n");

    let graph = build(&root, &cached_options(&cache_dir));
    assert!(graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
    assert!(
        !graph
            .direct_import_exists("foo.one", "foo.sentinel", false)
            .unwrap()
    );
    assert!(
        graph
            .direct_import_exists("foo.three", "foo.sentinel", false)
            .unwrap()
    );
}

#[test]
fn test_scan_flags_key_separate_cache_entries() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src");
    let cache_dir = tmp.path().join("cache");
    write(&root.join("foo/__init__.py"), "");
    write(&root.join("foo/one.py"), "import externalone\n");

    build(&root, &cached_options(&cache_dir));
    assert_eq!(data_files(&cache_dir).len(), 1);

    // A build with external packages reads and writes its own data file.
    let external = BuildOptions {
        include_external_packages: true,
        ..cached_options(&cache_dir)
    };
    let graph = build(&root, &external);
    assert!(graph.contains_module("externalone"));
    assert_eq!(data_files(&cache_dir).len(), 2);
}

#[test]
fn test_marker_files_are_created() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src");
    let cache_dir = tmp.path().join("cache");
    write(&root.join("foo/__init__.py"), "");

    build(&root, &cached_options(&cache_dir));

    assert_eq!(
        fs::read_to_string(cache_dir.join(".gitignore")).unwrap(),
        "# Automatically created\n*"
    );
    let cachedir_tag = fs::read_to_string(cache_dir.join("CACHEDIR.TAG")).unwrap();
    assert!(cachedir_tag.starts_with("Signature: 8a477f597d28d172789f06886806bc55"));
}

#[test]
fn test_corrupt_cache_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src");
    let cache_dir = tmp.path().join("cache");
    write(&root.join("foo/__init__.py"), "");
    write(&root.join("foo/one.py"), "import foo.two\n");
    write(&root.join("foo/two.py"), "");

    build(&root, &cached_options(&cache_dir));
    for data_file in data_files(&cache_dir) {
        fs::write(&data_file, "{corrupt").unwrap();
    }

    // The build falls back to scanning and repairs the cache.
    let graph = build(&root, &cached_options(&cache_dir));
    assert!(graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
}

#[test]
fn test_meta_file_is_written_per_package() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src");
    let cache_dir = tmp.path().join("cache");
    write(&root.join("foo/__init__.py"), "");
    write(&root.join("foo/one.py"), "");

    build(&root, &cached_options(&cache_dir));

    let meta: Value =
        serde_json::from_str(&fs::read_to_string(cache_dir.join("foo.meta.json")).unwrap())
            .unwrap();
    let modules: Vec<&String> = meta.as_object().unwrap().keys().collect();
    assert_eq!(modules.len(), 2);
    assert!(meta["foo.one"].is_f64());
}
