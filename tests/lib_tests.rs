use encdet::FileType;
use encdet::classify::{detect_extension, detect_mime, encoding_label};
use encdet::exclude::ExclusionMatcher;
use encdet::pathset::{PathRelation, PathSet, path_compare};
use regex::Regex;
use std::path::{Path, PathBuf};

// --- path_compare ---

#[test]
fn test_compare_equal() {
    assert_eq!(
        path_compare(Path::new("/a/b"), Path::new("/a/b")),
        PathRelation::Equal
    );
}

#[test]
fn test_compare_contains() {
    assert_eq!(
        path_compare(Path::new("/a"), Path::new("/a/b/c")),
        PathRelation::Contains
    );
}

#[test]
fn test_compare_contained_by() {
    assert_eq!(
        path_compare(Path::new("/a/b/c"), Path::new("/a")),
        PathRelation::ContainedBy
    );
}

#[test]
fn test_compare_unrelated() {
    assert_eq!(
        path_compare(Path::new("/a/b"), Path::new("/a/c")),
        PathRelation::Unrelated
    );
    assert_eq!(
        path_compare(Path::new("/x"), Path::new("/y")),
        PathRelation::Unrelated
    );
}

#[test]
fn test_compare_segment_not_string_prefix() {
    // "/a/bc" starts with "/a/b" as a string, but not as components.
    assert_eq!(
        path_compare(Path::new("/a/b"), Path::new("/a/bc")),
        PathRelation::Unrelated
    );
}

#[test]
fn test_compare_reflexive_and_dual() {
    let paths = ["/", "/a", "/a/b", "/a/b/c", "/c", "/c/d"];
    for a in &paths {
        assert_eq!(
            path_compare(Path::new(a), Path::new(a)),
            PathRelation::Equal
        );
        for b in &paths {
            let fwd = path_compare(Path::new(a), Path::new(b));
            let rev = path_compare(Path::new(b), Path::new(a));
            let expected = match fwd {
                PathRelation::Equal => PathRelation::Equal,
                PathRelation::Contains => PathRelation::ContainedBy,
                PathRelation::ContainedBy => PathRelation::Contains,
                PathRelation::Unrelated => PathRelation::Unrelated,
            };
            assert_eq!(rev, expected, "duality violated for {a} vs {b}");
        }
    }
}

// --- PathSet::merge ---

fn merged(paths: &[&str]) -> Vec<PathBuf> {
    let mut set: Vec<PathBuf> = paths
        .iter()
        .map(|p| PathBuf::from(*p))
        .collect::<PathSet>()
        .roots()
        .to_vec();
    set.sort();
    set
}

#[test]
fn test_merge_child_is_redundant() {
    assert_eq!(
        merged(&["/a", "/a/b", "/c"]),
        vec![PathBuf::from("/a"), PathBuf::from("/c")]
    );
}

#[test]
fn test_merge_duplicate_is_redundant() {
    assert_eq!(merged(&["/a", "/a"]), vec![PathBuf::from("/a")]);
}

#[test]
fn test_merge_parent_supersedes() {
    assert_eq!(merged(&["/a/b", "/a"]), vec![PathBuf::from("/a")]);
}

#[test]
fn test_merge_parent_absorbs_multiple() {
    assert_eq!(
        merged(&["/a/b", "/a/c", "/d", "/a"]),
        vec![PathBuf::from("/a"), PathBuf::from("/d")]
    );
}

#[test]
fn test_merge_order_independent() {
    let inputs = ["/a", "/a/b", "/a/b/c", "/d/e", "/d", "/f"];
    let expected = merged(&inputs);

    // Exhaustive permutations via Heap's algorithm.
    fn permutations(items: &mut Vec<&str>, k: usize, out: &mut Vec<Vec<String>>) {
        if k <= 1 {
            out.push(items.iter().map(|s| s.to_string()).collect());
            return;
        }
        for i in 0..k {
            permutations(items, k - 1, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
    }
    let mut items: Vec<&str> = inputs.to_vec();
    let len = items.len();
    let mut perms = Vec::new();
    permutations(&mut items, len, &mut perms);

    for perm in perms {
        let mut set = PathSet::new();
        for p in &perm {
            set.merge(PathBuf::from(p));
        }
        let mut roots = set.roots().to_vec();
        roots.sort();
        assert_eq!(roots, expected, "order dependence for {perm:?}");
    }
}

#[test]
fn test_pathset_invariant_no_containment() {
    let set: PathSet = ["/a/b", "/c", "/a", "/c/d/e", "/f/g"]
        .iter()
        .map(|p| PathBuf::from(*p))
        .collect();
    let roots = set.roots();
    for (i, a) in roots.iter().enumerate() {
        for (j, b) in roots.iter().enumerate() {
            if i != j {
                assert_eq!(path_compare(a, b), PathRelation::Unrelated);
            }
        }
    }
}

// --- ExclusionMatcher ---

#[test]
fn test_matcher_no_rules_scans_everything() {
    let m = ExclusionMatcher::default();
    assert!(m.is_empty());
    assert!(m.needs_scan(Path::new("/anything/at/all")));
}

#[test]
fn test_matcher_prefix_excludes_self_and_descendants() {
    let m = ExclusionMatcher::new(vec![PathBuf::from("/a/b")], vec![]);
    assert!(!m.needs_scan(Path::new("/a/b")));
    assert!(!m.needs_scan(Path::new("/a/b/c.js")));
    assert!(!m.needs_scan(Path::new("/a/b/deep/nested/file")));
    assert!(m.needs_scan(Path::new("/a")));
    assert!(m.needs_scan(Path::new("/a/c")));
    assert!(m.needs_scan(Path::new("/a/bc")));
}

#[test]
fn test_matcher_regex_excludes_on_string_form() {
    let m = ExclusionMatcher::new(vec![], vec![Regex::new(r"/tmp/").unwrap()]);
    assert!(!m.needs_scan(Path::new("/tmp/scratch/x.js")));
    assert!(m.needs_scan(Path::new("/home/user/x.js")));
}

#[test]
fn test_matcher_prefix_and_regex_combined() {
    let m = ExclusionMatcher::new(
        vec![PathBuf::from("/var/cache")],
        vec![Regex::new(r"\.min\.js$").unwrap()],
    );
    assert!(!m.needs_scan(Path::new("/var/cache/pkg")));
    assert!(!m.needs_scan(Path::new("/srv/app/lib.min.js")));
    assert!(m.needs_scan(Path::new("/srv/app/lib.js")));
}

// --- extension / MIME tables ---

#[test]
fn test_detect_extension_known_types() {
    assert_eq!(detect_extension(Path::new("/x/main.cpp")), FileType::C);
    assert_eq!(detect_extension(Path::new("/x/mod.pm")), FileType::Perl);
    assert_eq!(detect_extension(Path::new("/x/app.js")), FileType::Javascript);
    assert_eq!(detect_extension(Path::new("/x/conf.d.conf")), FileType::Ini);
    assert_eq!(detect_extension(Path::new("/x/index.htm")), FileType::Html);
    assert_eq!(detect_extension(Path::new("/x/setup.nsh")), FileType::Nsi);
    assert_eq!(detect_extension(Path::new("/x/notes.txt")), FileType::Text);
}

#[test]
fn test_detect_extension_case_insensitive() {
    assert_eq!(detect_extension(Path::new("/x/APP.JS")), FileType::Javascript);
}

#[test]
fn test_detect_extension_unknown_or_missing() {
    assert_eq!(detect_extension(Path::new("/x/archive.tar")), FileType::Other);
    assert_eq!(detect_extension(Path::new("/x/Makefile")), FileType::Other);
}

#[test]
fn test_detect_mime_prefixes() {
    assert_eq!(detect_mime("text/x-python"), FileType::Python);
    assert_eq!(detect_mime("text/x-shellscript"), FileType::Shell);
    assert_eq!(detect_mime("text/html; charset=utf-8"), FileType::Html);
    assert_eq!(detect_mime("text/plain"), FileType::Text);
    assert_eq!(detect_mime("application/octet-stream"), FileType::Other);
}

// --- encoding_label ---

#[test]
fn test_encoding_label_utf8_bom_split() {
    assert_eq!(
        encoding_label("utf-8", "Unicode text, UTF-8 (with BOM) text"),
        "utf-8 with BOM"
    );
    assert_eq!(encoding_label("utf-8", "ASCII text"), "utf-8 no BOM");
}

#[test]
fn test_encoding_label_passthrough() {
    assert_eq!(encoding_label("iso-8859-1", "ISO-8859 text"), "iso-8859-1");
    assert_eq!(encoding_label("us-ascii\n", "ASCII text"), "us-ascii");
}

// --- FileType tags ---

#[test]
fn test_file_type_tag_round_trip() {
    for tag in [
        "c",
        "perl",
        "java",
        "javascript",
        "php",
        "python",
        "ruby",
        "shell",
        "patch",
        "ini",
        "css",
        "tpl",
        "html",
        "xml",
        "json",
        "text",
        "lua",
        "nsi",
        "other",
    ] {
        let ft = FileType::from_tag(tag).expect("known tag");
        assert_eq!(ft.as_str(), tag);
    }
    assert!(FileType::from_tag("golang").is_none());
}
