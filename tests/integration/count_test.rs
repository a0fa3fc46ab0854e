use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn stdout_lines(root: &Path, entry: &str) -> Vec<String> {
    let output = Command::cargo_bin("count-lines")
        .unwrap()
        .current_dir(root)
        .env_remove("RUST_LOG")
        .arg(entry)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn main_and_util_total_fifteen() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "main.ts", "import {x} from './util'\n\n\n\n");
    write(tmp.path(), "util.ts", &"\n".repeat(9));

    let root = tmp.path().canonicalize().unwrap();
    let lines = stdout_lines(&root, "main.ts");
    let util = root.join("util.ts");
    assert_eq!(lines, vec![util.display().to_string(), "15".to_string()]);
}

#[test]
fn absolute_entry_path() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "main.ts", "one\ntwo");
    let entry = tmp.path().join("main.ts");

    Command::cargo_bin("count-lines")
        .unwrap()
        .arg(&entry)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn relative_entry_with_parent_components() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "src/app.ts", "import './lib/helper.js';\n");
    write(tmp.path(), "src/lib/helper.ts", "a\nb\nc");
    fs::create_dir_all(tmp.path().join("build")).unwrap();

    let root = tmp.path().canonicalize().unwrap();
    let lines = stdout_lines(&root.join("build"), "../src/./app.ts");
    let helper = root.join("src").join("lib").join("helper.ts");
    assert_eq!(lines, vec![helper.display().to_string(), "5".to_string()]);
}

#[test]
fn cycle_terminates() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "a.ts", "import { b } from './b';\n");
    write(tmp.path(), "b.ts", "import { a } from './a';\n");

    let root = tmp.path().canonicalize().unwrap();
    let lines = stdout_lines(&root, "a.ts");
    let path = |n: &str| root.join(n).display().to_string();
    assert_eq!(lines, vec![path("b.ts"), path("a.ts"), "4".to_string()]);
}

#[test]
fn diamond_lists_each_file_once() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "a.ts", "import './b';\nimport './c';");
    write(tmp.path(), "b.ts", "import './d';");
    write(tmp.path(), "c.ts", "import './d';");
    write(tmp.path(), "d.ts", "1\n2\n3\n4");

    let root = tmp.path().canonicalize().unwrap();
    let lines = stdout_lines(&root, "a.ts");
    let path = |n: &str| root.join(n).display().to_string();
    assert_eq!(
        lines,
        vec![path("b.ts"), path("d.ts"), path("c.ts"), "8".to_string()]
    );
}

#[test]
fn external_packages_are_not_followed() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "main.ts",
        "import express from 'express';\nimport { z } from \"zod\";\nconst m = import('lodash');",
    );

    Command::cargo_bin("count-lines")
        .unwrap()
        .current_dir(tmp.path())
        .arg("main.ts")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn unresolved_relative_import_is_silent() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "main.ts", "import { gone } from './gone';\n");

    Command::cargo_bin("count-lines")
        .unwrap()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .arg("main.ts")
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn index_files_are_probed() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "main.ts", "import { w } from './widgets';");
    write(tmp.path(), "widgets/index.ts", "export const w = 1;\n");
    write(tmp.path(), "widgets/index.js", "module.exports = {};\n\n\n");

    let root = tmp.path().canonicalize().unwrap();
    let lines = stdout_lines(&root, "main.ts");
    let index = root.join("widgets").join("index.ts");
    assert_eq!(lines, vec![index.display().to_string(), "3".to_string()]);
}
