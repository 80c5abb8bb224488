use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use tmgraph_cli::{Args, run};

/// Collects the grammar files directly inside a directory
fn collect_grammar_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Crate lives two levels below the workspace root")
        .join("demos")
}

/// Writes an empty config into `dir` so local and user config files are not picked up
fn empty_config(dir: &Path) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, "").expect("Failed to write config file");
    path.to_string_lossy().to_string()
}

fn args_for(source: &Path, output: &Path, config: &str) -> Args {
    Args {
        source: source.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: Some(config.to_string()),
        enable_regex: true,
        label_arrows: true,
        log_level: "off".to_string(),
        ..Args::default()
    }
}

fn output_name(prefix: &str, source: &Path) -> String {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{prefix}{name}.dot")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(temp_dir.path());

    let valid_demos = collect_grammar_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No demo grammars found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(output_name("", demo_path));

        if let Err(e) = run(&args_for(demo_path, &output_path, &config)) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let dot = fs::read_to_string(&output_path).expect("Failed to read output");
        assert!(
            dot.starts_with("digraph TextMate {\n") && dot.ends_with("}\n"),
            "{} produced a malformed graph:\n{dot}",
            demo_path.display()
        );
        assert!(
            dot.contains("  \"$self\" -> "),
            "{} has no edges from $self",
            demo_path.display()
        );
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(temp_dir.path());

    let error_demos = collect_grammar_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(output_name("error_", demo_path));

        if run(&args_for(demo_path, &output_path, &config)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} wrote a partial graph",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_json_demo_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("json.dot");
    let config = empty_config(temp_dir.path());

    let args = Args {
        source: demos_dir()
            .join("json.tmLanguage.json")
            .to_string_lossy()
            .to_string(),
        output: Some(output_path.to_string_lossy().to_string()),
        exclude: vec!["value".to_string()],
        config: Some(config),
        log_level: "off".to_string(),
        ..Args::default()
    };

    run(&args).expect("Failed to graph the JSON demo");

    let dot = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(
        dot,
        "digraph TextMate {\n\
         \x20 \"object\" -> \"string\";\n\
         }\n"
    );
}

#[test]
fn e2e_missing_source_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        source: "demos/does-not-exist.json".to_string(),
        config: Some(empty_config(temp_dir.path())),
        log_level: "off".to_string(),
        ..Args::default()
    };

    assert!(run(&args).is_err());
}

#[test]
fn e2e_explicit_config_overrides_discovery() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("labels.toml");
    fs::write(&config_path, "[graph]\nlabel-arrows = true\nexclude = [\"value\"]\n")
        .expect("Failed to write config file");
    let output_path = temp_dir.path().join("json.dot");

    let args = Args {
        source: demos_dir()
            .join("json.tmLanguage.json")
            .to_string_lossy()
            .to_string(),
        output: Some(output_path.to_string_lossy().to_string()),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
        ..Args::default()
    };

    run(&args).expect("Failed to graph the JSON demo");

    let dot = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(
        dot,
        "digraph TextMate {\n  \"object\" -> \"string\"[label=\"include\"];\n}\n"
    );
}
