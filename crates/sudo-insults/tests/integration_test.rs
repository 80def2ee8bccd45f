//! Integration tests for sudo-insults.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use sudo_insults::{
    Category, InsultsConfig, InsultsError, MockSource, Selection, Source, SudoInsults, Target,
};

const CLASSIC: &str = r#"/*
 * Insults from the original sudo(8).
 */
char *insults[] = {
    "Wrong!  You cheating scum!",
    "And you call yourself a Rocket Scientist!",
    "No soap, honkie-lips.",
    (char *) 0
};
"#;

const GOONS: &str = r#"char *insults[] = {
    "You silly, twisted boy you.",
#ifdef PC_INSULTS
    "He has fallen in the water!",
#else
    "He's fallen in the water!",
#endif
    "stty: erase ^H",
    (char *) 0
};
"#;

/// Helper to seed a cache directory with header files.
fn seeded_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to seed cache");
    }
    dir
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_classic_from_seeded_cache() {
    let dir = seeded_dir(&[("ins_classic.h", CLASSIC)]);
    let source = Arc::new(MockSource::new());
    let insults = SudoInsults::new(InsultsConfig::new(dir.path()))
        .with_shared_source(source.clone());

    let selection = Selection::parse("CLASSIC").unwrap();
    let report = insults.generate(&selection).expect("Generation failed");

    assert_eq!(source.request_count(), 0);
    assert_eq!(
        report.insults.iter().collect::<Vec<_>>(),
        vec![
            "Wrong!  You cheating scum!",
            "And you call yourself a Rocket Scientist!",
            "No soap, honkie-lips.",
        ]
    );

    let module = fs::read_to_string(dir.path().join("SudoInsults.py")).unwrap();
    let expected = "INSULTS = [\n    \"Wrong!  You cheating scum!\",\n    \
                    \"And you call yourself a Rocket Scientist!\",\n    \
                    \"No soap, honkie-lips.\",\n]\n";
    assert!(module.contains(expected), "module was:\n{}", module);
    assert!(dir.path().join("demo.py").is_file());
}

#[test]
fn test_fetches_missing_categories_in_order() {
    let dir = TempDir::new().unwrap();
    let source = Arc::new(
        MockSource::new()
            .with_file("ins_goons.h", GOONS)
            .with_file("ins_classic.h", CLASSIC),
    );
    let config = InsultsConfig::new(dir.path()).with_base_url("http://mirror.test/sudoers/");
    let insults = SudoInsults::new(config).with_shared_source(source.clone());

    let selection = Selection::parse("goons,classic").unwrap();
    let report = insults.generate(&selection).unwrap();

    assert_eq!(
        source.requests(),
        vec![
            "http://mirror.test/sudoers/ins_goons.h",
            "http://mirror.test/sudoers/ins_classic.h",
        ]
    );
    assert_eq!(report.insults.len(), 5);
    assert_eq!(report.insults.as_slice()[0], "You silly, twisted boy you.");
    assert_eq!(report.insults.as_slice()[1], "He's fallen in the water!");
    assert_eq!(
        report.per_category.iter().collect::<Vec<_>>(),
        vec![(&Category::Goons, &2), (&Category::Classic, &3)]
    );
    assert!(dir.path().join("ins_goons.h").is_file());
    assert!(dir.path().join("ins_classic.h").is_file());

    // Second run is served from disk.
    insults.generate(&selection).unwrap();
    assert_eq!(source.request_count(), 2);
}

#[test]
fn test_pc_mode_picks_pc_variant() {
    let dir = seeded_dir(&[("ins_goons.h", GOONS)]);
    let insults = SudoInsults::new(InsultsConfig::new(dir.path())).with_source(MockSource::new());

    let list = insults.collect(&Selection::parse("GOONS,PC").unwrap()).unwrap();

    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        vec!["You silly, twisted boy you.", "He has fallen in the water!"]
    );
}

#[test]
fn test_http_failure_aborts_before_generation() {
    let dir = seeded_dir(&[("ins_classic.h", CLASSIC)]);
    let insults = SudoInsults::new(InsultsConfig::new(dir.path())).with_source(MockSource::new());

    let err = insults
        .generate(&Selection::parse("CLASSIC,CSOPS").unwrap())
        .unwrap_err();

    assert!(matches!(err, InsultsError::Http { status: 404, .. }));
    assert!(!err.is_usage());
    assert!(!dir.path().join("SudoInsults.py").exists());
    assert!(!dir.path().join("demo.py").exists());
}

#[test]
fn test_separate_cache_and_output_dirs() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("cache")).unwrap();
    fs::write(root.path().join("cache").join("ins_classic.h"), CLASSIC).unwrap();

    let config = InsultsConfig::new(root.path())
        .with_cache_dir("cache")
        .with_output_dir("out")
        .with_target(Target::Rust);
    let report = SudoInsults::new(config)
        .with_source(MockSource::new())
        .generate(&Selection::parse("classic").unwrap())
        .unwrap();

    assert_eq!(report.files.module, root.path().join("out").join("sudo_insults.rs"));
    let module = fs::read_to_string(&report.files.module).unwrap();
    assert!(module.contains("    \"No soap, honkie-lips.\",\n"));
}

#[test]
fn test_accessor_semantics_match_module() {
    let dir = seeded_dir(&[("ins_classic.h", CLASSIC)]);
    let report = SudoInsults::new(InsultsConfig::new(dir.path()))
        .with_source(MockSource::new())
        .generate(&Selection::parse("CLASSIC").unwrap())
        .unwrap();

    for millis in [0u128, 1, 2, 3, 1_700_000_000_000] {
        let picked = report.insults.pick_at(millis).unwrap();
        assert_eq!(picked, report.insults.as_slice()[(millis % 3) as usize]);
    }
}

#[test]
fn test_source_trait_object() {
    let source: Box<dyn Source> = Box::new(MockSource::new().with_file("ins_2001.h", "x"));
    assert_eq!(source.fetch("http://x/ins_2001.h").unwrap(), b"x");
}
