use drill_core::persistence::{load_stats, STATS_FILE_NAME};
use drill_core::{DrillConfig, DrillEngine, WordId};
use std::fs;
use std::path::Path;

fn write_lessons(dir: &Path) {
    fs::write(dir.join("animals.csv"), "gato;cat\nperro;dog\npájaro;bird\n").unwrap();
    fs::write(dir.join("food.csv"), "pan;bread;loaf\nagua;water\nleche;milk\n").unwrap();
}

fn config_for(dir: &Path) -> DrillConfig {
    DrillConfig {
        data_dir: dir.to_path_buf(),
        seed: Some(2024),
        ..DrillConfig::default()
    }
}

#[test]
fn stats_carry_over_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    write_lessons(dir.path());

    let mut engine = DrillEngine::from_config(&config_for(dir.path())).unwrap();
    assert_eq!(engine.vocabulary().len(), 13);

    let mut answered = Vec::new();
    for round in 0..30 {
        let word = engine.next_prompt().unwrap();
        let answer = if round % 3 == 0 { "no idea".to_string() } else { word.to[0].clone() };
        engine.submit(&word, &answer);
        answered.push(word.id);
    }
    engine.save_stats().unwrap();

    let saved = load_stats(dir.path());
    let total: u32 = saved.values().map(|s| s.total()).sum();
    assert_eq!(total, 30);
    assert_eq!(saved.values().map(|s| s.failure).sum::<u32>(), 10);

    let next = DrillEngine::from_config(&config_for(dir.path())).unwrap();
    for id in &answered {
        assert_eq!(next.vocabulary().stat(id), saved[id]);
    }
}

#[test]
fn prompts_never_repeat_within_the_window() {
    let dir = tempfile::tempdir().unwrap();
    write_lessons(dir.path());
    let config = config_for(dir.path());

    let mut engine = DrillEngine::from_config(&config).unwrap();
    let drawn: Vec<WordId> = (0..200).map(|_| engine.next_prompt().unwrap().id).collect();

    for window in drawn.windows(config.memory_capacity + 1) {
        let mut sorted = window.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), window.len());
    }
}

#[test]
fn single_lesson_file_keeps_stats_beside_it() {
    let dir = tempfile::tempdir().unwrap();
    write_lessons(dir.path());
    let config = DrillConfig {
        file: Some(dir.path().join("animals.csv")),
        ..config_for(Path::new("unused"))
    };

    let mut engine = DrillEngine::from_config(&config).unwrap();
    assert_eq!(engine.vocabulary().len(), 6);

    let word = engine.next_prompt().unwrap();
    let answer = word.to[0].to_uppercase();
    assert!(engine.submit(&word, &answer));
    engine.save_stats().unwrap();

    assert!(dir.path().join(STATS_FILE_NAME).exists());
    assert_eq!(load_stats(dir.path())[&word.id].success, 1);
}

#[test]
fn accents_are_optional_unless_strict() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("birds.csv"), "pájaro;bird\n").unwrap();
    let bird = WordId::new("bird", false);

    let mut lenient = DrillEngine::from_config(&config_for(dir.path())).unwrap();
    let word = lenient.vocabulary().word(&bird).cloned().unwrap();
    assert!(lenient.submit(&word, "pajaro"));

    let strict_config = DrillConfig {
        strict_accents: true,
        ..config_for(dir.path())
    };
    let mut strict = DrillEngine::from_config(&strict_config).unwrap();
    assert!(!strict.submit(&word, "pajaro"));
    assert!(strict.submit(&word, "PÁJARO"));
}
