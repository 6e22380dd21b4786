//! Loading pools and solver settings from JSON.

#![cfg(feature = "serde")]

use u_timetable::fitness::PreferenceMode;
use u_timetable::pool::CoursePool;
use u_timetable::timetable::{Algorithm, Solver, SolverConfig};

#[test]
fn pool_from_json_sorts_keys() {
    let json = r#"{
        "B": [["Mon1"], ["Wed2"]],
        "A": [["Mon1"], ["Tue1"]]
    }"#;
    let pool: CoursePool = serde_json::from_str(json).unwrap();

    assert_eq!(pool.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(pool.course(1).options().len(), 2);
}

#[test]
fn pool_from_json_rejects_bad_tokens() {
    let json = r#"{ "A": [["Xyz1"]] }"#;
    let err = serde_json::from_str::<CoursePool>(json).unwrap_err();
    assert!(err.to_string().contains("Xyz1"));
}

#[test]
fn pool_from_json_rejects_course_without_sections() {
    let json = r#"{ "A": [] }"#;
    assert!(serde_json::from_str::<CoursePool>(json).is_err());
}

#[test]
fn solver_config_fills_missing_fields() {
    let json = r#"{
        "algorithm": "Hybrid",
        "preference": "Cram",
        "ga": { "max_generations": 40, "seed": 3 },
        "hybrid": {}
    }"#;
    let config: SolverConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.algorithm, Algorithm::Hybrid);
    assert_eq!(config.preference, PreferenceMode::Cram);
    assert_eq!(config.ga.max_generations, 40);
    assert_eq!(config.ga.seed, Some(3));
    assert_eq!(config.ga.population_size, 20);
    assert!((config.ga.mutation_rate - 0.1).abs() < 1e-12);
    assert!((config.hybrid.ga.mutation_rate - 0.3).abs() < 1e-12);
    assert_eq!(config.sa.seed, None);
}

#[test]
fn partial_hybrid_section_keeps_hybrid_defaults() {
    let json = r#"{
        "algorithm": "Hybrid",
        "hybrid": { "ga": { "max_generations": 40, "seed": 3 } }
    }"#;
    let config: SolverConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.hybrid.ga.max_generations, 40);
    assert_eq!(config.hybrid.ga.seed, Some(3));
    assert_eq!(config.hybrid.ga.population_size, 20);
    assert!((config.hybrid.ga.mutation_rate - 0.3).abs() < 1e-12);
}

#[test]
fn json_round_trip_solves() {
    let pool: CoursePool =
        serde_json::from_str(r#"{ "A": [["월1"], ["화1"]], "B": [["월1"], ["수2"]] }"#).unwrap();
    let config = SolverConfig::new(Algorithm::Genetic, PreferenceMode::None).with_seed(11);
    let text = serde_json::to_string(&config).unwrap();
    let restored: SolverConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, config);

    let solution = Solver::new(&pool, restored).solve().unwrap();
    assert_eq!(solution.score, 0);
}
