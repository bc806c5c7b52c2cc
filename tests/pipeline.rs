use std::path::{Path, PathBuf};

use catdialects::{
    dialects::Dialect,
    error::Error,
    identifiers::{Identification, Identifier, LanguageGate},
    io::writer::DialectFiles,
    pipelines::{dispatch::sentence_id, DialectPipeline, Models, Pipeline},
    segmentation::UnicodeSegmenter,
    stats::DialectStats,
};
use tempfile::tempdir;

mod common;
use common::{file_names, models, read_records, tagger, KeywordIdentifier};

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn run(src: &Path, dst: &Path) -> Result<DialectStats, Error> {
    let models = models();
    DialectPipeline::new(src.to_path_buf(), dst.to_path_buf(), &models).run()
}

#[test_log::test]
fn one_sentence_per_dialect() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "corpus.jsonl",
        r#"{"text": "Aquest llibre és molt bo. Vull que me diguis veritat. Es llibre és damunt sa taula."}
{"text": ""}
"#,
    );
    let dst = dir.path().join("out");

    let stats = run(&src, &dst).unwrap();
    assert_eq!(stats.central, 1);
    assert_eq!(stats.valencian, 1);
    assert_eq!(stats.balearic, 1);
    assert_eq!(stats.unknown, 0);

    let file = src.to_string_lossy();
    let expected = [
        (Dialect::Central, 0, "Aquest llibre és molt bo."),
        (Dialect::Valencian, 1, "Vull que me diguis veritat."),
        (Dialect::Balearic, 2, "Es llibre és damunt sa taula."),
    ];
    for (dialect, sentence_idx, text) in expected {
        let records = read_records(&DialectFiles::path_for(&dst, "corpus", dialect.as_str()));
        assert_eq!(records.len(), 1, "{dialect}");
        assert_eq!(records[0].id, sentence_id(&file, 0, sentence_idx));
        assert_eq!(records[0].text, text);
    }

    assert_eq!(
        file_names(&dst),
        vec![
            "corpus_balearic.jsonl",
            "corpus_central.jsonl",
            "corpus_stats.json",
            "corpus_valencian.jsonl",
        ]
    );
}

#[test]
fn stats_file_format() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "corpus.jsonl",
        "{\"text\": \"Aquest llibre és molt bo. Aquell dia va ploure.\"}\n",
    );
    let dst = dir.path().join("out");
    run(&src, &dst).unwrap();

    let stats = std::fs::read_to_string(dst.join("corpus_stats.json")).unwrap();
    assert_eq!(
        stats,
        "{\n    \"central\": 2,\n    \"valencian\": 0,\n    \"balearic\": 0,\n    \"unknown\": 0\n}"
    );
}

#[test]
fn empty_input_creates_dialect_files() {
    let dir = tempdir().unwrap();
    let src = write_input(dir.path(), "empty.jsonl", "");
    let dst = dir.path().join("out");

    let stats = run(&src, &dst).unwrap();
    assert_eq!(stats, DialectStats::default());

    for dialect in Dialect::KNOWN {
        let path = DialectFiles::path_for(&dst, "empty", dialect.as_str());
        assert!(path.exists(), "{:?} should exist", path);
        assert!(read_records(&path).is_empty());
    }
}

#[test]
fn non_catalan_sentences_are_dropped() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "mixed.jsonl",
        "{\"text\": \"Hello, how are you? Potser plourà demà. Bon dia a tothom.\"}\n",
    );
    let dst = dir.path().join("out");

    let stats = run(&src, &dst).unwrap();
    // only the last sentence passes the gate, and has no dialect marker
    assert_eq!(stats.total(), 1);
    assert_eq!(stats.unknown, 1);

    let records = read_records(&DialectFiles::path_for(&dst, "mixed", "ca"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, sentence_id(&src.to_string_lossy(), 0, 2));
    assert_eq!(records[0].text, "Bon dia a tothom.");

    for dialect in Dialect::KNOWN {
        let path = DialectFiles::path_for(&dst, "mixed", dialect.as_str());
        assert!(read_records(&path).is_empty());
    }
    assert!(!DialectFiles::path_for(&dst, "mixed", "en").exists());
}

#[test]
fn malformed_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "broken.jsonl",
        "{\"text\": \"Aquest llibre és bo.\"}\nnot json at all\n{\"text\": \"Aquell dia va ploure.\"}\n",
    );
    let dst = dir.path().join("out");

    let stats = run(&src, &dst).unwrap();
    assert_eq!(stats.central, 2);

    let ids: Vec<String> = read_records(&DialectFiles::path_for(&dst, "broken", "central"))
        .into_iter()
        .map(|record| record.id)
        .collect();
    // the bad line still consumes its record number
    let file = src.to_string_lossy();
    assert_eq!(
        ids,
        vec![sentence_id(&file, 0, 0), sentence_id(&file, 2, 0)]
    );
}

#[test]
fn unsupported_extension() {
    let dir = tempdir().unwrap();
    let src = write_input(dir.path(), "corpus.txt", "Aquest llibre és bo.\n");
    let dst = dir.path().join("out");

    let err = run(&src, &dst).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "Unsupported file type: .txt");
    assert!(!dst.exists());
}

#[test]
fn missing_input() {
    let dir = tempdir().unwrap();
    let dst = dir.path().join("out");

    assert!(run(&dir.path().join("nope.jsonl"), &dst).is_err());
    assert!(!dst.exists());
}

#[test]
fn reruns_are_identical() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "corpus.jsonl",
        r#"{"text": "Aquest llibre és molt bo. Vull que me diguis veritat."}
{"text": "Es llibre és damunt sa taula. Bon dia a tothom."}
"#,
    );
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    let stats_first = run(&src, &first).unwrap();
    let stats_second = run(&src, &second).unwrap();
    assert_eq!(stats_first, stats_second);

    let names = file_names(&first);
    assert_eq!(names, file_names(&second));
    for name in names {
        let a = std::fs::read(first.join(&name)).unwrap();
        let b = std::fs::read(second.join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs");
    }

    // running again in place overwrites instead of appending
    run(&src, &first).unwrap();
    assert_eq!(
        read_records(&DialectFiles::path_for(&first, "corpus", "central")).len(),
        1
    );
}

#[test]
fn stats_match_output_lines() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "corpus.jsonl",
        r#"{"text": "Aquest llibre és molt bo. Vull que me diguis veritat. Hello there."}
{"content": "Es llibre és damunt sa taula. Bon dia a tothom. Jo preferisc anar-hi."}
{"text": "Potser plourà demà."}
"#,
    );
    let dst = dir.path().join("out");
    let stats = run(&src, &dst).unwrap();

    for dialect in Dialect::KNOWN {
        let lines = read_records(&DialectFiles::path_for(&dst, "corpus", dialect.as_str()));
        assert_eq!(lines.len() as u64, stats.get(dialect), "{dialect}");
    }
    let unknown_lines = read_records(&DialectFiles::path_for(&dst, "corpus", "ca"));
    assert_eq!(unknown_lines.len() as u64, stats.unknown);
    assert_eq!(stats.total(), 5);
}

#[test]
fn ids_carry_input_path() {
    let dir = tempdir().unwrap();
    let input_dir = dir.path().join("in");
    std::fs::create_dir(&input_dir).unwrap();
    let src = write_input(
        &input_dir,
        "corpus.jsonl",
        "{\"text\": \"Aquest llibre és bo.\"}\n",
    );
    let dst = dir.path().join("out");
    run(&src, &dst).unwrap();

    let records = read_records(&DialectFiles::path_for(&dst, "corpus", "central"));
    assert_eq!(
        records[0].id,
        format!("{}::doc0::sent0", input_dir.join("corpus.jsonl").display())
    );
}

/// Fails on sentences holding a given word, delegates otherwise.
struct FailingOn(&'static str);

impl Identifier for FailingOn {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        if sentence.contains(self.0) {
            Err(Error::FastText(format!("cannot identify {sentence:?}")))
        } else {
            KeywordIdentifier.identify(sentence)
        }
    }
}

#[test]
fn model_error_still_saves_stats() {
    let dir = tempdir().unwrap();
    let src = write_input(
        dir.path(),
        "corpus.jsonl",
        r#"{"text": "Aquest llibre és bo."}
{"text": "Aquell dia va ploure. Aquell error greu."}
{"text": "Aquell home no ho sap."}
"#,
    );
    let dst = dir.path().join("out");

    let models = Models::new(
        FailingOn("error"),
        UnicodeSegmenter,
        tagger(),
        LanguageGate::catalan(),
    );
    let result = DialectPipeline::new(src.clone(), dst.clone(), &models).run();
    assert!(matches!(result, Err(Error::FastText(_))));

    for dialect in Dialect::KNOWN {
        let path = DialectFiles::path_for(&dst, "corpus", dialect.as_str());
        assert!(path.exists(), "{:?} should exist", path);
    }

    // counts up to the failing sentence
    let stats: DialectStats =
        serde_json::from_str(&std::fs::read_to_string(dst.join("corpus_stats.json")).unwrap())
            .unwrap();
    assert_eq!(stats.central, 2);
    assert_eq!(stats.total(), 2);

    let file = src.to_string_lossy();
    let ids: Vec<String> = read_records(&DialectFiles::path_for(&dst, "corpus", "central"))
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, vec![sentence_id(&file, 0, 0), sentence_id(&file, 1, 0)]);
}
