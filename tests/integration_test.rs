use crictab::corpus::FailurePolicy;
use crictab::driver::{self, DriverArgs};
use crictab::project::{DELIVERY_COLUMNS, GAME_COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn source(filename: &str) -> PathBuf {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push(filename);
    path
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap()
        .records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

struct Run {
    dir: TempDir,
}

impl Run {
    fn new(files: &[&str]) -> Run {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("all")).unwrap();
        for f in files {
            fs::copy(source(&format!("sample-data/{f}")), dir.path().join("all").join(f)).unwrap();
        }
        Run { dir }
    }

    fn add(&self, name: &str, text: &str) {
        fs::write(self.dir.path().join("all").join(name), text).unwrap();
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn convert(&self, policy: FailurePolicy) -> driver::Summary {
        let indir = self.path("all");
        let games = self.path("games.csv");
        let deliveries = self.path("deliveries.csv");
        let args = DriverArgs {
            indir: &indir,
            games_out: &games,
            deliveries_out: &deliveries,
            suffix: "yaml",
            policy,
        };
        driver::convert(&args).unwrap()
    }
}

#[test]
fn test_sample_data() {
    init();
    let run = Run::new(&["1000887.yaml", "63963.yaml"]);
    let summary = run.convert(FailurePolicy::Skip);
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.game_rows, 2);
    assert_eq!(summary.delivery_rows, 7);
    assert!(summary.failures.is_empty());
    assert_eq!(
        read_csv(&run.path("games.csv")),
        read_csv(&source("integration-test/expected/games.csv"))
    );
    assert_eq!(
        read_csv(&run.path("deliveries.csv")),
        read_csv(&source("integration-test/expected/deliveries.csv"))
    );
}

#[test]
fn test_malformed_document_skipped() {
    init();
    let run = Run::new(&["1000887.yaml"]);
    run.add("broken.yaml", "info:\n  teams: [A, B]\n  attendance: 20000\n");
    let summary = run.convert(FailurePolicy::Skip);
    assert_eq!(summary.documents, 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].file.ends_with("broken.yaml"));
    let games = read_csv(&run.path("games.csv"));
    assert_eq!(games.len(), 2);
    assert_eq!(games[1][0], "1000887");
    let deliveries = read_csv(&run.path("deliveries.csv"));
    assert_eq!(deliveries.len(), 6);
    assert!(deliveries[1..].iter().all(|r| r[0] == "1000887"));
}

#[test]
fn test_malformed_document_placeholder() {
    init();
    let run = Run::new(&["1000887.yaml"]);
    run.add("broken.yaml", "info: [not, a, mapping]\n");
    let summary = run.convert(FailurePolicy::Placeholder);
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.failures.len(), 1);
    let games = read_csv(&run.path("games.csv"));
    assert_eq!(games.len(), 3);
    assert_eq!(games[2][0], "broken");
    assert_eq!(games[2][5], "0");
    assert_eq!(games[2][1], "");
    assert_eq!(read_csv(&run.path("deliveries.csv")).len(), 6);
}

#[test]
fn test_empty_corpus() {
    init();
    let run = Run::new(&[]);
    run.add("notes.txt", "nothing to see");
    let summary = run.convert(FailurePolicy::Skip);
    assert_eq!(summary.documents, 0);
    assert_eq!(summary.game_rows, 0);
    assert_eq!(summary.delivery_rows, 0);
    assert_eq!(read_csv(&run.path("games.csv")), [GAME_COLUMNS.to_vec()]);
    assert_eq!(
        read_csv(&run.path("deliveries.csv")),
        [DELIVERY_COLUMNS.to_vec()]
    );
}

#[test]
fn test_unwritable_output() {
    init();
    let run = Run::new(&["63963.yaml"]);
    let indir = run.path("all");
    let games = run.path("missing/games.csv");
    let deliveries = run.path("deliveries.csv");
    let args = DriverArgs {
        indir: &indir,
        games_out: &games,
        deliveries_out: &deliveries,
        suffix: "yaml",
        policy: FailurePolicy::Skip,
    };
    assert!(driver::convert(&args).is_err());
}
