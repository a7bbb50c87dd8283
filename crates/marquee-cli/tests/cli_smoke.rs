//! Smoke tests for the `marquee` binary.
//!
//! Each test writes a catalog fixture into a temp directory, runs the
//! compiled binary against it, and checks the output payloads.

use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "marquee-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const FIXTURE: &str = r#"[
    {"id": 1, "title": "The Prison Break", "director": "Frank Hollis",
     "year": 1994, "genre": "Drama",
     "description": "Two men plan an escape.", "duration": 142, "rating": 9.3},
    {"id": 2, "title": "Sea Battle", "director": "Rhea Navarro",
     "year": 2003, "genre": "Action",
     "description": "A naval captain holds a strait.", "duration": 138, "rating": 7.4},
    {"id": 3, "title": "The Quiet Harbor", "director": "Frank Hollis",
     "year": 1999, "genre": "Drama",
     "description": "A retired pilot rebuilds a lighthouse.", "duration": 117, "rating": 8.1}
]"#;

fn write_fixture(dir: &TempDirGuard) -> PathBuf {
    let path = dir.path().join("movies.json");
    fs::write(&path, FIXTURE).expect("fixture should write");
    path
}

fn run_marquee<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_marquee");
    Command::new(bin)
        .args(args)
        .output()
        .expect("marquee command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be JSON: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn list_reports_all_movies_and_genres() {
    let dir = TempDirGuard::new("list");
    let catalog = write_fixture(&dir);

    let output = run_marquee(["list", "--catalog", catalog.to_str().unwrap(), "--json"]);
    assert_success(&output);
    let payload = parse_stdout(&output);

    assert_eq!(payload["action"], "list");
    assert_eq!(payload["count"], 3);
    assert_eq!(payload["movies"][0]["id"], 1);
    assert_eq!(payload["movies"][2]["title"], "The Quiet Harbor");
    assert_eq!(payload["genres"], serde_json::json!(["Action", "Drama"]));
}

#[test]
fn get_finds_movie_by_id() {
    let dir = TempDirGuard::new("get");
    let catalog = write_fixture(&dir);

    let output = run_marquee(["get", "2", "--catalog", catalog.to_str().unwrap(), "--json"]);
    assert_success(&output);
    let payload = parse_stdout(&output);

    assert_eq!(payload["action"], "get");
    assert_eq!(payload["movie"]["id"], 2);
    assert_eq!(payload["movie"]["title"], "Sea Battle");
}

#[test]
fn get_exits_nonzero_on_miss_and_non_positive_id() {
    let dir = TempDirGuard::new("get-miss");
    let catalog = write_fixture(&dir);

    for id in ["99", "0", "-1"] {
        let output = run_marquee(["get", id, "--catalog", catalog.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1), "id {id} should be a miss");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("movie not found"), "stderr: {stderr}");
    }
}

#[test]
fn search_ands_criteria_together() {
    let dir = TempDirGuard::new("search");
    let catalog = write_fixture(&dir);

    // Name matches ids 1 and 3, genre matches id 2 only: AND is empty.
    let output = run_marquee([
        "search",
        "--name",
        "the",
        "--genre",
        "action",
        "--catalog",
        catalog.to_str().unwrap(),
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_stdout(&output);
    assert_eq!(payload["count"], 0);
    assert_eq!(payload["noCriteria"], false);

    // Id narrows first; the other criteria confirm it.
    let output = run_marquee([
        "search",
        "--id",
        "2",
        "--genre",
        "action",
        "--catalog",
        catalog.to_str().unwrap(),
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_stdout(&output);
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["movies"][0]["id"], 2);
}

#[test]
fn search_without_criteria_returns_everything() {
    let dir = TempDirGuard::new("search-empty");
    let catalog = write_fixture(&dir);

    let output = run_marquee(["search", "--catalog", catalog.to_str().unwrap(), "--json"]);
    assert_success(&output);
    let payload = parse_stdout(&output);

    assert_eq!(payload["noCriteria"], true);
    assert_eq!(payload["count"], 3);
}

#[test]
fn genres_lists_distinct_sorted_genres() {
    let dir = TempDirGuard::new("genres");
    let catalog = write_fixture(&dir);

    let output = run_marquee(["genres", "--catalog", catalog.to_str().unwrap(), "--json"]);
    assert_success(&output);
    let payload = parse_stdout(&output);

    assert_eq!(payload["action"], "genres");
    assert_eq!(payload["count"], 2);
    assert_eq!(payload["genres"], serde_json::json!(["Action", "Drama"]));
}

#[test]
fn corrupt_catalog_serves_empty_results_instead_of_crashing() {
    let dir = TempDirGuard::new("corrupt");
    let path = dir.path().join("movies.json");
    fs::write(&path, "not json at all {{{").expect("fixture should write");

    let output = run_marquee(["list", "--catalog", path.to_str().unwrap(), "--json"]);
    assert_success(&output);
    let payload = parse_stdout(&output);

    assert_eq!(payload["count"], 0);
    assert_eq!(payload["movies"], serde_json::json!([]));
}

#[test]
fn missing_catalog_serves_empty_results_instead_of_crashing() {
    let dir = TempDirGuard::new("missing");
    let path = dir.path().join("does-not-exist.json");

    let output = run_marquee(["search", "--catalog", path.to_str().unwrap(), "--json"]);
    assert_success(&output);
    let payload = parse_stdout(&output);

    assert_eq!(payload["noCriteria"], true);
    assert_eq!(payload["count"], 0);
}
