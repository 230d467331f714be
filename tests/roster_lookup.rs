//! End-to-end lookups against rosters loaded from disk and the bundled sample.

use std::io::Write;
use std::process::Command;
use std::sync::Arc;

use idlocator::roster::{from_path, from_reader};
use idlocator::{MatchEngine, MatchedOn, RecordStore, RosterSnapshot, RosterSource};
use tempfile::NamedTempFile;

const ROSTER: &str = "\
id,name,city
1,Robert Cohen,Haifa
2,Rupert Cohen,Tel Aviv
3,Dana Levi,Jerusalem
";

fn write_roster(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write roster");
    file
}

fn ids(store: &RecordStore, query: &str) -> Vec<String> {
    MatchEngine::default()
        .find_by_name(query, store)
        .expect("valid query")
        .iter()
        .map(|result| result.id().to_string())
        .collect()
}

#[test]
fn roster_on_disk_resolves_spelling_variants() {
    let file = write_roster(ROSTER);
    let store = from_path(file.path()).expect("roster loads");

    assert_eq!(ids(&store, "Robbert"), vec!["1", "2"]);
    assert_eq!(ids(&store, "Dana"), vec!["3"]);
    assert!(ids(&store, "Xyzzy").is_empty());

    let found = MatchEngine::default()
        .find_by_id("3", &store)
        .expect("id present");
    assert_eq!(found.record.attribute("city"), Some("Jerusalem"));
    assert_eq!(found.matched_on, MatchedOn::Id);
}

#[test]
fn sample_roster_finds_transliterated_surnames() {
    let store = RosterSource::Sample.load().expect("sample loads");
    assert_eq!(ids(&store, "Levy"), vec!["200000002", "200000006"]);
    assert_eq!(ids(&store, "Bitton"), vec!["200000017", "200000018"]);
}

#[test]
fn reloading_swaps_the_roster_for_new_readers_only() {
    let snapshot = RosterSnapshot::new(from_reader(ROSTER.as_bytes()).expect("roster"));
    let before = snapshot.current();

    let updated = "id,name\n10,Robin Cohen\n";
    snapshot.replace(from_reader(updated.as_bytes()).expect("roster"));
    let after = snapshot.current();

    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 1);
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(ids(&after, "Kohen"), Vec::<String>::new());
    assert_eq!(ids(&after, "Cohn"), vec!["10"]);
}

fn idlocator() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_idlocator"));
    command
        .arg("--no-config")
        .env_remove("IDLOCATOR_CSV")
        .env_remove("IDLOCATOR_CONFIG")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn binary_exit_status_reflects_matches() {
    let file = write_roster(ROSTER);

    let hit = idlocator()
        .arg("--csv")
        .arg(file.path())
        .args(["--output", "json", "Robbert"])
        .output()
        .expect("binary runs");
    assert!(hit.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&hit.stdout).expect("json output");
    assert_eq!(payload["total"], 2);
    assert_eq!(payload["matches"][0]["record"]["id"], "1");

    let miss = idlocator()
        .arg("--csv")
        .arg(file.path())
        .arg("Xyzzy")
        .output()
        .expect("binary runs");
    assert!(!miss.status.success());
    assert!(String::from_utf8_lossy(&miss.stdout).contains("No matches for 'Xyzzy'"));
}

#[test]
fn binary_reports_unreadable_roster() {
    let output = idlocator()
        .args(["--csv", "/nonexistent/people.csv", "Dana"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
}

#[test]
fn printed_configuration_keeps_json_output_parseable() {
    let file = write_roster(ROSTER);

    let output = idlocator()
        .arg("--csv")
        .arg(file.path())
        .args(["--print-config", "--output", "json", "Robbert"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is only json");
    assert_eq!(payload["total"], 2);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Effective configuration:"));
}

#[test]
fn leading_letter_is_not_anchored_across_classes() {
    let store = RosterSource::Sample.load().expect("sample loads");
    let found = ids(&store, "Cohen");
    assert_eq!(found, vec!["200000001", "200000005"]);
    assert!(!found.contains(&"200000004".to_string()));
}
