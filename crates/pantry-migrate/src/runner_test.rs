use super::*;
use pantry_core::CoreError;
use pantry_db::testing::FakeExecutor;
use pantry_db::PsqlClient;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn harness(dir: &Path) -> (Arc<FakeExecutor>, Runner) {
    let fake = Arc::new(FakeExecutor::new());
    let client = PsqlClient::new(fake.clone(), "postgres://localhost/foods");
    let runner = Runner::new(
        MigrationStore::new(dir),
        Ledger::new(client.clone()),
        client,
    );
    (fake, runner)
}

fn write_migration(dir: &Path, filename: &str, up: &str, down: Option<&str>) {
    let mut content = format!("-- UP\n{up}\n");
    if let Some(down) = down {
        content.push_str(&format!("-- DOWN\n{down}\n"));
    }
    fs::write(dir.join(filename), content).unwrap();
}

#[tokio::test]
async fn test_migrate_up_with_no_files_invokes_nothing() {
    let temp = tempdir().unwrap();
    let (fake, runner) = harness(temp.path());

    let applied = runner.migrate_up().await.unwrap();

    assert!(applied.is_empty());
    assert!(fake.invocations().is_empty());
}

#[tokio::test]
async fn test_migrate_up_applies_pending_in_order() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        Some("DROP TABLE a;"),
    );
    write_migration(
        temp.path(),
        "20240102000000_b.sql",
        "CREATE TABLE b (id INT);",
        Some("DROP TABLE b;"),
    );
    let (fake, runner) = harness(temp.path());

    let applied = runner.migrate_up().await.unwrap();

    assert_eq!(applied, ["20240101000000_a", "20240102000000_b"]);
    assert_eq!(
        fake.applied_versions(),
        ["20240101000000_a", "20240102000000_b"]
    );

    // UP sections executed in version order, via staged files
    let executed = fake.executed_files();
    assert_eq!(executed.len(), 2);
    assert!(executed[0].contains("CREATE TABLE a"));
    assert!(executed[1].contains("CREATE TABLE b"));
}

#[tokio::test]
async fn test_migrate_up_skips_already_applied() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        None,
    );
    let (fake, runner) = harness(temp.path());
    fake.seed_applied(["20240101000000_a"]);

    let applied = runner.migrate_up().await.unwrap();

    assert!(applied.is_empty());
    assert!(fake.executed_files().is_empty());
}

#[tokio::test]
async fn test_whitespace_only_up_fails_before_execution() {
    let temp = tempdir().unwrap();
    write_migration(temp.path(), "20240101000000_a.sql", "   ", None);
    let (fake, runner) = harness(temp.path());

    let err = runner.migrate_up().await.unwrap_err();

    assert!(matches!(
        err,
        MigrateError::Core(CoreError::EmptySection { .. })
    ));
    assert!(fake.executed_files().is_empty());
    assert!(fake.applied_versions().is_empty());
}

#[tokio::test]
async fn test_failure_aborts_remaining_migrations() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        None,
    );
    write_migration(temp.path(), "20240102000000_b.sql", "BROKEN SQL;", None);
    write_migration(
        temp.path(),
        "20240103000000_c.sql",
        "CREATE TABLE c (id INT);",
        None,
    );
    let (fake, runner) = harness(temp.path());
    fake.fail_matching("BROKEN SQL", "syntax error at or near \"BROKEN\"");

    let err = runner.migrate_up().await.unwrap_err();

    assert!(matches!(err, MigrateError::Db(_)));
    // a applied and recorded; b failed before recording; c never attempted
    assert_eq!(fake.applied_versions(), ["20240101000000_a"]);
    let executed = fake.executed_files();
    assert_eq!(executed.len(), 2);
    assert!(!executed.iter().any(|sql| sql.contains("TABLE c")));
}

#[tokio::test]
async fn test_up_then_down_round_trips_ledger() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        Some("DROP TABLE a;"),
    );
    let (fake, runner) = harness(temp.path());

    runner.migrate_up().await.unwrap();
    assert_eq!(fake.applied_versions(), ["20240101000000_a"]);

    let rolled_back = runner.migrate_down().await.unwrap();
    assert_eq!(rolled_back.as_deref(), Some("20240101000000_a"));
    assert!(fake.applied_versions().is_empty());
}

#[tokio::test]
async fn test_migrate_down_rolls_back_only_the_last() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        Some("DROP TABLE a;"),
    );
    write_migration(
        temp.path(),
        "20240102000000_b.sql",
        "CREATE TABLE b (id INT);",
        Some("DROP TABLE b;"),
    );
    let (fake, runner) = harness(temp.path());
    fake.seed_applied(["20240101000000_a", "20240102000000_b"]);

    let rolled_back = runner.migrate_down().await.unwrap();

    assert_eq!(rolled_back.as_deref(), Some("20240102000000_b"));
    assert_eq!(fake.applied_versions(), ["20240101000000_a"]);

    let executed = fake.executed_files();
    assert_eq!(executed.len(), 1);
    assert!(executed[0].contains("DROP TABLE b"));
}

#[tokio::test]
async fn test_migrate_down_with_empty_ledger_is_a_noop() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        Some("DROP TABLE a;"),
    );
    let (fake, runner) = harness(temp.path());

    let rolled_back = runner.migrate_down().await.unwrap();

    assert!(rolled_back.is_none());
    assert!(fake.executed_files().is_empty());
}

#[tokio::test]
async fn test_migrate_down_with_missing_file_fails_and_keeps_ledger() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        Some("DROP TABLE a;"),
    );
    let (fake, runner) = harness(temp.path());
    fake.seed_applied(["20240105000000_c"]);

    let err = runner.migrate_down().await.unwrap_err();

    match err {
        MigrateError::MigrationFileNotFound { version, available } => {
            assert_eq!(version, "20240105000000_c");
            assert_eq!(available, ["20240101000000_a.sql"]);
        }
        other => panic!("expected MigrationFileNotFound, got {other:?}"),
    }
    assert_eq!(fake.applied_versions(), ["20240105000000_c"]);
}

#[tokio::test]
async fn test_migrate_down_without_down_section_keeps_ledger() {
    let temp = tempdir().unwrap();
    write_migration(
        temp.path(),
        "20240101000000_a.sql",
        "CREATE TABLE a (id INT);",
        None,
    );
    let (fake, runner) = harness(temp.path());
    fake.seed_applied(["20240101000000_a"]);

    let err = runner.migrate_down().await.unwrap_err();

    assert!(matches!(
        err,
        MigrateError::Core(CoreError::MissingDownSection { .. })
    ));
    assert_eq!(fake.applied_versions(), ["20240101000000_a"]);
    assert!(fake.executed_files().is_empty());
}
