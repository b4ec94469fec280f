use super::*;
use crate::testing::FakeExecutor;
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn test_run_sql_builds_strict_psql_invocation() {
    let fake = Arc::new(FakeExecutor::new());
    let client = PsqlClient::new(fake.clone(), "postgres://localhost/foods");

    client.run_sql("SELECT 1").await.unwrap();

    let calls = fake.invocations();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, PSQL_PROGRAM);
    assert_eq!(calls[0].args[0], "postgres://localhost/foods");
    for flag in ["-X", "-q", "-t", "-A"] {
        assert!(calls[0].args.iter().any(|a| a == flag), "missing {flag}");
    }
    assert!(calls[0].args.iter().any(|a| a == "ON_ERROR_STOP=1"));
    assert_eq!(calls[0].sql(), Some("SELECT 1"));
}

#[tokio::test]
async fn test_run_file_passes_path() {
    let fake = Arc::new(FakeExecutor::new());
    let client = PsqlClient::new(fake.clone(), "postgres://localhost/foods");

    client
        .run_file(Path::new("/tmp/migration.sql"))
        .await
        .unwrap();

    let calls = fake.invocations();
    assert_eq!(calls[0].file(), Some("/tmp/migration.sql"));
}

#[tokio::test]
async fn test_with_url_shares_executor() {
    let fake = Arc::new(FakeExecutor::new());
    let client = PsqlClient::new(fake.clone(), "postgres://localhost/foods");
    let admin = client.with_url("postgres://localhost/postgres");

    admin.run_sql("CREATE DATABASE foods").await.unwrap();

    let calls = fake.invocations();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args[0], "postgres://localhost/postgres");
}

#[test]
fn test_quote_literal_doubles_quotes() {
    assert_eq!(quote_literal("plain"), "'plain'");
    assert_eq!(quote_literal("it's"), "'it''s'");
}
