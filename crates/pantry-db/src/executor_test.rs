use super::*;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_captures_stdout() {
    let executor = ProcessExecutor;
    let output = executor
        .execute("sh", &args(&["-c", "printf hello"]))
        .await
        .unwrap();
    assert_eq!(output.stdout, "hello");
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn test_nonzero_exit_is_an_error() {
    let executor = ProcessExecutor;
    let err = executor
        .execute("sh", &args(&["-c", "echo boom >&2; exit 3"]))
        .await
        .unwrap_err();

    match err {
        DbError::CommandFailed { message, stderr } => {
            assert!(message.contains("exited with"));
            assert_eq!(stderr.trim(), "boom");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stderr_on_success_is_a_warning_not_an_error() {
    let executor = ProcessExecutor;
    let output = executor
        .execute("sh", &args(&["-c", "echo notice >&2; printf ok"]))
        .await
        .unwrap();
    assert_eq!(output.stdout, "ok");
    assert_eq!(output.stderr.trim(), "notice");
}

#[tokio::test]
async fn test_missing_program_is_spawn_failure() {
    let executor = ProcessExecutor;
    let err = executor
        .execute("definitely-not-a-real-program-pantry", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::SpawnFailed { .. }));
}
