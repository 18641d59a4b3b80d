#![cfg(feature = "cli")]

use quicksight_copy::cli::{run_cli, Copier};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_help_exits_successfully() {
    assert_eq!(run_cli(Copier::Analysis, args(&["cp-analysis", "--help"])).await, 0);
}

#[tokio::test]
async fn test_missing_flags_exit_with_failure() {
    let code = run_cli(
        Copier::DataSet,
        args(&["cp-data-set", "--account-id", "1", "--src-id", "S1"]),
    )
    .await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_invalid_region_exits_with_failure() {
    // a region that can't form an endpoint host fails before any request
    let code = run_cli(
        Copier::Analysis,
        args(&[
            "cp-analysis",
            "--account-id",
            "1",
            "--region",
            "not a region",
            "--src-id",
            "A1",
            "--dst-id",
            "A2",
        ]),
    )
    .await;
    assert_eq!(code, 1);
}
