mod common;

use common::{Call, FakeQuickSight};
use quicksight_copy::{
    copy_analysis, Analysis, ApiError, CopyError, CopyRequest,
    CreateAnalysisOutput, DescribeAnalysisDefinitionOutput,
    DescribeAnalysisOutput, DescribeAnalysisPermissionsOutput, ErrorKind,
    Operation, ResourcePermission,
};
use serde_json::json;

const ACCOUNT: &str = "123456789012";

fn source_analysis() -> FakeQuickSight {
    FakeQuickSight {
        describe_analysis: Some(Ok(DescribeAnalysisOutput {
            analysis: Analysis {
                analysis_id: Some("A1".to_string()),
                name: Some("Quarterly sales".to_string()),
                theme_arn: Some("T1".to_string()),
                ..Default::default()
            },
            request_id: None,
        })),
        describe_analysis_permissions: Some(Ok(
            DescribeAnalysisPermissionsOutput {
                analysis_id: Some("A1".to_string()),
                permissions: Some(vec![ResourcePermission::new(
                    "u1",
                    &["view"],
                )]),
                ..Default::default()
            },
        )),
        describe_analysis_definition: Some(Ok(
            DescribeAnalysisDefinitionOutput {
                analysis_id: Some("A1".to_string()),
                definition: Some(json!({
                    "DataSetIdentifierDeclarations": [
                        {"Identifier": "sales", "DataSetArn": "arn:ds/S1"}
                    ],
                    "Sheets": [{"SheetId": "s1", "Name": "D1"}]
                })),
                ..Default::default()
            },
        )),
        create_analysis: Some(Ok(CreateAnalysisOutput {
            analysis_id: Some("A2".to_string()),
            arn: Some("arn:aws:quicksight:eu-west-1:123456789012:analysis/A2".to_string()),
            creation_status: Some("CREATION_IN_PROGRESS".to_string()),
            request_id: None,
        })),
        ..Default::default()
    }
}

fn request() -> CopyRequest {
    CopyRequest::new(ACCOUNT, "A1", "A2")
}

#[tokio::test]
async fn test_copy_analysis_creates_destination_from_source() {
    let api = source_analysis();

    let copy = copy_analysis(&api, &request()).await.unwrap();
    assert_eq!(copy.analysis_id, "A2");
    assert_eq!(copy.creation_status.as_deref(), Some("CREATION_IN_PROGRESS"));

    let calls = api.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(
        calls[..3],
        [
            Call::DescribeAnalysis(ACCOUNT.into(), "A1".into()),
            Call::DescribeAnalysisPermissions(ACCOUNT.into(), "A1".into()),
            Call::DescribeAnalysisDefinition(ACCOUNT.into(), "A1".into()),
        ]
    );
    let Call::CreateAnalysis(account_id, input) = &calls[3] else {
        panic!("expected create analysis, got {:?}", calls[3]);
    };
    assert_eq!(account_id, ACCOUNT);
    assert_eq!(input.analysis_id, "A2");
    assert_eq!(input.name, "A2");
    assert_eq!(input.theme_arn.as_deref(), Some("T1"));
    assert_eq!(
        input.permissions,
        Some(vec![ResourcePermission::new("u1", &["view"])])
    );
}

#[tokio::test]
async fn test_copy_analysis_passes_definition_unmodified() {
    let api = source_analysis();
    let source_definition = api
        .describe_analysis_definition
        .clone()
        .unwrap()
        .unwrap()
        .definition;

    copy_analysis(&api, &request()).await.unwrap();

    let created = api
        .calls()
        .into_iter()
        .find_map(|call| match call {
            Call::CreateAnalysis(_, input) => Some(input),
            _ => None,
        })
        .unwrap();
    assert_eq!(created.definition, source_definition);
    assert_eq!(
        serde_json::to_vec(&created.definition).unwrap(),
        serde_json::to_vec(&source_definition).unwrap()
    );
}

#[tokio::test]
async fn test_copy_analysis_without_theme() {
    let mut api = source_analysis();
    api.describe_analysis = Some(Ok(DescribeAnalysisOutput::default()));

    copy_analysis(&api, &request()).await.unwrap();

    let calls = api.calls();
    let Some(Call::CreateAnalysis(_, input)) = calls.last() else {
        panic!("expected create analysis");
    };
    assert_eq!(input.theme_arn, None);
}

#[tokio::test]
async fn test_copy_analysis_missing_source_never_creates() {
    let mut api = source_analysis();
    api.describe_analysis =
        Some(Err(ApiError::not_found("Analysis A1 is not found")));

    let err = copy_analysis(&api, &request()).await.unwrap_err();
    assert!(matches!(err, CopyError::NotFound(Operation::DescribeAnalysis, _)));
    assert_eq!(
        api.calls(),
        vec![Call::DescribeAnalysis(ACCOUNT.into(), "A1".into())]
    );
}

#[tokio::test]
async fn test_copy_analysis_fetch_failures_never_create() {
    for operation in [
        Operation::DescribeAnalysisPermissions,
        Operation::DescribeAnalysisDefinition,
    ] {
        let mut api = source_analysis();
        let denied = ApiError::new(ErrorKind::AccessDenied, "denied", Some(401));
        let expected_calls = match operation {
            Operation::DescribeAnalysisPermissions => {
                api.describe_analysis_permissions = Some(Err(denied));
                2
            }
            _ => {
                api.describe_analysis_definition = Some(Err(denied));
                3
            }
        };

        let err = copy_analysis(&api, &request()).await.unwrap_err();
        assert_eq!(err.operation(), Some(operation));
        assert!(matches!(err, CopyError::Remote(_, _)));

        let calls = api.calls();
        assert_eq!(calls.len(), expected_calls);
        assert!(!calls
            .iter()
            .any(|call| matches!(call, Call::CreateAnalysis(_, _))));
    }
}

#[tokio::test]
async fn test_copy_analysis_existing_destination() {
    let mut api = source_analysis();
    api.create_analysis = Some(Err(ApiError::new(
        ErrorKind::ResourceExists,
        "Analysis A2 already exists",
        Some(409),
    )));

    let err = copy_analysis(&api, &request()).await.unwrap_err();
    assert!(matches!(err, CopyError::Remote(Operation::CreateAnalysis, _)));
    assert_eq!(
        err.api_error().map(|e| e.kind().clone()),
        Some(ErrorKind::ResourceExists)
    );
    assert!(err.to_string().starts_with("unable to create analysis"));
}
