use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::types::*;

/// The QuickSight operations the copiers are built on.
///
/// `QuickSightClient` implements this over HTTP; the copy workflows only
/// depend on the trait.
#[async_trait(?Send)]
pub trait QuickSightApi {
    async fn describe_analysis(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisOutput, ApiError>;

    async fn describe_analysis_permissions(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisPermissionsOutput, ApiError>;

    async fn describe_analysis_definition(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisDefinitionOutput, ApiError>;

    async fn create_analysis(
        &self,
        account_id: &str,
        input: &CreateAnalysisInput,
    ) -> Result<CreateAnalysisOutput, ApiError>;

    async fn describe_data_set(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetOutput, ApiError>;

    async fn describe_data_set_permissions(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetPermissionsOutput, ApiError>;

    async fn describe_data_set_refresh_properties(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetRefreshPropertiesOutput, ApiError>;

    async fn create_data_set(
        &self,
        account_id: &str,
        input: &CreateDataSetInput,
    ) -> Result<CreateDataSetOutput, ApiError>;

    async fn put_data_set_refresh_properties(
        &self,
        account_id: &str,
        data_set_id: &str,
        refresh_properties: &Value,
    ) -> Result<(), ApiError>;
}
