use std::cell::RefCell;

use async_trait::async_trait;
use quicksight_copy::{
    ApiError, CreateAnalysisInput, CreateAnalysisOutput, CreateDataSetInput,
    CreateDataSetOutput, DescribeAnalysisDefinitionOutput,
    DescribeAnalysisOutput, DescribeAnalysisPermissionsOutput,
    DescribeDataSetOutput, DescribeDataSetPermissionsOutput,
    DescribeDataSetRefreshPropertiesOutput, QuickSightApi,
};
use serde_json::Value;

/// A call received by `FakeQuickSight`, with the account and object id it
/// addressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    DescribeAnalysis(String, String),
    DescribeAnalysisPermissions(String, String),
    DescribeAnalysisDefinition(String, String),
    CreateAnalysis(String, CreateAnalysisInput),
    DescribeDataSet(String, String),
    DescribeDataSetPermissions(String, String),
    DescribeDataSetRefreshProperties(String, String),
    CreateDataSet(String, CreateDataSetInput),
    PutDataSetRefreshProperties(String, String, Value),
}

/// Canned responses per operation; every call is recorded in order.
#[derive(Default)]
pub struct FakeQuickSight {
    pub describe_analysis: Option<Result<DescribeAnalysisOutput, ApiError>>,
    pub describe_analysis_permissions:
        Option<Result<DescribeAnalysisPermissionsOutput, ApiError>>,
    pub describe_analysis_definition:
        Option<Result<DescribeAnalysisDefinitionOutput, ApiError>>,
    pub create_analysis: Option<Result<CreateAnalysisOutput, ApiError>>,
    pub describe_data_set: Option<Result<DescribeDataSetOutput, ApiError>>,
    pub describe_data_set_permissions:
        Option<Result<DescribeDataSetPermissionsOutput, ApiError>>,
    pub describe_data_set_refresh_properties:
        Option<Result<DescribeDataSetRefreshPropertiesOutput, ApiError>>,
    pub create_data_set: Option<Result<CreateDataSetOutput, ApiError>>,
    pub put_data_set_refresh_properties: Option<Result<(), ApiError>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeQuickSight {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn respond<T: Clone + Default>(response: &Option<Result<T, ApiError>>) -> Result<T, ApiError> {
    response.clone().unwrap_or_else(|| Ok(T::default()))
}

#[async_trait(?Send)]
impl QuickSightApi for FakeQuickSight {
    async fn describe_analysis(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisOutput, ApiError> {
        self.record(Call::DescribeAnalysis(
            account_id.to_string(),
            analysis_id.to_string(),
        ));
        respond(&self.describe_analysis)
    }

    async fn describe_analysis_permissions(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisPermissionsOutput, ApiError> {
        self.record(Call::DescribeAnalysisPermissions(
            account_id.to_string(),
            analysis_id.to_string(),
        ));
        respond(&self.describe_analysis_permissions)
    }

    async fn describe_analysis_definition(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisDefinitionOutput, ApiError> {
        self.record(Call::DescribeAnalysisDefinition(
            account_id.to_string(),
            analysis_id.to_string(),
        ));
        respond(&self.describe_analysis_definition)
    }

    async fn create_analysis(
        &self,
        account_id: &str,
        input: &CreateAnalysisInput,
    ) -> Result<CreateAnalysisOutput, ApiError> {
        self.record(Call::CreateAnalysis(account_id.to_string(), input.clone()));
        respond(&self.create_analysis)
    }

    async fn describe_data_set(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetOutput, ApiError> {
        self.record(Call::DescribeDataSet(
            account_id.to_string(),
            data_set_id.to_string(),
        ));
        respond(&self.describe_data_set)
    }

    async fn describe_data_set_permissions(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetPermissionsOutput, ApiError> {
        self.record(Call::DescribeDataSetPermissions(
            account_id.to_string(),
            data_set_id.to_string(),
        ));
        respond(&self.describe_data_set_permissions)
    }

    async fn describe_data_set_refresh_properties(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetRefreshPropertiesOutput, ApiError> {
        self.record(Call::DescribeDataSetRefreshProperties(
            account_id.to_string(),
            data_set_id.to_string(),
        ));
        respond(&self.describe_data_set_refresh_properties)
    }

    async fn create_data_set(
        &self,
        account_id: &str,
        input: &CreateDataSetInput,
    ) -> Result<CreateDataSetOutput, ApiError> {
        self.record(Call::CreateDataSet(account_id.to_string(), input.clone()));
        respond(&self.create_data_set)
    }

    async fn put_data_set_refresh_properties(
        &self,
        account_id: &str,
        data_set_id: &str,
        refresh_properties: &Value,
    ) -> Result<(), ApiError> {
        self.record(Call::PutDataSetRefreshProperties(
            account_id.to_string(),
            data_set_id.to_string(),
            refresh_properties.clone(),
        ));
        respond(&self.put_data_set_refresh_properties)
    }
}
