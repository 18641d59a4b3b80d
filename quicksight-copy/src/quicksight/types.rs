//! Request and response documents of the QuickSight operations used by
//! the copiers. Structural members the copiers only pass along are kept
//! as raw JSON so they round-trip without loss.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One access-control grant on an analysis or data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourcePermission {
    pub principal: String,
    pub actions: Vec<String>,
}

impl ResourcePermission {
    pub fn new(principal: &str, actions: &[&str]) -> Self {
        Self {
            principal: principal.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Analysis {
    pub analysis_id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub theme_arn: Option<String>,
    #[serde(default)]
    pub data_set_arns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnalysisOutput {
    pub analysis: Analysis,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnalysisPermissionsOutput {
    pub analysis_id: Option<String>,
    pub analysis_arn: Option<String>,
    pub permissions: Option<Vec<ResourcePermission>>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnalysisDefinitionOutput {
    pub analysis_id: Option<String>,
    pub name: Option<String>,
    pub theme_arn: Option<String>,
    pub resource_status: Option<String>,
    pub definition: Option<Value>,
    pub errors: Option<Value>,
    pub request_id: Option<String>,
}

/// Body of `CreateAnalysis`; the analysis id travels in the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAnalysisInput {
    #[serde(skip)]
    pub analysis_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAnalysisOutput {
    pub analysis_id: Option<String>,
    pub arn: Option<String>,
    pub creation_status: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSet {
    pub arn: Option<String>,
    pub data_set_id: Option<String>,
    pub name: Option<String>,
    pub import_mode: Option<String>,
    pub physical_table_map: Option<Value>,
    pub logical_table_map: Option<Value>,
    pub column_groups: Option<Value>,
    pub column_level_permission_rules: Option<Value>,
    pub data_set_usage_configuration: Option<Value>,
    pub dataset_parameters: Option<Value>,
    pub field_folders: Option<Value>,
    pub row_level_permission_data_set: Option<Value>,
    pub row_level_permission_tag_configuration: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSetOutput {
    pub data_set: DataSet,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSetPermissionsOutput {
    pub data_set_id: Option<String>,
    pub data_set_arn: Option<String>,
    pub permissions: Option<Vec<ResourcePermission>>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSetRefreshPropertiesOutput {
    pub data_set_refresh_properties: Option<Value>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSetInput {
    pub data_set_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_table_map: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_table_map: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_groups: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_level_permission_rules: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_usage_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_parameters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_folders: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_level_permission_data_set: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_level_permission_tag_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSetOutput {
    pub data_set_id: Option<String>,
    pub arn: Option<String>,
    pub ingestion_arn: Option<String>,
    pub ingestion_id: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutDataSetRefreshPropertiesInput {
    pub data_set_refresh_properties: Value,
}
