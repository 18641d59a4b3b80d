use log::{debug, info};

use super::{CopyRequest, RefreshOutcome};
use crate::quicksight::types::{CreateDataSetInput, DataSet, ResourcePermission};
use crate::quicksight::QuickSightApi;
use crate::{CopyError, Operation};

/// Result of a completed data set copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSetCopy {
    pub data_set_id: String,
    pub arn: Option<String>,
    pub refresh_properties_applied: bool,
}

/// Re-creates the source data set under the destination id.
///
/// The refresh properties are looked up before anything is created, so a
/// failing lookup leaves the account untouched. They are applied only
/// after the data set exists; if that last call fails the new data set is
/// left in place and `CopyError::PartiallyApplied` is returned.
pub async fn copy_data_set<A: QuickSightApi + ?Sized>(
    api: &A,
    request: &CopyRequest,
) -> Result<DataSetCopy, CopyError> {
    let account_id = request.account_id.as_str();
    let source_id = request.source_id.as_str();

    debug!("describing data set {}", source_id);
    let data_set = api
        .describe_data_set(account_id, source_id)
        .await
        .map_err(|e| CopyError::from_api(Operation::DescribeDataSet, e))?
        .data_set;

    debug!("describing permissions of data set {}", source_id);
    let permissions = api
        .describe_data_set_permissions(account_id, source_id)
        .await
        .map_err(|e| {
            CopyError::from_api(Operation::DescribeDataSetPermissions, e)
        })?
        .permissions;

    debug!("describing refresh properties of data set {}", source_id);
    let refresh_properties = match RefreshOutcome::from(
        api.describe_data_set_refresh_properties(account_id, source_id)
            .await,
    ) {
        RefreshOutcome::Found(properties) => Some(properties),
        RefreshOutcome::Absent => {
            debug!("data set {} has no refresh properties", source_id);
            None
        }
        RefreshOutcome::Failed(e) => {
            return Err(CopyError::from_api(
                Operation::DescribeDataSetRefreshProperties,
                e,
            ))
        }
    };

    let input =
        create_data_set_input(&request.destination_id, data_set, permissions);

    debug!("creating data set {}", input.data_set_id);
    let output = api
        .create_data_set(account_id, &input)
        .await
        .map_err(|e| CopyError::from_api(Operation::CreateDataSet, e))?;
    info!("copied data set {} to {}", source_id, input.data_set_id);

    let refresh_properties_applied = match refresh_properties {
        Some(properties) => {
            debug!("putting refresh properties of data set {}", input.data_set_id);
            if let Err(e) = api
                .put_data_set_refresh_properties(
                    account_id,
                    &input.data_set_id,
                    &properties,
                )
                .await
            {
                return Err(CopyError::PartiallyApplied {
                    data_set_id: input.data_set_id,
                    operation: Operation::PutDataSetRefreshProperties,
                    error: e,
                });
            }
            info!("copied refresh properties to data set {}", input.data_set_id);
            true
        }
        None => false,
    };

    Ok(DataSetCopy {
        data_set_id: input.data_set_id,
        arn: output.arn,
        refresh_properties_applied,
    })
}

// tags are not carried over
fn create_data_set_input(
    destination_id: &str,
    data_set: DataSet,
    permissions: Option<Vec<ResourcePermission>>,
) -> CreateDataSetInput {
    CreateDataSetInput {
        data_set_id: destination_id.to_string(),
        name: destination_id.to_string(),
        import_mode: data_set.import_mode,
        physical_table_map: data_set.physical_table_map,
        logical_table_map: data_set.logical_table_map,
        column_groups: data_set.column_groups,
        column_level_permission_rules: data_set.column_level_permission_rules,
        data_set_usage_configuration: data_set.data_set_usage_configuration,
        dataset_parameters: data_set.dataset_parameters,
        field_folders: data_set.field_folders,
        row_level_permission_data_set: data_set.row_level_permission_data_set,
        row_level_permission_tag_configuration: data_set
            .row_level_permission_tag_configuration,
        permissions,
    }
}
