use log::{debug, info};

use super::CopyRequest;
use crate::quicksight::types::{CreateAnalysisInput, CreateAnalysisOutput};
use crate::quicksight::QuickSightApi;
use crate::{CopyError, Operation};

/// Result of a completed analysis copy.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisCopy {
    pub analysis_id: String,
    pub arn: Option<String>,
    pub creation_status: Option<String>,
}

/// Re-creates the source analysis under the destination id.
///
/// Reads the analysis (for its theme), its permissions and its definition,
/// in that order, then issues a single create call carrying all three.
/// The first failing call aborts the copy; nothing is created unless every
/// read succeeded.
pub async fn copy_analysis<A: QuickSightApi + ?Sized>(
    api: &A,
    request: &CopyRequest,
) -> Result<AnalysisCopy, CopyError> {
    let account_id = request.account_id.as_str();
    let source_id = request.source_id.as_str();

    debug!("describing analysis {}", source_id);
    let analysis = api
        .describe_analysis(account_id, source_id)
        .await
        .map_err(|e| CopyError::from_api(Operation::DescribeAnalysis, e))?
        .analysis;

    debug!("describing permissions of analysis {}", source_id);
    let permissions = api
        .describe_analysis_permissions(account_id, source_id)
        .await
        .map_err(|e| {
            CopyError::from_api(Operation::DescribeAnalysisPermissions, e)
        })?
        .permissions;

    debug!("describing definition of analysis {}", source_id);
    let definition = api
        .describe_analysis_definition(account_id, source_id)
        .await
        .map_err(|e| {
            CopyError::from_api(Operation::DescribeAnalysisDefinition, e)
        })?
        .definition;

    let input = CreateAnalysisInput {
        analysis_id: request.destination_id.clone(),
        name: request.destination_id.clone(),
        definition,
        permissions,
        theme_arn: analysis.theme_arn,
    };

    debug!("creating analysis {}", input.analysis_id);
    let output: CreateAnalysisOutput = api
        .create_analysis(account_id, &input)
        .await
        .map_err(|e| CopyError::from_api(Operation::CreateAnalysis, e))?;

    info!(
        "copied analysis {} to {} (status: {})",
        source_id,
        input.analysis_id,
        output.creation_status.as_deref().unwrap_or("unknown")
    );
    Ok(AnalysisCopy {
        analysis_id: input.analysis_id,
        arn: output.arn,
        creation_status: output.creation_status,
    })
}
