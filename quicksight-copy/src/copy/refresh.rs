use serde_json::Value;

use crate::quicksight::types::DescribeDataSetRefreshPropertiesOutput;
use crate::quicksight::ApiError;

/// Outcome of looking up a data set's refresh properties.
///
/// A data set that never had refresh properties configured answers with
/// `ResourceNotFoundException`; that is `Absent`, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Found(Value),
    Absent,
    Failed(ApiError),
}

impl RefreshOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RefreshOutcome::Found(_))
    }
}

impl From<Result<DescribeDataSetRefreshPropertiesOutput, ApiError>>
    for RefreshOutcome
{
    fn from(
        result: Result<DescribeDataSetRefreshPropertiesOutput, ApiError>,
    ) -> Self {
        match result {
            Ok(output) => match output.data_set_refresh_properties {
                Some(properties) => RefreshOutcome::Found(properties),
                None => RefreshOutcome::Absent,
            },
            Err(e) if e.is_not_found() => RefreshOutcome::Absent,
            Err(e) => RefreshOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::quicksight::ErrorKind;

    #[test]
    fn test_outcome_classification() {
        let found = RefreshOutcome::from(Ok(
            DescribeDataSetRefreshPropertiesOutput {
                data_set_refresh_properties: Some(json!({"RefreshConfiguration": {}})),
                request_id: None,
            },
        ));
        assert!(found.is_found());

        let empty = RefreshOutcome::from(Ok(
            DescribeDataSetRefreshPropertiesOutput::default(),
        ));
        assert_eq!(empty, RefreshOutcome::Absent);

        let absent = RefreshOutcome::from(Err(ApiError::not_found(
            "no refresh properties",
        )));
        assert_eq!(absent, RefreshOutcome::Absent);

        let throttled = ApiError::new(ErrorKind::Throttling, "slow down", Some(429));
        assert_eq!(
            RefreshOutcome::from(Err(throttled.clone())),
            RefreshOutcome::Failed(throttled)
        );
    }

    #[test]
    fn test_not_found_status_without_kind_is_failure() {
        // a bare 404 without the service error code is not "absent"
        let err = ApiError::new(ErrorKind::Unknown(String::new()), "Not Found", Some(404));
        assert!(matches!(
            RefreshOutcome::from(Err(err)),
            RefreshOutcome::Failed(_)
        ));
    }
}
