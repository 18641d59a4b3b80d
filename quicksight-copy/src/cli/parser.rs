use std::collections::HashMap;

use clap::{Arg, ArgMatches, Command};

use crate::{CopyRequest, EnvironmentConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Copier {
    Analysis,
    DataSet,
}

impl Copier {
    fn program_name(&self) -> &'static str {
        match self {
            Copier::Analysis => "cp-analysis",
            Copier::DataSet => "cp-data-set",
        }
    }

    fn object_name(&self) -> &'static str {
        match self {
            Copier::Analysis => "Analysis",
            Copier::DataSet => "DataSet",
        }
    }
}

pub fn copy_command(copier: Copier) -> Command {
    let object = copier.object_name();
    Command::new(copier.program_name())
        .version(env!("CARGO_PKG_VERSION"))
        .about(format!(
            "Copy a QuickSight {} to a new {} ID",
            object, object
        ))
        .arg(
            Arg::new("account-id")
                .long("account-id")
                .required(true)
                .help("AWS Account ID"),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .required(true)
                .help("AWS Region ID"),
        )
        .arg(
            Arg::new("src-id")
                .long("src-id")
                .required(true)
                .help(format!("Source {} ID", object)),
        )
        .arg(
            Arg::new("dst-id")
                .long("dst-id")
                .required(true)
                .help(format!("Destination {} ID (also used as name)", object)),
        )
}

pub fn create_initial_config(matches: &ArgMatches) -> EnvironmentConfig {
    let mut config_hashmap = HashMap::new();
    if let Some(region) = matches.get_one::<String>("region") {
        config_hashmap.insert("region".to_string(), region.to_string());
    }
    EnvironmentConfig::new(config_hashmap)
}

pub fn copy_request(matches: &ArgMatches) -> CopyRequest {
    let value = |name: &str| {
        matches.get_one::<String>(name).cloned().unwrap_or_default()
    };
    CopyRequest::new(value("account-id"), value("src-id"), value("dst-id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let matches = copy_command(Copier::Analysis)
            .try_get_matches_from(args(&[
                "cp-analysis",
                "--account-id",
                "123456789012",
                "--region",
                "eu-west-1",
                "--src-id",
                "A1",
                "--dst-id",
                "A2",
            ]))
            .unwrap();

        assert_eq!(
            copy_request(&matches),
            CopyRequest::new("123456789012", "A1", "A2")
        );
        let config = create_initial_config(&matches);
        assert_eq!(config.get_non_empty("region"), Some("eu-west-1"));
    }

    #[test]
    fn test_empty_values_are_passed_through() {
        let matches = copy_command(Copier::DataSet)
            .try_get_matches_from(args(&[
                "cp-data-set",
                "--account-id=",
                "--region=",
                "--src-id=S1",
                "--dst-id=S2",
            ]))
            .unwrap();
        let request = copy_request(&matches);
        assert_eq!(request.account_id, "");
        assert_eq!(request.destination_id, "S2");
        assert_eq!(
            create_initial_config(&matches).get("region").map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        let result = copy_command(Copier::DataSet).try_get_matches_from(args(
            &["cp-data-set", "--account-id", "1", "--region", "us-east-1"],
        ));
        assert!(result.is_err());
    }
}
