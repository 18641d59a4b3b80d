mod parser;

pub use parser::{copy_command, copy_request, create_initial_config, Copier};

use log::error;

use crate::quicksight::{validate_config, QuickSightClient, QuickSightClientConfig};
use crate::{copy_analysis, copy_data_set, CopyError};

/// Runs one copier end to end and returns the process exit code.
pub async fn run_cli(copier: Copier, args: Vec<String>) -> i32 {
    init_logger();

    let matches = match copy_command(copier).try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion => {
                    print!("{}", e);
                    0
                }
                _ => {
                    eprintln!("Error parsing command-line arguments: {}", e);
                    eprintln!("For more detailed help, try running '--help'.");
                    1
                }
            };
        }
    };

    match run(copier, &matches).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

async fn run(
    copier: Copier,
    matches: &clap::ArgMatches,
) -> Result<(), CopyError> {
    let mut config = create_initial_config(matches);
    validate_config(&mut config)?;
    let client = QuickSightClient::new(QuickSightClientConfig::from_config(
        &config,
    )?);
    let request = copy_request(matches);

    match copier {
        Copier::Analysis => copy_analysis(&client, &request).await.map(|_| ()),
        Copier::DataSet => copy_data_set(&client, &request).await.map(|_| ()),
    }
}

fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    // a second init (e.g. from an embedding program) is not an error
    let _ = env_logger::Builder::from_env(env).try_init();
}
