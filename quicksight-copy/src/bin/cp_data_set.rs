use std::env;
use std::process;

use quicksight_copy::cli::{run_cli, Copier};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    process::exit(run_cli(Copier::DataSet, args).await);
}
