use anyhow::Result;
use clap::Args;

use super::FetchOptions;
use crate::output;

#[derive(Args)]
pub struct RandomArgs {
    #[command(flatten)]
    pub options: FetchOptions
}

pub async fn run(args: RandomArgs) -> Result<()> {
    let fetcher = args.options.fetcher()?;
    let (id, person) = fetcher.fetch_random(&mut rand::thread_rng()).await;

    match person {
        Some(person) => output::person(id, &person, args.options.json),
        None => {
            output::error(&format!("No person found for id {id}"));
            std::process::exit(1);
        }
    }
}
