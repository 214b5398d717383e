use anyhow::Result;
use clap::Args;

use super::FetchOptions;
use crate::output;

#[derive(Args)]
pub struct PersonArgs {
    #[arg(help = "SWAPI person id")]
    pub id: u64,

    #[command(flatten)]
    pub options: FetchOptions
}

pub async fn run(args: PersonArgs) -> Result<()> {
    let fetcher = args.options.fetcher()?;

    match fetcher.fetch_by_id(args.id).await {
        Some(person) => output::person(args.id, &person, args.options.json),
        None => {
            output::error(&format!("No person found for id {}", args.id));
            std::process::exit(1);
        }
    }
}
