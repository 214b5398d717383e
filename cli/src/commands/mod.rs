pub mod person;
pub mod random;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use person_api::config::normalize_base_url;
use person_api::{PersonApiConfig, PersonFetcher};

#[derive(Parser)]
#[command(
    name = "startrivia",
    author,
    version,
    about = "StarTrivia - Star Wars character lookup",
    long_about = "Looks up Star Wars characters from the SWAPI people resource.\n\nThe endpoint \
                  defaults to https://swapi.dev/api/people/ and can be changed with --base-url \
                  or SWAPI_PEOPLE_URL."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Fetch a character by id")]
    Person(person::PersonArgs),

    #[command(about = "Fetch a random character")]
    Random(random::RandomArgs)
}

#[derive(Args, Clone)]
pub struct FetchOptions {
    #[arg(long, env = "SWAPI_PEOPLE_URL", help = "People endpoint to query")]
    pub base_url: Option<String>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool
}

impl FetchOptions {
    pub fn fetcher(&self) -> Result<PersonFetcher> {
        let mut config = PersonApiConfig::from_env();
        if let Some(base_url) = &self.base_url {
            config.base_url = normalize_base_url(base_url);
        }
        Ok(PersonFetcher::new(config)?)
    }
}
