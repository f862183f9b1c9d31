mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod render;

use std::io;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    api::nrgi,
    cli::{Args, Command},
    core::{cache::FileCache, fetcher::PriceFetcher},
    prelude::*,
    render::{build_day_table, now_line},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .without_time()
        .compact()
        .init();
    debug!(version = crate_version!(), "starting…");

    let scale = args.colors.try_scale()?;
    let fetcher = PriceFetcher::builder()
        .provider(nrgi::Api::new(args.api_url))
        .cache(FileCache::new(args.cache_path))
        .build();
    let now = Local::now().naive_local();

    match args.command {
        Command::Now => println!("{}", now_line(&fetcher, &scale, now)),
        Command::Background => {
            let price = fetcher.read_current_price(now)?;
            println!("{}", scale.price_to_color(price));
        }
        Command::Day(day_args) => {
            let record = fetcher.prices_on(day_args.date.unwrap_or(now.date()), now.date())?;
            println!("{}", build_day_table(&record, &scale, now));
        }
    }

    Ok(())
}
