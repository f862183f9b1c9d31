use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    core::color::{ColorScale, ColorThresholds, HexColor},
    prelude::*,
    quantity::KilowattHourRate,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Where the prices of the current day are kept between the runs.
    #[clap(long, env = "NRGI_CACHE_PATH", default_value = "prices.json")]
    pub cache_path: PathBuf,

    #[clap(long, env = "NRGI_API_URL", default_value = "https://nrgi.dk/api/common/pricehistory")]
    pub api_url: String,

    /// Logs go to the standard error.
    #[clap(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: Level,

    #[clap(flatten)]
    pub colors: ColorArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the current hour's price as Pango markup.
    #[clap(name = "now")]
    Now,

    /// Print the background color of the current hour's price.
    #[clap(name = "background")]
    Background,

    /// Print all hourly prices of a day.
    #[clap(name = "day")]
    Day(DayArgs),
}

#[derive(Parser)]
pub struct DayArgs {
    /// Defaults to today.
    #[clap(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct ColorArgs {
    /// Prices at or below this are shown in the first color, DKK/kWh.
    #[clap(long, env = "COLOR_MIN", default_value = "2.0")]
    pub color_min: KilowattHourRate,

    /// Prices at or above this are shown in the last color, DKK/kWh.
    #[clap(long, env = "COLOR_MAX", default_value = "8.0")]
    pub color_max: KilowattHourRate,

    /// From cheap to expensive, at least three.
    #[clap(
        long = "colors",
        env = "COLORS",
        value_delimiter = ',',
        default_value = "#25AA00,#72A300,#BD9A00,#EA7500,#FF4400",
    )]
    pub palette: Vec<HexColor>,
}

impl ColorArgs {
    pub fn try_scale(&self) -> Result<ColorScale> {
        ColorScale::try_new(
            ColorThresholds::try_new(self.color_min, self.color_max)?,
            self.palette.clone(),
        )
    }
}
