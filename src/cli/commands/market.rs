//! ca market - Show market statistics for a career

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::market;

#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Career to look up (e.g. "Software Engineer")
    pub career: String,
}

pub fn run(ctx: &AppContext, args: &MarketArgs) -> Result<()> {
    let data = market::market_data(&args.career);

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        super::print_market(&data);
    }
    Ok(())
}
