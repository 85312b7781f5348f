//! ca search - Search ranked learning resources for a career

use clap::Args;

use crate::app::AppContext;
use crate::error::{CaError, Result};
use crate::search::types::ProficiencyLevel;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Career to search courses for (e.g. "Data Scientist")
    pub career: String,

    /// Proficiency level: beginner, intermediate, or advanced
    #[arg(long, short, default_value = "beginner")]
    pub level: String,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let level: ProficiencyLevel = args.level.parse().map_err(CaError::Config)?;
    let courses = ctx.search.search(&args.career, level)?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&courses)?);
    } else {
        super::print_courses(&courses);
    }
    Ok(())
}
