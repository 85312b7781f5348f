//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::market::MarketData;
use crate::search::types::{CourseCandidate, Price};

pub mod assess;
pub mod market;
pub mod search;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Assess(args) => assess::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Market(args) => market::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive skill assessment and show recommendations
    Assess(assess::AssessArgs),

    /// Search ranked learning resources for a career
    Search(search::SearchArgs),

    /// Show market statistics for a career
    Market(market::MarketArgs),
}

/// Render a ranked course list for human consumption.
pub(crate) fn print_courses(courses: &[CourseCandidate]) {
    if courses.is_empty() {
        println!("{}", "No courses found.".dimmed());
        return;
    }

    println!("{}", "Recommended Learning Resources".bold());
    for (i, course) in courses.iter().enumerate() {
        let rating = course
            .rating
            .map_or_else(|| "unrated".to_string(), |r| format!("{r:.1}"));
        let duration = course.duration.as_deref().unwrap_or("self-paced");
        let price = match course.price {
            Price::Free => "Free".green(),
            Price::Paid => "Paid".yellow(),
        };

        println!("{}. {}", i + 1, course.title.bold());
        println!(
            "   {} | rating {} | {} | {} | score {:.2}",
            course.provider.cyan(),
            rating,
            duration,
            price,
            course.score
        );
        println!("   {}", course.url.blue().underline());
    }
}

/// Render the market overview for human consumption.
pub(crate) fn print_market(data: &MarketData) {
    println!("{}", format!("Career Market Overview: {}", data.career).bold());
    println!("  Demand:       {}", data.demand);
    println!(
        "  Salary range: ${} - ${}",
        data.salary_min, data.salary_max
    );
    println!("  Growth trend: {}", data.growth_trend);
    println!("  Job openings: {}+", data.job_openings);
    println!("  Key skills:   {}", data.skills_in_demand.join(", "));
}
