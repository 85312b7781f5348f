//! ca assess - Interactive skill assessment
//!
//! Walks the decision tree question by question, then runs the course
//! search and market lookup for the recommended career. The search is a
//! blocking sequence of rate-limited fetches, so a short notice is printed
//! before it starts.

use std::io::{BufRead, Write};

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::assessment::skill_name;
use crate::error::{CaError, Result};
use crate::market::{self, MarketData};
use crate::search::types::{CourseCandidate, ProficiencyLevel};

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Proficiency level used for the course search after the assessment
    #[arg(long, short, default_value = "beginner")]
    pub level: String,
}

/// Full assessment outcome, for `--json` output.
#[derive(Debug, Serialize)]
struct AssessmentReport {
    career: String,
    skills: Vec<SkillRating>,
    market: MarketData,
    courses: Vec<CourseCandidate>,
}

#[derive(Debug, Serialize)]
struct SkillRating {
    skill: String,
    rating: f64,
}

pub fn run(ctx: &AppContext, args: &AssessArgs) -> Result<()> {
    let level: ProficiencyLevel = args.level.parse().map_err(CaError::Config)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let (career, skills) = run_questionnaire(ctx, &mut input)?;

    if !ctx.json_output {
        println!();
        println!("{} {}", "Recommended career:".bold(), career.green().bold());
        println!("{}", "Searching for courses (this may take a moment)...".dimmed());
    }

    let market = market::market_data(&career);
    let courses = ctx.search.search(&career, level)?;

    if ctx.json_output {
        let report = AssessmentReport {
            career,
            skills,
            market,
            courses,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        super::print_market(&market);
        println!();
        super::print_courses(&courses);
    }
    Ok(())
}

/// Drive the decision tree from stdin until a terminal career label.
///
/// Invalid or out-of-range ratings re-prompt instead of aborting.
fn run_questionnaire(
    ctx: &AppContext,
    input: &mut impl BufRead,
) -> Result<(String, Vec<SkillRating>)> {
    let tree = &ctx.tree;
    let mut current = tree.root().to_string();
    let mut skills = Vec::new();

    while !tree.is_terminal(&current) {
        let prompt = tree
            .prompt(&current)
            .ok_or_else(|| CaError::Config(format!("missing prompt for node '{current}'")))?;

        if !ctx.json_output {
            println!("{}", prompt.bold());
            print!("> ");
            std::io::stdout().flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(CaError::Config(
                "input ended before the assessment finished".to_string(),
            ));
        }

        let Ok(rating) = line.trim().parse::<f64>() else {
            eprintln!("Please enter a number between 0.0 and 1.0");
            continue;
        };

        match tree.advance(&current, rating) {
            Ok(next) => {
                skills.push(SkillRating {
                    skill: skill_name(&current).to_string(),
                    rating,
                });
                current = next.to_string();
            }
            Err(CaError::InvalidRating(_)) => {
                eprintln!("Please enter a number between 0.0 and 1.0");
            }
            Err(err) => return Err(err),
        }
    }

    Ok((current, skills))
}
