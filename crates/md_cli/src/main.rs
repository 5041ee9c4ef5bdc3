//! Match Simulation CLI
//!
//! Runs the engine against a match request JSON file, or against a
//! generated demo fixture when no input is available.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use md_core::{
    Formation, MatchRequest, MatchResult, Player, PlayerAttributes, Position, Team, TeamSide,
    TeamTactics, SCHEMA_VERSION,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "md_cli")]
#[command(about = "Deterministic football match simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a match from a request JSON file
    Simulate {
        /// Input match request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Print the raw result JSON instead of the report
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Simulate a generated demo fixture
    Demo {
        /// Simulation seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Print the raw result JSON instead of the report
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { r#in, json } => {
            let request_json = std::fs::read_to_string(&r#in)
                .with_context(|| format!("reading {}", r#in.display()))?;
            let result_json = md_core::simulate_match_json(&request_json)
                .context("simulation failed")?;
            if json {
                println!("{}", result_json);
            } else {
                let result: MatchResult = serde_json::from_str(&result_json)?;
                print_report(&result);
            }
        }
        Commands::Demo { seed, json } => {
            let request = demo_request(seed);
            let result = md_core::simulate_match(request).context("simulation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }
    }
    Ok(())
}

fn print_report(result: &MatchResult) {
    println!(
        "Final score: {} - {}",
        result.score[TeamSide::Home],
        result.score[TeamSide::Away]
    );
    println!(
        "Half time:   {} - {}",
        result.half_time_score[TeamSide::Home],
        result.half_time_score[TeamSide::Away]
    );
    if let Some(shootout) = &result.penalty_shootout {
        println!(
            "Shootout:    {} - {} (team {} wins)",
            shootout.score[TeamSide::Home],
            shootout.score[TeamSide::Away],
            shootout.winner
        );
    }
    println!();

    let b = &result.box_score;
    println!("{:<16} {:>6} {:>6}", "", "Home", "Away");
    for (label, pair) in [
        ("Shots", &b.shots),
        ("On target", &b.shots_on_target),
        ("Corners", &b.corners),
        ("Fouls", &b.fouls),
        ("Offsides", &b.offsides),
        ("Yellow cards", &b.yellow_cards),
        ("Red cards", &b.red_cards),
    ] {
        println!(
            "{:<16} {:>6} {:>6}",
            label,
            pair[TeamSide::Home],
            pair[TeamSide::Away]
        );
    }
    println!(
        "{:<16} {:>5.1}% {:>5.1}%",
        "Possession",
        b.possession[TeamSide::Home],
        b.possession[TeamSide::Away]
    );
    println!();

    for line in &result.play_by_play {
        println!("{}", line);
    }
}

/// Two evenly-matched demo squads, so the binary runs without an input
/// file.
fn demo_request(seed: u64) -> MatchRequest {
    MatchRequest {
        schema_version: SCHEMA_VERSION,
        seed,
        home_team: demo_team(1, "Rovers", 100),
        away_team: demo_team(2, "United", 200),
    }
}

fn demo_team(id: u32, name: &str, id_base: u32) -> Team {
    let mut positions = vec![Position::GK];
    positions.extend([Position::LB, Position::CB, Position::CB, Position::RB]);
    positions.extend([Position::CM, Position::CM, Position::LM, Position::RM]);
    positions.extend([Position::ST, Position::ST]);
    positions.extend([
        Position::GK,
        Position::CB,
        Position::CB,
        Position::CM,
        Position::CM,
        Position::ST,
        Position::ST,
    ]);
    Team {
        id,
        name: name.to_string(),
        formation: Formation::F442,
        players: positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let mut p =
                    Player::new(id_base + i as u32, format!("{} {}", name, i + 1), pos);
                // Spread ratings a little so the demo teams are not clones.
                let rating = 48 + ((id_base as usize + i * 7) % 17) as u8;
                p.attributes = PlayerAttributes::uniform(rating);
                p.attributes.stamina = 45 + ((i * 11) % 30) as u8;
                p
            })
            .collect(),
        tactics: TeamTactics::default(),
    }
}
