//! leaguectl
//!
//! Command-line interface over a league data directory. Every command
//! prints its result as JSON on stdout; logs go to stderr.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use leaguestore::config::SnapshotFormat;
use leaguestore::model::{Id, MatchStatus, NewCollege, NewMatch, NewPlayer, NewTeam, TeamStatus};
use leaguestore::query::{CollegeFilter, MatchFilter, TeamFilter};
use leaguestore::{Config, Engine};

/// leaguectl
#[derive(Parser, Debug)]
#[command(name = "leaguectl")]
#[command(about = "Manage colleges, teams, fixtures and standings of a tournament")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./league_data")]
    data_dir: String,

    /// Snapshot format (json or binary)
    #[arg(short, long, default_value = "json")]
    format: SnapshotFormat,

    /// Do not seed sports and venues into a new data directory
    #[arg(long)]
    no_seed: bool,

    /// Skip fsync on snapshot writes
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all sports
    Sports,

    /// Show one sport
    Sport { sport_id: Id },

    /// List all venues
    Venues,

    /// List colleges
    Colleges {
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },

    /// Show one college
    College { college_id: Id },

    /// Register a college
    RegisterCollege {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        contact_person: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// List teams (enriched with college and sport)
    Teams {
        #[arg(long)]
        sport: Option<Id>,
        #[arg(long)]
        college: Option<Id>,
        #[arg(long)]
        status: Option<TeamStatus>,
    },

    /// Show one team
    Team { team_id: Id },

    /// List a team's players
    Players { team_id: Id },

    /// Register a team with its roster
    RegisterTeam {
        #[arg(long)]
        name: String,
        #[arg(long)]
        sport: Id,
        #[arg(long)]
        college: Id,
        #[arg(long)]
        captain_name: String,
        #[arg(long)]
        captain_email: String,
        #[arg(long)]
        captain_phone: String,
        /// Player name (repeat for each player)
        #[arg(long = "player", required = true)]
        players: Vec<String>,
    },

    /// Set a team's status (pending, approved, rejected)
    SetStatus { team_id: Id, status: TeamStatus },

    /// List matches in kick-off order
    Matches {
        #[arg(long)]
        sport: Option<Id>,
        /// Match date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        status: Option<MatchStatus>,
    },

    /// Schedule a match
    Schedule {
        #[arg(long)]
        sport: Id,
        #[arg(long)]
        team1: Id,
        #[arg(long)]
        team2: Id,
        #[arg(long)]
        venue: Id,
        /// Match date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Kick-off time (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
    },

    /// Mark a scheduled match as ongoing
    Start { match_id: Id },

    /// Record a match's final score
    Result {
        match_id: Id,
        team1_score: u32,
        team2_score: u32,
    },

    /// Ranked standings of a sport
    Standings { sport_id: Id },

    /// Dashboard summary
    Dashboard,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,leaguestore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .snapshot_format(args.format)
        .seed_reference_data(!args.no_seed)
        .sync_writes(!args.no_sync)
        .build();

    let engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open data directory {}: {}", args.data_dir, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&engine, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(engine: &Engine, command: Commands) -> leaguestore::Result<()> {
    match command {
        Commands::Sports => print_json(&engine.list_sports()),
        Commands::Sport { sport_id } => print_json(&engine.get_sport(sport_id)?),
        Commands::Venues => print_json(&engine.list_venues()),
        Commands::Colleges { state, city } => {
            print_json(&engine.list_colleges(&CollegeFilter { state, city }))
        }
        Commands::College { college_id } => print_json(&engine.get_college(college_id)?),
        Commands::RegisterCollege {
            name,
            code,
            city,
            state,
            contact_person,
            email,
            phone,
        } => print_json(&engine.create_college(NewCollege {
            college_name: name,
            college_code: code,
            city,
            state,
            contact_person,
            email,
            phone,
        })?),
        Commands::Teams {
            sport,
            college,
            status,
        } => print_json(&engine.list_teams(&TeamFilter {
            sport_id: sport,
            college_id: college,
            status,
        })),
        Commands::Team { team_id } => print_json(&engine.get_team(team_id)?),
        Commands::Players { team_id } => print_json(&engine.team_players(team_id)),
        Commands::RegisterTeam {
            name,
            sport,
            college,
            captain_name,
            captain_email,
            captain_phone,
            players,
        } => print_json(&engine.create_team(NewTeam {
            team_name: name,
            sport_id: sport,
            college_id: college,
            captain_name,
            captain_email,
            captain_phone,
            players: players.into_iter().map(NewPlayer::named).collect(),
        })?),
        Commands::SetStatus { team_id, status } => {
            print_json(&engine.set_team_status(team_id, status)?)
        }
        Commands::Matches {
            sport,
            date,
            status,
        } => print_json(&engine.list_matches(&MatchFilter {
            sport_id: sport,
            date,
            status,
        })),
        Commands::Schedule {
            sport,
            team1,
            team2,
            venue,
            date,
            time,
        } => print_json(&engine.create_match(NewMatch {
            sport_id: sport,
            team1_id: team1,
            team2_id: team2,
            venue_id: venue,
            match_date: date,
            start_time: time,
        })?),
        Commands::Start { match_id } => print_json(&engine.start_match(match_id)?),
        Commands::Result {
            match_id,
            team1_score,
            team2_score,
        } => print_json(&engine.complete_match(match_id, team1_score, team2_score)?),
        Commands::Standings { sport_id } => print_json(&engine.standings(sport_id)),
        Commands::Dashboard => print_json(&engine.dashboard()),
    }
}

fn print_json<T: Serialize>(value: &T) -> leaguestore::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Accept kick-off times with or without seconds
fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}
