//! Engine Module
//!
//! The league engine that coordinates all components.
//!
//! ## Responsibilities
//! - Open the store and seed reference data
//! - Enforce uniqueness rules on registration
//! - Drive the team approval and match result workflows into standings
//! - Serve enriched listings, ranked standings and the dashboard

use std::path::Path;

use chrono::Utc;

use crate::config::Config;
use crate::dashboard::{self, DashboardSnapshot};
use crate::error::{LeagueError, Result};
use crate::model::{
    College, Id, Match, MatchStatus, NewCollege, NewMatch, NewTeam, Player, Record, Sport, Team,
    TeamStatus, Venue,
};
use crate::query::{CollegeFilter, MatchFilter, TeamFilter};
use crate::resolver::{match_view, standing_view, team_view, Lookup, MatchView, StandingView, TeamView};
use crate::standings::{self, ResultEntry};
use crate::storage::{next_id, CollectionWriter, IdAllocator, Store};

/// The league engine
///
/// ## Concurrency Model: Single Writer per Collection
///
/// - **Writes**: each collection has its own writer lock. Loading the
///   collection, allocating IDs, checking uniqueness and replacing the
///   snapshot all happen while it is held.
///   Multi-collection writes follow the store's lock order
///   (colleges → teams → players → matches → standings) and hold every
///   writer until all of them are saved, so a failed write leaves no
///   collection changed.
///
/// - **Reads**: never take a lock. Each listing loads whole snapshots and
///   builds its own indexes, so reads run concurrently with each other and
///   with writers of any collection.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// One collection per entity type
    store: Store,
}

impl Engine {
    /// Open or create an engine with the given config
    pub fn open(config: Config) -> Result<Self> {
        let store = Store::open(&config)?;
        Ok(Self { config, store })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Reference Data
    // =========================================================================

    pub fn list_sports(&self) -> Vec<Sport> {
        self.store.sports().load_or_empty()
    }

    pub fn get_sport(&self, sport_id: Id) -> Result<Sport> {
        self.store.sports().find(sport_id)
    }

    pub fn list_venues(&self) -> Vec<Venue> {
        self.store.venues().load_or_empty()
    }

    // =========================================================================
    // Colleges
    // =========================================================================

    pub fn list_colleges(&self, filter: &CollegeFilter) -> Vec<College> {
        let mut colleges = self.store.colleges().load_or_empty();
        colleges.retain(|c| filter.matches(c));
        colleges
    }

    pub fn get_college(&self, college_id: Id) -> Result<College> {
        self.store.colleges().find(college_id)
    }

    /// Register a college
    ///
    /// Fails with `DuplicateKey` when the code or email is already taken.
    pub fn create_college(&self, data: NewCollege) -> Result<College> {
        let college = self.store.colleges().update(|colleges| {
            if let Some(existing) = colleges
                .iter()
                .find(|c| c.college_code == data.college_code || c.email == data.email)
            {
                let field = if existing.college_code == data.college_code {
                    format!("college code '{}'", data.college_code)
                } else {
                    format!("email '{}'", data.email)
                };
                return Err(LeagueError::DuplicateKey(format!("{} already registered", field)));
            }

            let college = data.into_record(next_id(colleges), Utc::now());
            colleges.push(college.clone());
            Ok(college)
        })?;

        tracing::debug!(college_id = college.college_id, code = %college.college_code, "college registered");
        Ok(college)
    }

    // =========================================================================
    // Teams
    // =========================================================================

    /// Teams matching `filter`, enriched with college and sport
    pub fn list_teams(&self, filter: &TeamFilter) -> Vec<TeamView> {
        let teams = self.store.teams().load_or_empty();
        let colleges = self.store.colleges().load_or_empty();
        let sports = self.store.sports().load_or_empty();

        let college_index = Lookup::new(&colleges);
        let sport_index = Lookup::new(&sports);

        teams
            .iter()
            .filter(|t| filter.matches(t))
            .map(|t| team_view(t, &college_index, &sport_index))
            .collect()
    }

    /// Teams awaiting approval
    pub fn pending_teams(&self) -> Vec<TeamView> {
        self.list_teams(&TeamFilter::status(TeamStatus::Pending))
    }

    /// Approved teams of one sport
    pub fn sport_teams(&self, sport_id: Id) -> Vec<TeamView> {
        self.list_teams(&TeamFilter::sport(sport_id).with_status(TeamStatus::Approved))
    }

    pub fn get_team(&self, team_id: Id) -> Result<TeamView> {
        let team = self.store.teams().find(team_id)?;
        let colleges = self.store.colleges().load_or_empty();
        let sports = self.store.sports().load_or_empty();
        Ok(team_view(&team, &Lookup::new(&colleges), &Lookup::new(&sports)))
    }

    /// Register a team and its roster
    ///
    /// Fails with `DuplicateRegistration` when the college already has a team
    /// in this sport. New teams start pending with the fee unpaid.
    pub fn create_team(&self, data: NewTeam) -> Result<Team> {
        if data.players.is_empty() {
            return Err(LeagueError::InvalidInput(
                "at least one player is required".to_string(),
            ));
        }

        let mut teams = self.store.teams().lock()?;
        if teams
            .records()
            .iter()
            .any(|t| t.sport_id == data.sport_id && t.college_id == data.college_id)
        {
            return Err(LeagueError::DuplicateRegistration {
                sport_id: data.sport_id,
                college_id: data.college_id,
            });
        }

        let now = Utc::now();
        let NewTeam {
            team_name,
            sport_id,
            college_id,
            captain_name,
            captain_email,
            captain_phone,
            players,
        } = data;

        let team = Team {
            team_id: teams.next_id(),
            team_name,
            sport_id,
            college_id,
            captain_name,
            captain_email,
            captain_phone,
            status: TeamStatus::Pending,
            registration_fee_paid: false,
            created_at: now,
        };
        teams.records_mut().push(team.clone());

        let roster_size = players.len();
        let mut roster = self.store.players().lock()?;
        let previous_players = roster.records().to_vec();
        let mut ids = IdAllocator::for_records(roster.records());
        for player in players {
            let record = player.into_record(ids.allocate(), team.team_id, &team.captain_name, now);
            roster.records_mut().push(record);
        }
        commit_pair(&teams, &mut roster, previous_players)?;

        tracing::debug!(
            team_id = team.team_id,
            sport_id = team.sport_id,
            college_id = team.college_id,
            players = roster_size,
            "team registered"
        );
        Ok(team)
    }

    /// Roster of a team, in registration order
    pub fn team_players(&self, team_id: Id) -> Vec<Player> {
        let mut players = self.store.players().load_or_empty();
        players.retain(|p| p.team_id == team_id);
        players
    }

    /// Change a team's approval status
    ///
    /// Approval registers the team's standings row unless it already has one.
    pub fn set_team_status(&self, team_id: Id, status: TeamStatus) -> Result<Team> {
        let mut teams = self.store.teams().lock()?;
        let team = {
            let team = teams
                .records_mut()
                .iter_mut()
                .find(|t| t.team_id == team_id)
                .ok_or_else(|| LeagueError::not_found(Team::ENTITY, team_id))?;
            team.status = status;
            team.clone()
        };

        if status != TeamStatus::Approved {
            teams.save()?;
        } else {
            let mut rows = self.store.standings().lock()?;
            let previous_rows = rows.records().to_vec();
            let registered = standings::register(rows.records_mut(), &team, Utc::now());
            commit_pair(&teams, &mut rows, previous_rows)?;
            if let Some(row) = registered {
                tracing::debug!(
                    standing_id = row.standing_id,
                    sport_id = row.sport_id,
                    team_id = row.team_id,
                    "standing registered"
                );
            }
        }

        tracing::debug!(team_id, %status, "team status updated");
        Ok(team)
    }

    // =========================================================================
    // Matches
    // =========================================================================

    /// Matches matching `filter`, enriched and in kick-off order
    pub fn list_matches(&self, filter: &MatchFilter) -> Vec<MatchView> {
        let mut matches = self.store.matches().load_or_empty();
        matches.retain(|m| filter.matches(m));
        matches.sort_by_key(Match::kickoff);

        let sports = self.store.sports().load_or_empty();
        let teams = self.store.teams().load_or_empty();
        let colleges = self.store.colleges().load_or_empty();
        let venues = self.store.venues().load_or_empty();

        let sport_index = Lookup::new(&sports);
        let team_index = Lookup::new(&teams);
        let college_index = Lookup::new(&colleges);
        let venue_index = Lookup::new(&venues);

        matches
            .iter()
            .map(|m| match_view(m, &sport_index, &team_index, &college_index, &venue_index))
            .collect()
    }

    pub fn get_match(&self, match_id: Id) -> Result<MatchView> {
        let fixture = self.store.matches().find(match_id)?;
        let sports = self.store.sports().load_or_empty();
        let teams = self.store.teams().load_or_empty();
        let colleges = self.store.colleges().load_or_empty();
        let venues = self.store.venues().load_or_empty();
        Ok(match_view(
            &fixture,
            &Lookup::new(&sports),
            &Lookup::new(&teams),
            &Lookup::new(&colleges),
            &Lookup::new(&venues),
        ))
    }

    /// Schedule a match (scheduled, nil-nil, no winner)
    pub fn create_match(&self, data: NewMatch) -> Result<Match> {
        if data.team1_id == data.team2_id {
            return Err(LeagueError::InvalidInput(format!(
                "team {} cannot play itself",
                data.team1_id
            )));
        }

        let fixture = self
            .store
            .matches()
            .insert(|match_id| data.into_record(match_id, Utc::now()))?;

        tracing::debug!(
            match_id = fixture.match_id,
            sport_id = fixture.sport_id,
            date = %fixture.match_date,
            "match scheduled"
        );
        Ok(fixture)
    }

    /// Move a scheduled match to ongoing
    pub fn start_match(&self, match_id: Id) -> Result<Match> {
        self.store.matches().update(|matches| {
            let fixture = find_match(matches, match_id)?;
            if fixture.status != MatchStatus::Scheduled {
                return Err(LeagueError::InvalidTransition(format!(
                    "match {} is {}, only scheduled matches can start",
                    match_id, fixture.status
                )));
            }
            fixture.status = MatchStatus::Ongoing;
            Ok(fixture.clone())
        })
    }

    /// Record the final score and fold it into both teams' standings
    ///
    /// A side without a standings row (never approved) is skipped. A match
    /// can be completed once. Nothing is persisted unless both the match and
    /// the standings are written.
    pub fn complete_match(&self, match_id: Id, team1_score: u32, team2_score: u32) -> Result<Match> {
        let mut matches = self.store.matches().lock()?;
        let fixture = {
            let fixture = find_match(matches.records_mut(), match_id)?;
            if fixture.status == MatchStatus::Completed {
                return Err(LeagueError::InvalidTransition(format!(
                    "match {} is already completed",
                    match_id
                )));
            }
            fixture.status = MatchStatus::Completed;
            fixture.team1_score = team1_score;
            fixture.team2_score = team2_score;
            fixture.winner_team_id = match team1_score.cmp(&team2_score) {
                std::cmp::Ordering::Greater => Some(fixture.team1_id),
                std::cmp::Ordering::Less => Some(fixture.team2_id),
                std::cmp::Ordering::Equal => None,
            };
            fixture.clone()
        };

        let sides = [
            ResultEntry {
                team_id: fixture.team1_id,
                scored: team1_score,
                conceded: team2_score,
            },
            ResultEntry {
                team_id: fixture.team2_id,
                scored: team2_score,
                conceded: team1_score,
            },
        ];
        let rule = self.config.points_rule;
        let mut rows = self.store.standings().lock()?;
        let previous_rows = rows.records().to_vec();
        let now = Utc::now();
        for side in sides {
            if !standings::record_result(rows.records_mut(), fixture.sport_id, side, &rule, now) {
                tracing::warn!(
                    match_id,
                    sport_id = fixture.sport_id,
                    team_id = side.team_id,
                    "team has no standing in this sport, result not counted"
                );
            }
        }
        commit_pair(&matches, &mut rows, previous_rows)?;

        tracing::debug!(match_id, team1_score, team2_score, "match completed");
        Ok(fixture)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Standings of one sport, ranked and enriched
    pub fn standings(&self, sport_id: Id) -> Vec<StandingView> {
        let mut rows = self.store.standings().load_or_empty();
        rows.retain(|s| s.sport_id == sport_id);

        let teams = self.store.teams().load_or_empty();
        let colleges = self.store.colleges().load_or_empty();
        let team_index = Lookup::new(&teams);
        let college_index = Lookup::new(&colleges);

        standings::rank(rows)
            .iter()
            .map(|row| standing_view(row, &team_index, &college_index))
            .collect()
    }

    /// Overview counts, groupings and recent registrations
    pub fn dashboard(&self) -> DashboardSnapshot {
        let sports = self.store.sports().load_or_empty();
        let colleges = self.store.colleges().load_or_empty();
        let teams = self.store.teams().load_or_empty();
        let matches = self.store.matches().load_or_empty();

        dashboard::summarize(
            &sports,
            &colleges,
            &teams,
            &matches,
            self.config.recent_teams_limit,
        )
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Persist a write that spans two collections
///
/// `dependent` is saved first, then `primary`. If `primary` cannot be saved,
/// `dependent` is put back to `previous` so neither collection keeps the
/// change. Both writers must be held in lock order.
fn commit_pair<P: Record, D: Record>(
    primary: &CollectionWriter<'_, P>,
    dependent: &mut CollectionWriter<'_, D>,
    previous: Vec<D>,
) -> Result<()> {
    dependent.save()?;
    if let Err(e) = primary.save() {
        *dependent.records_mut() = previous;
        if let Err(undo) = dependent.save() {
            tracing::error!(
                collection = D::COLLECTION,
                error = %undo,
                "failed to roll back collection after aborted write"
            );
        }
        return Err(e);
    }
    Ok(())
}

fn find_match(matches: &mut [Match], match_id: Id) -> Result<&mut Match> {
    matches
        .iter_mut()
        .find(|m| m.match_id == match_id)
        .ok_or_else(|| LeagueError::not_found(Match::ENTITY, match_id))
}
