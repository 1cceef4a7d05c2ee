//! Dashboard views: fetch through the client, derive through the builder.
//!
//! Each view keeps "upstream unavailable" and "nothing there yet" as distinct
//! states so a front-end cannot render one as the other.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::adapter::outbound::fpl::LeagueDataClient;
use crate::domain::entry;
use crate::domain::summary::{self, Bucket, FormingSummary, Phase, Summary};
use crate::domain::{
    BootstrapSnapshot, EntrySummary, Fixture, Gameweek, GameweekId, LeagueId, LeagueStandings,
    NewEntry, PicksResult, StandingsEntry, TeamId, Transfer,
};
use crate::port::outbound::Transport;

/// Knobs for shaping a league view.
#[derive(Debug, Clone, Copy)]
pub struct ViewRules {
    pub minimum_squad_size: usize,
    pub podium_size: usize,
    pub bucket_width: i64,
}

impl Default for ViewRules {
    fn default() -> Self {
        Self {
            minimum_squad_size: summary::MINIMUM_SQUAD_SIZE,
            podium_size: 3,
            bucket_width: 10,
        }
    }
}

/// Which league a view describes and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueLabel {
    pub id: LeagueId,
    pub name: String,
    pub gameweek: GameweekId,
}

/// Everything the league page shows, by lifecycle phase.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LeagueView {
    /// The client returned nothing: render "data unavailable".
    Unavailable { league: LeagueLabel },
    /// The league exists but has no teams: render "no data yet".
    Empty { league: LeagueLabel },
    Forming {
        league: LeagueLabel,
        summary: FormingSummary,
        entries: Vec<NewEntry>,
    },
    Active {
        league: LeagueLabel,
        summary: Summary,
        standings: Vec<StandingsEntry>,
        podium: Vec<StandingsEntry>,
        total_distribution: Vec<Bucket>,
        gameweek_distribution: Vec<Bucket>,
    },
}

impl LeagueView {
    #[must_use]
    pub const fn league(&self) -> &LeagueLabel {
        match self {
            Self::Unavailable { league }
            | Self::Empty { league }
            | Self::Forming { league, .. }
            | Self::Active { league, .. } => league,
        }
    }

    /// Lifecycle phase, `None` when the data was unavailable.
    #[must_use]
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::Unavailable { .. } => None,
            Self::Empty { .. } => Some(Phase::Empty),
            Self::Forming { .. } => Some(Phase::Forming),
            Self::Active { .. } => Some(Phase::Active),
        }
    }

    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Shape already-fetched league data into a view.
#[must_use]
pub fn build_league_view(
    league_id: LeagueId,
    gameweek: GameweekId,
    league: Option<LeagueStandings>,
    rules: &ViewRules,
) -> LeagueView {
    let Some(league) = league else {
        return LeagueView::Unavailable {
            league: LeagueLabel {
                id: league_id,
                name: String::new(),
                gameweek,
            },
        };
    };

    let label = LeagueLabel {
        id: league_id,
        name: league.league.name.clone(),
        gameweek,
    };
    let standings = league.standings();
    let new_entries = league.new_entries();

    match summary::classify_phase(standings, new_entries) {
        Phase::Empty => LeagueView::Empty { league: label },
        Phase::Forming => LeagueView::Forming {
            league: label,
            summary: summary::summarize_forming(new_entries, rules.minimum_squad_size),
            entries: new_entries.to_vec(),
        },
        Phase::Active => {
            let totals: Vec<i64> = standings.iter().map(|e| e.total_points).collect();
            let gameweek_points: Vec<i64> = standings.iter().map(|e| e.event_points).collect();
            LeagueView::Active {
                league: label,
                summary: summary::summarize_with(standings, rules.minimum_squad_size),
                podium: summary::top_performers(standings, rules.podium_size)
                    .into_iter()
                    .cloned()
                    .collect(),
                total_distribution: summary::distribution(&totals, rules.bucket_width),
                gameweek_distribution: summary::distribution(
                    &gameweek_points,
                    rules.bucket_width,
                ),
                standings: standings.to_vec(),
            }
        }
    }
}

/// Fetch a league and the current gameweek, then build its view.
pub async fn league_view<T: Transport>(
    client: &LeagueDataClient<T>,
    league_id: LeagueId,
    rules: &ViewRules,
) -> LeagueView {
    let (league, gameweek) = tokio::join!(
        client.fetch_league_standings(league_id),
        client.current_gameweek()
    );
    let view = build_league_view(league_id, gameweek, league, rules);
    debug!(
        league_id = %league_id,
        phase = view.phase().map_or("unavailable", Phase::label),
        "Built league view"
    );
    view
}

/// Teams in `league_id` whose names match any of `markers`.
///
/// `None` when the league is unavailable; an empty vec when nothing matches.
pub async fn representatives<T, S>(
    client: &LeagueDataClient<T>,
    league_id: LeagueId,
    markers: &[S],
) -> Option<Vec<StandingsEntry>>
where
    T: Transport,
    S: AsRef<str>,
{
    let league = client.fetch_league_standings(league_id).await?;
    Some(
        summary::filter_by_name_substring(league.standings(), markers)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// One row of a team sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickRow {
    pub slot: u8,
    pub player: String,
    pub position: &'static str,
    pub club: String,
    pub multiplier: u8,
    pub captain: bool,
    pub vice_captain: bool,
}

/// A team's picks resolved against bootstrap player names.
#[derive(Debug, Clone, Serialize)]
pub struct PicksView {
    pub team: TeamId,
    pub gameweek: GameweekId,
    /// Team and manager name, when the entry endpoint answered.
    pub team_name: Option<String>,
    pub manager: Option<String>,
    pub points: i64,
    pub net_points: i64,
    /// Net transfer spend this gameweek in tenths of a million, when known.
    pub transfer_spend: Option<i64>,
    pub active_chip: Option<String>,
    pub rows: Vec<PickRow>,
}

/// Resolve picks against bootstrap metadata.
///
/// Without bootstrap the rows fall back to raw element ids.
#[must_use]
pub fn build_picks_view(
    team: TeamId,
    gameweek: GameweekId,
    picks: &PicksResult,
    bootstrap: Option<&BootstrapSnapshot>,
) -> PicksView {
    let rows = picks
        .picks
        .iter()
        .map(|pick| {
            let player = bootstrap.and_then(|b| b.player(pick.element));
            let club = player
                .and_then(|p| bootstrap.and_then(|b| b.club(p.team)))
                .map(|c| c.short_name.clone())
                .unwrap_or_default();
            PickRow {
                slot: pick.position,
                player: player.map_or_else(|| format!("#{}", pick.element), |p| p.web_name.clone()),
                position: player.map_or("?", |p| p.position()),
                club,
                multiplier: pick.multiplier,
                captain: pick.is_captain,
                vice_captain: pick.is_vice_captain,
            }
        })
        .collect();

    PicksView {
        team,
        gameweek,
        team_name: None,
        manager: None,
        transfer_spend: None,
        points: picks.entry_history.as_ref().map_or(0, |h| h.points),
        net_points: picks.net_points(),
        active_chip: picks.active_chip.clone(),
        rows,
    }
}

impl PicksView {
    /// Attach the team's name and this gameweek's transfer spend.
    #[must_use]
    pub fn with_entry(
        mut self,
        summary: Option<&EntrySummary>,
        transfers: Option<&[Transfer]>,
    ) -> Self {
        if let Some(summary) = summary {
            self.team_name = Some(summary.name.clone());
            self.manager = Some(summary.manager_name());
        }
        self.transfer_spend = transfers.map(|t| entry::transfer_spend(t, self.gameweek));
        self
    }
}

/// Fetch a team sheet; `gameweek` defaults to the current one.
///
/// Only the picks are required. Missing bootstrap, entry or transfer data
/// degrades the view instead of failing it.
pub async fn picks_view<T: Transport>(
    client: &LeagueDataClient<T>,
    team: TeamId,
    gameweek: Option<GameweekId>,
) -> Option<PicksView> {
    let gameweek = match gameweek {
        Some(gw) => gw,
        None => client.current_gameweek().await,
    };
    let (picks, bootstrap, summary, transfers) = tokio::join!(
        client.fetch_team_picks(team, gameweek),
        client.fetch_bootstrap(),
        client.fetch_entry(team),
        client.fetch_transfers(team)
    );
    let picks = picks?;
    Some(
        build_picks_view(team, gameweek, &picks, bootstrap.as_ref())
            .with_entry(summary.as_ref(), transfers.as_deref()),
    )
}

/// One fixture with club names resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRow {
    pub home: String,
    pub away: String,
    pub kickoff: Option<DateTime<Utc>>,
    /// `"2-1"` once the match has a score.
    pub score: Option<String>,
    pub finished: bool,
}

/// The current gameweek, what follows it, and its fixtures.
#[derive(Debug, Clone, Serialize)]
pub struct GameweekOverview {
    pub current: GameweekId,
    pub detail: Option<Gameweek>,
    pub next: Option<Gameweek>,
    pub total_players: u64,
    pub fixtures: Vec<FixtureRow>,
}

#[must_use]
pub fn build_gameweek_overview(
    bootstrap: &BootstrapSnapshot,
    fixtures: Option<&[Fixture]>,
) -> GameweekOverview {
    let current = bootstrap.current_gameweek();
    let club = |id: u32| {
        bootstrap
            .club(id)
            .map_or_else(|| format!("#{id}"), |c| c.short_name.clone())
    };
    let fixtures = fixtures
        .map(|all| {
            entry::fixtures_in(all, current)
                .into_iter()
                .map(|f| FixtureRow {
                    home: club(f.team_h),
                    away: club(f.team_a),
                    kickoff: f.kickoff_time,
                    score: f
                        .team_h_score
                        .zip(f.team_a_score)
                        .map(|(h, a)| format!("{h}-{a}")),
                    finished: f.finished,
                })
                .collect()
        })
        .unwrap_or_default();

    GameweekOverview {
        current,
        detail: bootstrap.current().cloned(),
        next: bootstrap.next().cloned(),
        total_players: bootstrap.total_players,
        fixtures,
    }
}

/// `None` when bootstrap is unavailable; fixtures are optional.
pub async fn gameweek_overview<T: Transport>(
    client: &LeagueDataClient<T>,
) -> Option<GameweekOverview> {
    let (bootstrap, fixtures) = tokio::join!(client.fetch_bootstrap(), client.fetch_fixtures());
    let bootstrap = bootstrap?;
    Some(build_gameweek_overview(&bootstrap, fixtures.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Club, LeagueInfo, Page, Pick, Player};

    fn standing(id: u64, name: &str, total: i64, event: i64, rank: u32) -> StandingsEntry {
        StandingsEntry {
            entry_id: TeamId::new(id),
            entry_name: name.into(),
            manager_name: String::new(),
            total_points: total,
            event_points: event,
            rank: Some(rank),
            last_rank: None,
        }
    }

    fn league(standings: Vec<StandingsEntry>, new_entries: Vec<NewEntry>) -> LeagueStandings {
        LeagueStandings {
            league: LeagueInfo {
                id: Some(LeagueId::new(7)),
                name: "NFO Mini".into(),
            },
            standings: Page {
                results: standings,
                ..Page::default()
            },
            new_entries: Page {
                results: new_entries,
                ..Page::default()
            },
        }
    }

    #[test]
    fn missing_league_is_unavailable_not_empty() {
        let view = build_league_view(
            LeagueId::new(7),
            GameweekId::new(4),
            None,
            &ViewRules::default(),
        );
        assert!(view.is_unavailable());
        assert_eq!(view.phase(), None);
        assert_eq!(view.league().gameweek, GameweekId::new(4));
    }

    #[test]
    fn league_without_rows_is_empty() {
        let view = build_league_view(
            LeagueId::new(7),
            GameweekId::FIRST,
            Some(league(vec![], vec![])),
            &ViewRules::default(),
        );
        assert!(matches!(view, LeagueView::Empty { .. }));
        assert_eq!(view.league().name, "NFO Mini");
    }

    #[test]
    fn forming_league_reports_readiness() {
        let joiners = (1..=4)
            .map(|i| NewEntry {
                entry_id: TeamId::new(i),
                entry_name: format!("Team {i}"),
                manager_first_name: String::new(),
                manager_last_name: String::new(),
                joined_at: None,
            })
            .collect();
        let view = build_league_view(
            LeagueId::new(7),
            GameweekId::FIRST,
            Some(league(vec![], joiners)),
            &ViewRules::default(),
        );
        match view {
            LeagueView::Forming { summary, entries, .. } => {
                assert_eq!(summary.player_count, 4);
                assert!(!summary.ready);
                assert_eq!(entries.len(), 4);
            }
            other => panic!("expected forming view, got {other:?}"),
        }
    }

    #[test]
    fn active_league_has_podium_and_distributions() {
        let view = build_league_view(
            LeagueId::new(7),
            GameweekId::new(5),
            Some(league(
                vec![
                    standing(1, "A", 300, 70, 1),
                    standing(2, "B", 280, 45, 2),
                    standing(3, "C", 250, 52, 3),
                    standing(4, "D", 120, 12, 4),
                ],
                vec![],
            )),
            &ViewRules::default(),
        );
        match view {
            LeagueView::Active {
                summary,
                podium,
                total_distribution,
                gameweek_distribution,
                standings,
                ..
            } => {
                assert_eq!(summary.player_count, 4);
                assert_eq!(summary.top_gw, 70);
                assert_eq!(podium.len(), 3);
                assert_eq!(podium[0].entry_name, "A");
                assert_eq!(standings.len(), 4);
                let counted: usize = total_distribution.iter().map(|b| b.count).sum();
                assert_eq!(counted, 4);
                let counted: usize = gameweek_distribution.iter().map(|b| b.count).sum();
                assert_eq!(counted, 4);
            }
            other => panic!("expected active view, got {other:?}"),
        }
    }

    #[test]
    fn view_serializes_with_state_tag() {
        let view = build_league_view(
            LeagueId::new(7),
            GameweekId::FIRST,
            Some(league(vec![], vec![])),
            &ViewRules::default(),
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "empty");
        assert_eq!(json["league"]["id"], 7);
    }

    #[test]
    fn picks_resolve_player_names() {
        let bootstrap = BootstrapSnapshot {
            teams: vec![Club {
                id: 16,
                name: "Nott'm Forest".into(),
                short_name: "NFO".into(),
            }],
            elements: vec![Player {
                id: 7,
                web_name: "Wood".into(),
                first_name: "Chris".into(),
                second_name: "Wood".into(),
                team: 16,
                element_type: 4,
                now_cost: 75,
                total_points: 14,
            }],
            ..BootstrapSnapshot::default()
        };
        let picks = PicksResult {
            picks: vec![
                Pick {
                    element: 7,
                    position: 1,
                    multiplier: 2,
                    is_captain: true,
                    is_vice_captain: false,
                },
                Pick {
                    element: 99,
                    position: 12,
                    multiplier: 0,
                    is_captain: false,
                    is_vice_captain: false,
                },
            ],
            ..PicksResult::default()
        };

        let view = build_picks_view(TeamId::new(9), GameweekId::new(3), &picks, Some(&bootstrap));
        assert_eq!(view.rows[0].player, "Wood");
        assert_eq!(view.rows[0].club, "NFO");
        assert_eq!(view.rows[0].position, "FWD");
        assert!(view.rows[0].captain);
        assert_eq!(view.rows[1].player, "#99");

        let bare = build_picks_view(TeamId::new(9), GameweekId::new(3), &picks, None);
        assert_eq!(bare.rows[0].player, "#7");
        assert_eq!(bare.team_name, None);
    }

    #[test]
    fn entry_details_attach_to_picks() {
        let summary: EntrySummary = serde_json::from_str(
            r#"{"id": 9, "name": "Garibaldi Red", "player_first_name": "Ann",
                "player_last_name": "Smith"}"#,
        )
        .unwrap();
        let transfers: Vec<Transfer> = serde_json::from_str(
            r#"[{"element_in": 1, "element_in_cost": 80, "element_out": 2,
                 "element_out_cost": 75, "entry": 9, "event": 3},
                {"element_in": 4, "element_in_cost": 50, "element_out": 5,
                 "element_out_cost": 45, "entry": 9, "event": 2}]"#,
        )
        .unwrap();

        let picks = PicksResult::default();
        let view = build_picks_view(TeamId::new(9), GameweekId::new(3), &picks, None)
            .with_entry(Some(&summary), Some(&transfers));
        assert_eq!(view.team_name.as_deref(), Some("Garibaldi Red"));
        assert_eq!(view.manager.as_deref(), Some("Ann Smith"));
        assert_eq!(view.transfer_spend, Some(5));
    }

    #[test]
    fn overview_lists_current_fixtures_with_club_names() {
        let bootstrap: BootstrapSnapshot = serde_json::from_str(
            r#"{"events": [{"id": 1, "is_current": false, "finished": true},
                           {"id": 2, "is_current": true},
                           {"id": 3, "is_next": true}],
                "teams": [{"id": 16, "name": "Nott'm Forest", "short_name": "NFO"},
                          {"id": 1, "name": "Arsenal", "short_name": "ARS"}],
                "elements": []}"#,
        )
        .unwrap();
        let fixtures: Vec<Fixture> = serde_json::from_str(
            r#"[{"id": 10, "event": 2, "team_h": 16, "team_a": 1,
                 "team_h_score": 2, "team_a_score": 1, "finished": true},
                {"id": 11, "event": 3, "team_h": 1, "team_a": 16},
                {"id": 12, "event": 2, "team_h": 1, "team_a": 99}]"#,
        )
        .unwrap();

        let overview = build_gameweek_overview(&bootstrap, Some(&fixtures));
        assert_eq!(overview.current, GameweekId::new(2));
        assert_eq!(overview.next.map(|g| g.id), Some(GameweekId::new(3)));
        assert_eq!(overview.fixtures.len(), 2);
        let played = overview
            .fixtures
            .iter()
            .find(|f| f.home == "NFO")
            .unwrap();
        assert_eq!(played.away, "ARS");
        assert_eq!(played.score.as_deref(), Some("2-1"));
        assert!(overview.fixtures.iter().any(|f| f.away == "#99"));

        let bare = build_gameweek_overview(&bootstrap, None);
        assert!(bare.fixtures.is_empty());
    }
}
