//! JSON bodies shaped like the upstream API.

use serde_json::json;

pub fn standings_path(league: u64) -> String {
    format!("leagues-classic/{league}/standings/")
}

pub fn picks_path(team: u64, gameweek: u32) -> String {
    format!("entry/{team}/event/{gameweek}/picks/")
}

pub const BOOTSTRAP_PATH: &str = "bootstrap-static/";

/// `(entry id, team name, total, gameweek points, rank)`
pub fn active_league(name: &str, rows: &[(u64, &str, i64, i64, u32)]) -> String {
    let results: Vec<_> = rows
        .iter()
        .map(|(id, team, total, event, rank)| {
            json!({
                "entry": id,
                "entry_name": team,
                "player_name": format!("Manager {id}"),
                "total": total,
                "event_total": event,
                "rank": rank,
                "last_rank": rank,
            })
        })
        .collect();
    json!({
        "league": { "id": 7, "name": name },
        "standings": { "has_next": false, "page": 1, "results": results },
        "new_entries": { "has_next": false, "page": 1, "results": [] },
    })
    .to_string()
}

/// `(entry id, team name, joined_time)`
pub fn forming_league(name: &str, rows: &[(u64, &str, &str)]) -> String {
    let results: Vec<_> = rows
        .iter()
        .map(|(id, team, joined)| {
            json!({
                "entry": id,
                "entry_name": team,
                "player_first_name": "Pre",
                "player_last_name": "Season",
                "joined_time": joined,
            })
        })
        .collect();
    json!({
        "league": { "id": 7, "name": name },
        "standings": { "has_next": false, "page": 1, "results": [] },
        "new_entries": { "has_next": false, "page": 1, "results": results },
    })
    .to_string()
}

pub fn empty_league(name: &str) -> String {
    forming_league(name, &[])
}

pub fn bootstrap(current: Option<u32>) -> String {
    let events: Vec<_> = (1..=38)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Gameweek {id}"),
                "is_current": Some(id) == current,
                "is_next": current.map_or(id == 1, |c| id == c + 1),
                "finished": current.is_some_and(|c| id < c),
            })
        })
        .collect();
    json!({
        "events": events,
        "teams": [
            { "id": 16, "name": "Nott'm Forest", "short_name": "NFO" },
            { "id": 1, "name": "Arsenal", "short_name": "ARS" },
        ],
        "elements": [
            { "id": 7, "web_name": "Wood", "team": 16, "element_type": 4 },
            { "id": 8, "web_name": "Saka", "team": 1, "element_type": 3 },
        ],
        "total_players": 11_000_000,
    })
    .to_string()
}

pub fn picks(points: i64) -> String {
    json!({
        "active_chip": null,
        "entry_history": { "event": 3, "points": points, "event_transfers_cost": 4 },
        "picks": [
            { "element": 7, "position": 1, "multiplier": 2, "is_captain": true, "is_vice_captain": false },
            { "element": 8, "position": 12, "multiplier": 0, "is_captain": false, "is_vice_captain": true },
        ],
        "automatic_subs": [],
    })
    .to_string()
}
