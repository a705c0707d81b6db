// src/standings/aggregate.rs

use std::collections::HashMap;

use crate::domain::{
    Lineup, Match, MatchScore, ParticipantId, Player, PlayerId, Points, Round, ScoringMode, Standing, Team, TeamId,
};

/// Пересчитать таблицу с нуля по всем сыгранным матчам.
///
/// - INDIVIDUAL: очки получают игроки со сторон матча;
/// - TEAM: очки получают команды и, дополнительно, оба игрока каждой команды,
///   чтобы личная статистика оставалась осмысленной.
///
/// Матчи без счёта пропускаются. Матчи, чья арность не совпадает с `mode`,
/// тоже пропускаются (история другого режима к этой таблице не относится).
/// Входы не мутируются: возвращаются копии с новой статистикой.
pub fn recompute_standings(
    players: &[Player],
    teams: &[Team],
    rounds: &[Round],
    mode: ScoringMode,
) -> (Vec<Player>, Vec<Team>) {
    let mut player_rows: HashMap<PlayerId, Standing> = HashMap::new();
    let mut team_rows: HashMap<TeamId, Standing> = HashMap::new();

    let rosters: HashMap<TeamId, [PlayerId; 2]> = teams.iter().map(|t| (t.id, t.roster)).collect();

    for m in scored_matches(rounds) {
        let Some(score) = m.score else { continue };

        match (&m.lineup, mode) {
            (Lineup::Doubles { a, b }, ScoringMode::Individual) => {
                credit(&mut player_rows, a, score.a, score.b);
                credit(&mut player_rows, b, score.b, score.a);
            }
            (Lineup::Teams { a, b }, ScoringMode::Team) => {
                credit(&mut team_rows, &[*a], score.a, score.b);
                credit(&mut team_rows, &[*b], score.b, score.a);

                if let Some(roster) = rosters.get(a) {
                    credit(&mut player_rows, roster, score.a, score.b);
                }
                if let Some(roster) = rosters.get(b) {
                    credit(&mut player_rows, roster, score.b, score.a);
                }
            }
            _ => {}
        }
    }

    let players = players
        .iter()
        .map(|p| Player {
            standing: player_rows.get(&p.id).copied().unwrap_or_default(),
            ..p.clone()
        })
        .collect();

    let teams = teams
        .iter()
        .map(|t| Team {
            standing: team_rows.get(&t.id).copied().unwrap_or_default(),
            ..t.clone()
        })
        .collect();

    (players, teams)
}

pub(crate) fn scored_matches(rounds: &[Round]) -> impl Iterator<Item = &Match> {
    rounds.iter().flat_map(|r| r.matches.iter()).filter(|m| m.is_scored())
}

fn credit(rows: &mut HashMap<ParticipantId, Standing>, side: &[ParticipantId], scored: Points, conceded: Points) {
    for id in side {
        rows.entry(*id).or_default().record(scored, conceded);
    }
}

/// Есть ли у матча строгий победитель; `Some(true)` — выиграла сторона A.
pub(crate) fn side_a_won(score: &MatchScore) -> Option<bool> {
    if score.is_draw() {
        None
    } else {
        Some(score.a > score.b)
    }
}
