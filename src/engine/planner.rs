// src/engine/planner.rs
//! AUTO-планирование: сколько раундов и сколько игр на игрока.

use crate::domain::{PlayMode, ScoringMode, TournamentConfig, Variant};

/// План AMERICANO "партнёр с каждым".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmericanoPlan {
    /// Всего матчей в турнире (M).
    pub matches: u32,
    /// Целевое число игр на каждого игрока: 4M / n.
    pub games_per_player: u32,
}

/// Сколько матчей влезает в раунд: min(courts, floor(n/4)).
pub fn max_matches_per_round(n: usize, courts: u8) -> u32 {
    (usize::from(courts)).min(n / 4) as u32
}

fn gcd(a: u32, b: u32) -> u32 {
    let (mut x, mut y) = (a, b);
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}

/// Минимальный M такой, что:
///   - каждая из C(n,2) пар побывала партнёрами хотя бы раз (дважды при rematch),
///     а каждый матч даёт ровно 2 партнёрства;
///   - 4M делится на n, т.е. всем поровну игр.
///
/// n < 4 — турнира нет, план нулевой.
pub fn americano_partner_plan(n: u32, rematch: bool) -> AmericanoPlan {
    if n < 4 {
        return AmericanoPlan {
            matches: 0,
            games_per_player: 0,
        };
    }

    let factor = if rematch { 2 } else { 1 };
    let pairs_needed = n * (n - 1) / 2 * factor;
    let min_matches = pairs_needed.div_ceil(2);

    // 4M % n == 0  <=>  M кратно n / gcd(n, 4)
    let step = n / gcd(n, 4);
    let matches = min_matches.div_ceil(step) * step;

    AmericanoPlan {
        matches,
        games_per_player: 4 * matches / n,
    }
}

/// Целевое число игр на игрока в AMERICANO AUTO.
pub fn auto_target_games_americano(n: u32, rematch: bool) -> u32 {
    americano_partner_plan(n, rematch).games_per_player
}

/// AUTO-число раундов (generateAutoRoundCount).
///
/// - TEAM: teams - 1 (круговой цикл), x2 при rematch;
/// - MEXICANO: n - 1, если весь ростер влезает в один раунд и n чётно, иначе n; x2 при rematch;
/// - AMERICANO: max(игр на игрока, ceil(M / матчей в раунде)).
pub fn auto_round_count(config: &TournamentConfig, player_count: usize, team_count: usize) -> u32 {
    let rematch = config.auto_rematch;

    let n = match config.scoring_mode {
        ScoringMode::Team => {
            if team_count < 2 {
                return 0;
            }
            let base = team_count as u32 - 1;
            return if rematch { base * 2 } else { base };
        }
        ScoringMode::Individual => player_count,
    };
    if n < 4 {
        return 0;
    }

    let max_matches = max_matches_per_round(n, config.courts);
    if max_matches == 0 {
        return 0;
    }

    match config.variant {
        Variant::Mexicano => {
            let slots = max_matches as usize * 4;
            let base = (if slots == n && n % 2 == 0 { n - 1 } else { n }) as u32;
            if rematch {
                base * 2
            } else {
                base
            }
        }
        Variant::Americano => {
            let plan = americano_partner_plan(n as u32, rematch);
            let by_capacity = plan.matches.div_ceil(max_matches);
            plan.games_per_player.max(by_capacity)
        }
    }
}

/// Сколько раундов запланировано.
///
/// TIMER — 0 (ограничивает время, а не число раундов);
/// ROUNDS — ручное число, если задано, иначе AUTO.
pub fn planned_rounds(config: &TournamentConfig, player_count: usize, team_count: usize) -> u32 {
    match config.play_mode {
        PlayMode::Timer => 0,
        PlayMode::Rounds if config.rounds_planned > 0 => config.rounds_planned,
        PlayMode::Rounds => auto_round_count(config, player_count, team_count),
    }
}
