// src/standings/score.rs
//! Ввод счёта.

use crate::domain::{Match, MatchId, MatchScore, Points, Round, TournamentError};

/// Валидна ли пара очков: сумма ровно `match_points`.
///
/// Проверка рекомендательная: невалидный счёт всё равно сохраняется и идёт в таблицу.
pub fn is_valid_sum(a: Points, b: Points, match_points: u32) -> bool {
    u64::from(a.get()) + u64::from(b.get()) == u64::from(match_points)
}

/// Выставить (или стереть) счёт матча внутри раунда.
///
/// - если нет хотя бы одного из чисел — счёт стирается целиком;
/// - иначе каждое число зажимается в [0, match_points] независимо,
///   сумма НЕ подгоняется.
///
/// Возвращает обновлённый матч; сам раунд обновляется на месте.
pub fn set_score(
    round: &mut Round,
    match_id: MatchId,
    score_a: Option<i64>,
    score_b: Option<i64>,
    match_points: u32,
) -> Result<Match, TournamentError> {
    let m = round
        .matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;

    m.score = match (score_a, score_b) {
        (Some(a), Some(b)) => Some(MatchScore::new(
            Points::clamped(a, match_points),
            Points::clamped(b, match_points),
        )),
        _ => None,
    };

    Ok(m.clone())
}
