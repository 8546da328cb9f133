use crate::config::{MatchingRules, PuzzleRules, QuizRules, ScoringRules};
use crate::game::GameResult;
use crate::score::ScoreBreakdown;

/// Score a finished session.
///
/// Negative or NaN inputs are clamped to zero (levels to one) rather than
/// rejected, so this never fails. The result depends only on the arguments.
pub fn calculate_score(result: &GameResult, rules: &ScoringRules) -> ScoreBreakdown {
    match *result {
        GameResult::Puzzle {
            level,
            time_seconds,
            hints_used,
        } => score_puzzle(level, time_seconds, hints_used.unwrap_or(0), &rules.puzzle),
        GameResult::Quiz {
            correct,
            mistakes,
            streak,
            ..
        } => score_quiz(correct, mistakes, streak, &rules.quiz),
        GameResult::Matching {
            time_seconds,
            correct,
            mistakes,
            ..
        } => score_matching(time_seconds, correct, mistakes, &rules.matching),
    }
}

/// Rewards speed, scales with level, and charges for hints.
fn score_puzzle(
    level: i64,
    time_seconds: f64,
    hints_used: i64,
    rules: &PuzzleRules,
) -> ScoreBreakdown {
    let base = rules.base_points;
    let bonus = clamp_time(time_seconds) * rules.time_bonus_per_second;
    let multiplier = level.max(1) as f64 * rules.level_multiplier;
    let penalty = clamp_count(hints_used) * rules.hint_penalty;

    ScoreBreakdown::from_terms(
        (base + bonus - penalty) * multiplier,
        base,
        bonus,
        penalty,
        multiplier,
    )
}

fn score_quiz(correct: i64, mistakes: i64, streak: i64, rules: &QuizRules) -> ScoreBreakdown {
    let base = clamp_count(correct) * rules.correct_points;
    let penalty = clamp_count(mistakes) * rules.wrong_penalty;
    let multiplier = rules.streak_multiplier.powf(clamp_count(streak)).max(1.0);

    ScoreBreakdown::from_terms((base - penalty) * multiplier, base, 0.0, penalty, multiplier)
}

fn score_matching(
    time_seconds: f64,
    correct: i64,
    mistakes: i64,
    rules: &MatchingRules,
) -> ScoreBreakdown {
    let base = clamp_count(correct) * rules.correct_match_points;
    let penalty = clamp_count(mistakes) * rules.wrong_match_penalty;
    let bonus = if time_seconds > 0.0 {
        rules.time_bonus
    } else {
        0.0
    };

    ScoreBreakdown::from_terms(base - penalty + bonus, base, bonus, penalty, 1.0)
}

fn clamp_count(value: i64) -> f64 {
    value.max(0) as f64
}

fn clamp_time(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}
