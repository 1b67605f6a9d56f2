//! Final score computation.

use super::SessionConfig;

/// Score breakdown fixed at the moment a session finalizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore {
    /// `correct_count * points_per_correct`.
    pub base: u32,
    /// Time bonus, floored at zero.
    pub time_bonus: u32,
    /// Bonus for a perfect run within the time limit, else zero.
    pub perfection_bonus: u32,
    /// Sum of the three components.
    pub total: u32,
    /// Seconds the session took; the full duration when time ran out.
    pub elapsed_seconds: u32,
    pub time_expired: bool,
}

/// Pure function of its inputs: identical arguments always produce the
/// identical breakdown.
///
/// The perfection bonus rewards finishing the whole set within the time
/// limit, so it is withheld on expiry even if every answered question
/// was correct.
pub fn compute_final_score(
    correct_count: u32,
    total_questions: u32,
    remaining_seconds: u32,
    time_expired: bool,
    config: &SessionConfig,
) -> FinalScore {
    let base = correct_count * config.points_per_correct;

    let max_time_points = total_questions * config.time_points_factor;
    let elapsed_seconds = if time_expired {
        config.initial_seconds
    } else {
        config.initial_seconds.saturating_sub(remaining_seconds)
    };
    let time_bonus_raw =
        max_time_points as f64 - elapsed_seconds as f64 * config.time_deduction_per_second;
    let time_bonus = time_bonus_raw.round().max(0.0) as u32;

    let is_perfect = correct_count == total_questions && !time_expired;
    let perfection_bonus = if is_perfect { config.perfection_bonus } else { 0 };

    FinalScore {
        base,
        time_bonus,
        perfection_bonus,
        total: base + time_bonus + perfection_bonus,
        elapsed_seconds,
        time_expired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SessionConfig {
        SessionConfig::default()
    }

    #[test]
    fn perfect_run_with_time_to_spare() {
        // 10/10 correct in 60 of 120 seconds.
        let score = compute_final_score(10, 10, 60, false, &config());
        assert_eq!(score.base, 100);
        assert_eq!(score.time_bonus, 20);
        assert_eq!(score.perfection_bonus, 50);
        assert_eq!(score.total, 170);
        assert_eq!(score.elapsed_seconds, 60);
        assert!(!score.time_expired);
    }

    #[test]
    fn expiry_floors_time_bonus_and_denies_perfection() {
        // 7/10 correct, clock ran out.
        let score = compute_final_score(7, 10, 0, true, &config());
        assert_eq!(score.base, 70);
        assert_eq!(score.time_bonus, 0);
        assert_eq!(score.perfection_bonus, 0);
        assert_eq!(score.total, 70);
        assert_eq!(score.elapsed_seconds, 120);
        assert!(score.time_expired);
    }

    #[test]
    fn all_correct_but_expired_gets_no_perfection_bonus() {
        let score = compute_final_score(10, 10, 0, true, &config());
        assert_eq!(score.perfection_bonus, 0);
        assert_eq!(score.total, score.base + score.time_bonus);
    }

    #[test]
    fn total_is_the_sum_of_components() {
        for correct in 0..=10 {
            for remaining in [0, 30, 60, 119, 120] {
                for expired in [false, true] {
                    let score = compute_final_score(correct, 10, remaining, expired, &config());
                    assert_eq!(
                        score.total,
                        score.base + score.time_bonus + score.perfection_bonus
                    );
                }
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let a = compute_final_score(6, 10, 42, false, &config());
        let b = compute_final_score(6, 10, 42, false, &config());
        assert_eq!(a, b);
    }

    #[test]
    fn fractional_deduction_rounds_to_nearest() {
        // elapsed 45s at 0.5/s deducts 22.5 from 50; rounds to 28.
        let score = compute_final_score(0, 10, 75, false, &config());
        assert_eq!(score.time_bonus, 28);
    }

    #[test]
    fn instant_finish_takes_the_full_time_bonus() {
        let score = compute_final_score(0, 10, 120, false, &config());
        assert_eq!(score.elapsed_seconds, 0);
        assert_eq!(score.time_bonus, 50);
    }
}
