//! Score module - points, objective, multiplier and hit streak
//!
//! The tracker knows nothing about grid geometry. The grid reports cleared
//! cells, successful shots and failed shots; everything else is derived here.

use std::fmt;

use crate::types::{
    ADDITION_UNIT, DEFAULT_OBJECTIVE, STREAK_MILESTONE, STREAK_MILESTONE_BONUS, STREAK_STEP,
    STREAK_STEP_BONUS,
};

/// Plain copy of the tracker's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreState {
    pub points: u32,
    pub objective: u32,
    pub multiplier: u32,
    pub streak: u32,
}

/// Score tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    points: u32,
    objective: u32,
    multiplier: u32,
    streak: u32,
}

impl Score {
    pub fn new(objective: u32) -> Self {
        Self {
            points: 0,
            objective,
            multiplier: 1,
            streak: 0,
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn objective(&self) -> u32 {
        self.objective
    }

    pub fn set_objective(&mut self, objective: u32) {
        self.objective = objective;
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn state(&self) -> ScoreState {
        ScoreState {
            points: self.points,
            objective: self.objective,
            multiplier: self.multiplier,
            streak: self.streak,
        }
    }

    /// Credit `cells` cleared cells at the current multiplier
    pub fn add_points(&mut self, cells: u32) {
        let gained = ADDITION_UNIT
            .saturating_mul(self.multiplier)
            .saturating_mul(cells);
        self.points = self.points.saturating_add(gained);
    }

    /// Register one successful shot
    ///
    /// Both bonuses apply in the same call when both moduli hit (streak 15, 30, ...).
    pub fn advance_streak(&mut self) {
        self.streak += 1;
        if self.streak % STREAK_STEP == 0 {
            self.multiplier += STREAK_STEP_BONUS;
        }
        if self.streak % STREAK_MILESTONE == 0 {
            self.multiplier += STREAK_MILESTONE_BONUS;
        }
    }

    /// Register one failed shot
    pub fn penalize(&mut self) {
        self.multiplier = 1;
        self.streak = 0;
        self.points = self.points.saturating_sub(ADDITION_UNIT);
    }

    pub fn is_objective_reached(&self) -> bool {
        self.points >= self.objective
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new(DEFAULT_OBJECTIVE)
    }
}

impl fmt::Display for ScoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score = {}  Objective = {}  Multiplier = x{}  Current streak = {}",
            self.points, self.objective, self.multiplier, self.streak
        )
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_unit_multiplier() {
        let score = Score::default();
        assert_eq!(score.points(), 0);
        assert_eq!(score.objective(), 500);
        assert_eq!(score.multiplier(), 1);
        assert_eq!(score.streak(), 0);
    }

    #[test]
    fn add_points_scales_with_multiplier() {
        let mut score = Score::new(100);
        score.add_points(1);
        assert_eq!(score.points(), 10);
        score.add_points(3);
        assert_eq!(score.points(), 40);

        for _ in 0..5 {
            score.advance_streak();
        }
        assert_eq!(score.multiplier(), 2);
        score.add_points(1);
        assert_eq!(score.points(), 60);
    }

    #[test]
    fn five_hits_double_the_multiplier() {
        let mut score = Score::default();
        for _ in 0..4 {
            score.advance_streak();
        }
        assert_eq!(score.multiplier(), 1);
        score.advance_streak();
        assert_eq!(score.multiplier(), 2);
        assert_eq!(score.streak(), 5);
    }

    #[test]
    fn fifteen_hits_apply_both_bonuses() {
        let mut score = Score::default();
        for _ in 0..10 {
            score.advance_streak();
        }
        assert_eq!(score.multiplier(), 3);
        for _ in 0..5 {
            score.advance_streak();
        }
        // +1 at 5, +1 at 10, +1 and +3 at 15
        assert_eq!(score.multiplier(), 1 + 1 + 1 + 1 + 3);
    }

    #[test]
    fn penalty_floors_at_zero() {
        let mut score = Score::default();
        score.penalize();
        assert_eq!(score.points(), 0);

        score.add_points(1);
        score.penalize();
        assert_eq!(score.points(), 0);
        score.penalize();
        assert_eq!(score.points(), 0);
    }

    #[test]
    fn penalty_resets_streak_and_multiplier() {
        let mut score = Score::default();
        for _ in 0..6 {
            score.add_points(1);
            score.advance_streak();
        }
        assert_eq!(score.points(), 70);
        assert_eq!(score.multiplier(), 2);

        score.penalize();
        assert_eq!(score.points(), 60);
        assert_eq!(score.multiplier(), 1);
        assert_eq!(score.streak(), 0);
    }

    #[test]
    fn objective_is_inclusive() {
        let mut score = Score::new(30);
        score.add_points(2);
        assert!(!score.is_objective_reached());
        score.add_points(1);
        assert!(score.is_objective_reached());
    }

    #[test]
    fn display_summary() {
        let score = Score::new(100);
        assert_eq!(
            score.to_string(),
            "Score = 0  Objective = 100  Multiplier = x1  Current streak = 0"
        );
    }
}
