//! 7-day login-bonus cycle
//!
//! Independent of the task board's check-in task, but read by it for the
//! home screen. Day 7 is the grand prize; the state machine treats it like
//! any other day and wraps the cycle afterwards.

use serde::{Deserialize, Serialize};

use super::error::RewardError;

/// Reward schedule for days 1..=7
pub static DAILY_REWARD_SCHEDULE: &[u64; 7] = &[10, 20, 30, 40, 50, 75, 100];

/// Render state of a single cycle day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Not reachable yet
    Locked,
    /// Today's reward, not yet claimed
    Available,
    /// Already claimed this cycle
    Claimed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRewardCycle {
    /// Day within the cycle, 1..=7
    pub current_day: u8,
    /// Days claimed in the running cycle, in claim order
    pub claimed_days: Vec<u8>,
    /// Local date (YYYY-MM-DD) of the last claim
    pub last_claim_date: Option<String>,
    pub cycle_start_date: Option<String>,
}

impl Default for DailyRewardCycle {
    fn default() -> Self {
        Self {
            current_day: 1,
            claimed_days: Vec::new(),
            last_claim_date: None,
            cycle_start_date: None,
        }
    }
}

impl DailyRewardCycle {
    /// Claim today's reward. Same-day duplicates are rejected without any
    /// state change. Returns the claimed day number; the reward value is
    /// read from the schedule by the caller.
    pub fn claim(&mut self, today: &str) -> Result<u8, RewardError> {
        if self.last_claim_date.as_deref() == Some(today) {
            return Err(RewardError::AlreadyClaimedToday);
        }

        if self.cycle_start_date.is_none() || self.current_day > 7 {
            // Start a fresh cycle
            self.current_day = 1;
            self.claimed_days = vec![1];
            self.cycle_start_date = Some(today.to_string());
        } else {
            self.claimed_days.push(self.current_day);
        }

        self.last_claim_date = Some(today.to_string());
        Ok(self.current_day)
    }

    /// Move to the next day after a claim once the calendar date changes.
    /// Wraps to a fresh cycle after day 7. Idempotent within a day.
    pub fn advance_if_new_day(&mut self, today: &str) {
        let Some(last) = self.last_claim_date.as_deref() else {
            return;
        };
        if last == today {
            return;
        }
        if self.current_day < 7 {
            self.current_day += 1;
        } else {
            // Cycle complete: start fresh
            self.current_day = 1;
            self.claimed_days.clear();
            self.cycle_start_date = None;
        }
        // Only advance once per rollover
        self.last_claim_date = None;
    }

    /// Reward value for the day that `claim` would pay out today
    pub fn reward_for(day: u8) -> u64 {
        let idx = (day.clamp(1, 7) - 1) as usize;
        DAILY_REWARD_SCHEDULE[idx]
    }

    /// Render state for a cycle day (1..=7)
    pub fn day_state(&self, day: u8, today: &str) -> DayState {
        if self.claimed_days.contains(&day) {
            DayState::Claimed
        } else if day == self.current_day && self.last_claim_date.as_deref() != Some(today) {
            DayState::Available
        } else {
            DayState::Locked
        }
    }

    pub fn claimed_today(&self, today: &str) -> bool {
        self.last_claim_date.as_deref() == Some(today)
    }
}
