//! Task board aggregate: per-task lifecycle plus the check-in streak
//!
//! The board owns task completion/claim state and the streak counters. It
//! never touches the coin balance; crediting and ledger appends belong to
//! the reward manager so the board stays testable in isolation.

use serde::{Deserialize, Serialize};

use super::clock::is_yesterday;
use super::error::RewardError;
use crate::config::StreakResetPolicy;
use crate::domain::{TASKS, TaskCategory, TaskDef, TaskId, TaskState};

/// Consecutive-day check-in counter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckinStreak {
    pub current: u32,
    pub best: u32,
    /// Local date (YYYY-MM-DD) of the last counted check-in
    pub last_checkin_day: Option<String>,
}

impl CheckinStreak {
    /// Whether a check-in on `today` continues the chain (last check-in was
    /// yesterday, or no check-in yet)
    fn continues(&self, today: &str) -> bool {
        match &self.last_checkin_day {
            None => true,
            Some(last) => is_yesterday(last, today),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<TaskState>,
    last_reset_date: Option<String>,
    streak: CheckinStreak,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoard {
    /// Fresh board from the static catalog
    pub fn new() -> Self {
        Self {
            tasks: TASKS.iter().map(TaskState::new).collect(),
            last_reset_date: None,
            streak: CheckinStreak::default(),
        }
    }

    pub fn tasks(&self) -> &[TaskState] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&TaskState> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut TaskState> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Reset daily-category tasks once per calendar day. Bonus tasks are
    /// one-time and keep their state. Idempotent within a day.
    pub fn reset_if_new_day(&mut self, today: &str) -> bool {
        if self.last_reset_date.as_deref() == Some(today) {
            return false;
        }
        for task in &mut self.tasks {
            if task.category() == TaskCategory::Daily {
                task.completed = false;
                task.claimed = false;
                // Restore the catalog reward; a drawn spin value is only
                // valid for the day it was spun
                task.reward = TaskDef::get(task.id).reward;
            }
        }
        self.last_reset_date = Some(today.to_string());
        tracing::debug!("Daily tasks reset for {}", today);
        true
    }

    /// Zero the streak when the chain is broken, if the policy says so.
    /// With `Manual` (the default) the streak survives missed days.
    pub fn apply_streak_policy(&mut self, today: &str, policy: StreakResetPolicy) -> bool {
        if policy != StreakResetPolicy::OnMissedDay || self.streak.current == 0 {
            return false;
        }
        let broken = match &self.streak.last_checkin_day {
            Some(last) => last != today && !is_yesterday(last, today),
            None => false,
        };
        if broken {
            tracing::debug!("Check-in streak broken, resetting from {}", self.streak.current);
            self.streak.current = 0;
        }
        broken
    }

    /// Mark a task completed. Silent no-op when the task is unknown or
    /// already completed; returns whether state changed.
    pub fn complete(&mut self, id: TaskId, now_ms: i64) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        if task.completed {
            return false;
        }
        task.completed = true;
        task.last_completed_at = Some(now_ms);
        true
    }

    /// Validate a claim without mutating. Returns the reward that a claim
    /// would pay out.
    pub fn can_claim(&self, id: TaskId) -> Result<u64, RewardError> {
        let Some(task) = self.task(id) else {
            return Err(RewardError::TaskNotFound(id.to_string()));
        };
        if task.claimed {
            return Err(RewardError::AlreadyClaimed(id));
        }
        if !task.completed {
            return Err(RewardError::TaskNotCompleted(id));
        }
        Ok(task.reward)
    }

    /// Flip a validated task to claimed. Callers must have checked
    /// `can_claim` first.
    pub(crate) fn mark_claimed(&mut self, id: TaskId) {
        if let Some(task) = self.task_mut(id) {
            task.claimed = true;
        }
    }

    /// Set the spin wheel's drawn reward. Must run strictly before the
    /// claim. Returns false for unknown ids.
    pub fn set_reward(&mut self, id: TaskId, amount: u64) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.reward = amount;
                true
            }
            None => false,
        }
    }

    /// Extend the check-in streak for `today`. Called by the reward manager
    /// when the check-in task's claim goes through; a day is counted at most
    /// once. Returns the new count, or None if today was already counted.
    pub(crate) fn extend_streak(&mut self, today: &str) -> Option<u32> {
        if self.streak.last_checkin_day.as_deref() == Some(today) {
            return None;
        }
        self.streak.current = if self.streak.continues(today) {
            self.streak.current + 1
        } else {
            1
        };
        self.streak.best = self.streak.best.max(self.streak.current);
        self.streak.last_checkin_day = Some(today.to_string());
        Some(self.streak.current)
    }

    pub fn checkin_streak(&self) -> u32 {
        self.streak.current
    }

    pub fn longest_streak(&self) -> u32 {
        self.streak.best
    }

    /// Claimed daily-category tasks (today's progress)
    pub fn claimed_daily_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.category() == TaskCategory::Daily && t.claimed)
            .count()
    }

    /// Total claimed tasks across both categories
    pub fn claimed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.claimed).count()
    }

    pub fn has_spun(&self) -> bool {
        self.task(TaskId::SpinWheel).is_some_and(|t| t.completed)
    }

    pub fn has_shared(&self) -> bool {
        self.task(TaskId::ShareApp).is_some_and(|t| t.claimed)
    }
}
