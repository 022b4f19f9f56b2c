//! Task catalog and per-task lifecycle state
//!
//! The catalog is fixed; only the completion/claim state (and the spin
//! wheel's drawn reward) changes at runtime.

use serde::{Deserialize, Serialize};

/// Unique identifier for each task in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskId {
    DailyCheckin,
    WatchVideo1,
    SpinWheel,
    CompleteSurvey1,
    InstallAppClash,
    InstallAppTiktok,
    InstallAppUber,
    ShareApp,
    RateApp,
    FollowSocialIg,
    FollowSocialYt,
}

impl TaskId {
    /// Get the string ID for snapshot storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyCheckin => "daily_checkin",
            Self::WatchVideo1 => "watch_video_1",
            Self::SpinWheel => "spin_wheel",
            Self::CompleteSurvey1 => "complete_survey_1",
            Self::InstallAppClash => "install_app_clash",
            Self::InstallAppTiktok => "install_app_tiktok",
            Self::InstallAppUber => "install_app_uber",
            Self::ShareApp => "share_app",
            Self::RateApp => "rate_app",
            Self::FollowSocialIg => "follow_social_ig",
            Self::FollowSocialYt => "follow_social_yt",
        }
    }

    /// Parse from snapshot string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily_checkin" => Some(Self::DailyCheckin),
            "watch_video_1" => Some(Self::WatchVideo1),
            "spin_wheel" => Some(Self::SpinWheel),
            "complete_survey_1" => Some(Self::CompleteSurvey1),
            "install_app_clash" => Some(Self::InstallAppClash),
            "install_app_tiktok" => Some(Self::InstallAppTiktok),
            "install_app_uber" => Some(Self::InstallAppUber),
            "share_app" => Some(Self::ShareApp),
            "rate_app" => Some(Self::RateApp),
            "follow_social_ig" => Some(Self::FollowSocialIg),
            "follow_social_yt" => Some(Self::FollowSocialYt),
            _ => None,
        }
    }

    /// Get all task IDs in catalog order
    pub fn all() -> &'static [TaskId] {
        &[
            Self::DailyCheckin,
            Self::WatchVideo1,
            Self::SpinWheel,
            Self::CompleteSurvey1,
            Self::InstallAppClash,
            Self::InstallAppTiktok,
            Self::InstallAppUber,
            Self::ShareApp,
            Self::RateApp,
            Self::FollowSocialIg,
            Self::FollowSocialYt,
        ]
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task category for reset behavior and grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Resets to unclaimed on day rollover
    Daily,
    /// One-time, never resets
    Bonus,
}

impl TaskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Bonus => "Bonus",
        }
    }
}

/// Task definition with all metadata
#[derive(Debug, Clone)]
pub struct TaskDef {
    pub id: TaskId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: TaskCategory,
    /// Base reward in coins; 0 for the spin wheel (drawn per spin)
    pub reward: u64,
    pub reward_label: &'static str,
}

/// All task definitions
pub static TASKS: &[TaskDef] = &[
    TaskDef {
        id: TaskId::DailyCheckin,
        title: "Daily Check-in",
        description: "Log in every day to boost your streak",
        icon: "calendar-check",
        category: TaskCategory::Daily,
        reward: 50,
        reward_label: "50 Coins",
    },
    TaskDef {
        id: TaskId::WatchVideo1,
        title: "Watch Ad Video",
        description: "Watch a short video to earn rewards",
        icon: "play-circle",
        category: TaskCategory::Daily,
        reward: 20,
        reward_label: "20 Coins",
    },
    TaskDef {
        id: TaskId::SpinWheel,
        title: "Spin the Wheel",
        description: "Get lucky with free spins",
        icon: "ferris-wheel",
        category: TaskCategory::Daily,
        reward: 0,
        reward_label: "Win up to 1000",
    },
    TaskDef {
        id: TaskId::CompleteSurvey1,
        title: "Premium Survey - Tech",
        description: "Complete a quick 2-min survey about technology",
        icon: "file-document-edit",
        category: TaskCategory::Bonus,
        reward: 150,
        reward_label: "150 Coins",
    },
    TaskDef {
        id: TaskId::InstallAppClash,
        title: "Install: Clash of Clans",
        description: "Install and reach level 5",
        icon: "gamepad-variant",
        category: TaskCategory::Bonus,
        reward: 500,
        reward_label: "500 Coins",
    },
    TaskDef {
        id: TaskId::InstallAppTiktok,
        title: "Install: TikTok",
        description: "Download and open for 30 seconds",
        icon: "download",
        category: TaskCategory::Bonus,
        reward: 300,
        reward_label: "300 Coins",
    },
    TaskDef {
        id: TaskId::InstallAppUber,
        title: "Install: Uber",
        description: "Register a new account",
        icon: "car",
        category: TaskCategory::Bonus,
        reward: 400,
        reward_label: "400 Coins",
    },
    TaskDef {
        id: TaskId::ShareApp,
        title: "Share with Friends",
        description: "Share app link on social media",
        icon: "share-variant",
        category: TaskCategory::Bonus,
        reward: 100,
        reward_label: "100 Coins",
    },
    TaskDef {
        id: TaskId::RateApp,
        title: "Rate Us 5 Stars",
        description: "Leave a positive review on Play Store",
        icon: "star",
        category: TaskCategory::Bonus,
        reward: 150,
        reward_label: "150 Coins",
    },
    TaskDef {
        id: TaskId::FollowSocialIg,
        title: "Follow Instagram",
        description: "Follow our official page @rbxtask",
        icon: "instagram",
        category: TaskCategory::Bonus,
        reward: 75,
        reward_label: "75 Coins",
    },
    TaskDef {
        id: TaskId::FollowSocialYt,
        title: "Subscribe YouTube",
        description: "Subscribe to our YouTube channel",
        icon: "youtube",
        category: TaskCategory::Bonus,
        reward: 75,
        reward_label: "75 Coins",
    },
];

impl TaskDef {
    /// Get task definition by ID
    pub fn get(id: TaskId) -> &'static TaskDef {
        TASKS
            .iter()
            .find(|t| t.id == id)
            .expect("All tasks should be defined")
    }

    /// Number of daily-category tasks in the catalog
    pub fn daily_count() -> usize {
        TASKS
            .iter()
            .filter(|t| t.category == TaskCategory::Daily)
            .count()
    }
}

/// Mutable per-task state (Unclaimed -> Completed -> Claimed per day)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskState {
    pub id: TaskId,
    /// Current reward; equals the catalog value except for the spin wheel,
    /// whose reward is set from the drawn segment right before the claim
    pub reward: u64,
    pub completed: bool,
    pub claimed: bool,
    /// Timestamp (ms) of the last completion, None if never completed
    pub last_completed_at: Option<i64>,
}

impl TaskState {
    /// Fresh state from the catalog definition
    pub fn new(def: &TaskDef) -> Self {
        Self {
            id: def.id,
            reward: def.reward,
            completed: false,
            claimed: false,
            last_completed_at: None,
        }
    }

    pub fn category(&self) -> TaskCategory {
        TaskDef::get(self.id).category
    }
}
