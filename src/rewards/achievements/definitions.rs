//! Achievement definitions and metadata
//!
//! All achievements are defined here with their unlock conditions and
//! coin rewards.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Firsts
    FirstCoin,
    FirstTask,
    AllDaily,
    FirstSpin,
    FirstShare,
    FirstWithdraw,

    // Coin milestones
    Coins100,
    Coins500,
    Coins1000,
    Coins5000,
    Coins10000,

    // Streak milestones
    Streak3,
    Streak7,
    Streak14,
    Streak30,

    // Rank milestones
    RankBronze,
    RankSilver,
    RankGold,
    RankPlatinum,
    RankDiamond,
}

impl AchievementId {
    /// Get the string ID for snapshot storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstCoin => "first_coin",
            Self::FirstTask => "first_task",
            Self::AllDaily => "all_daily",
            Self::FirstSpin => "first_spin",
            Self::FirstShare => "first_share",
            Self::FirstWithdraw => "first_withdraw",
            Self::Coins100 => "coins_100",
            Self::Coins500 => "coins_500",
            Self::Coins1000 => "coins_1000",
            Self::Coins5000 => "coins_5000",
            Self::Coins10000 => "coins_10000",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak14 => "streak_14",
            Self::Streak30 => "streak_30",
            Self::RankBronze => "rank_bronze",
            Self::RankSilver => "rank_silver",
            Self::RankGold => "rank_gold",
            Self::RankPlatinum => "rank_platinum",
            Self::RankDiamond => "rank_diamond",
        }
    }

    /// Parse from snapshot string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_coin" => Some(Self::FirstCoin),
            "first_task" => Some(Self::FirstTask),
            "all_daily" => Some(Self::AllDaily),
            "first_spin" => Some(Self::FirstSpin),
            "first_share" => Some(Self::FirstShare),
            "first_withdraw" => Some(Self::FirstWithdraw),
            "coins_100" => Some(Self::Coins100),
            "coins_500" => Some(Self::Coins500),
            "coins_1000" => Some(Self::Coins1000),
            "coins_5000" => Some(Self::Coins5000),
            "coins_10000" => Some(Self::Coins10000),
            "streak_3" => Some(Self::Streak3),
            "streak_7" => Some(Self::Streak7),
            "streak_14" => Some(Self::Streak14),
            "streak_30" => Some(Self::Streak30),
            "rank_bronze" => Some(Self::RankBronze),
            "rank_silver" => Some(Self::RankSilver),
            "rank_gold" => Some(Self::RankGold),
            "rank_platinum" => Some(Self::RankPlatinum),
            "rank_diamond" => Some(Self::RankDiamond),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstCoin,
            Self::FirstTask,
            Self::AllDaily,
            Self::FirstSpin,
            Self::FirstShare,
            Self::FirstWithdraw,
            Self::Coins100,
            Self::Coins500,
            Self::Coins1000,
            Self::Coins5000,
            Self::Coins10000,
            Self::Streak3,
            Self::Streak7,
            Self::Streak14,
            Self::Streak30,
            Self::RankBronze,
            Self::RankSilver,
            Self::RankGold,
            Self::RankPlatinum,
            Self::RankDiamond,
        ]
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Milestone,
    Streak,
    Rank,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milestone => "Milestones",
            Self::Streak => "Streaks",
            Self::Rank => "Ranks",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Coins credited once on unlock
    pub reward: u64,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === FIRSTS ===
    Achievement {
        id: AchievementId::FirstCoin,
        title: "First Earnings",
        description: "Earn your first RBX coin",
        icon: "star-shooting",
        category: AchievementCategory::Milestone,
        reward: 10,
    },
    Achievement {
        id: AchievementId::FirstTask,
        title: "Task Beginner",
        description: "Complete your first task",
        icon: "clipboard-check",
        category: AchievementCategory::Milestone,
        reward: 15,
    },
    Achievement {
        id: AchievementId::AllDaily,
        title: "Overachiever",
        description: "Complete all daily tasks in one day",
        icon: "trophy",
        category: AchievementCategory::Milestone,
        reward: 50,
    },
    Achievement {
        id: AchievementId::FirstSpin,
        title: "Lucky Spinner",
        description: "Spin the wheel for the first time",
        icon: "tire",
        category: AchievementCategory::Milestone,
        reward: 10,
    },
    Achievement {
        id: AchievementId::FirstShare,
        title: "Social Butterfly",
        description: "Share the app with friends",
        icon: "share-variant",
        category: AchievementCategory::Milestone,
        reward: 10,
    },
    Achievement {
        id: AchievementId::FirstWithdraw,
        title: "Cash Out",
        description: "Make your first withdrawal",
        icon: "bank-transfer-out",
        category: AchievementCategory::Milestone,
        reward: 25,
    },
    // === COIN MILESTONES ===
    Achievement {
        id: AchievementId::Coins100,
        title: "Coin Collector",
        description: "Earn 100 total RBX coins",
        icon: "numeric-1-circle",
        category: AchievementCategory::Milestone,
        reward: 20,
    },
    Achievement {
        id: AchievementId::Coins500,
        title: "Coin Hoarder",
        description: "Earn 500 total RBX coins",
        icon: "numeric-5-circle",
        category: AchievementCategory::Milestone,
        reward: 50,
    },
    Achievement {
        id: AchievementId::Coins1000,
        title: "Coin Master",
        description: "Earn 1,000 total RBX coins",
        icon: "cash-multiple",
        category: AchievementCategory::Milestone,
        reward: 100,
    },
    Achievement {
        id: AchievementId::Coins5000,
        title: "Coin Legend",
        description: "Earn 5,000 total RBX coins",
        icon: "diamond-stone",
        category: AchievementCategory::Milestone,
        reward: 200,
    },
    Achievement {
        id: AchievementId::Coins10000,
        title: "Coin God",
        description: "Earn 10,000 total RBX coins",
        icon: "crown",
        category: AchievementCategory::Milestone,
        reward: 500,
    },
    // === STREAKS ===
    Achievement {
        id: AchievementId::Streak3,
        title: "Three-peat",
        description: "Maintain a 3-day check-in streak",
        icon: "fire",
        category: AchievementCategory::Streak,
        reward: 30,
    },
    Achievement {
        id: AchievementId::Streak7,
        title: "Week Warrior",
        description: "Maintain a 7-day check-in streak",
        icon: "fire",
        category: AchievementCategory::Streak,
        reward: 75,
    },
    Achievement {
        id: AchievementId::Streak14,
        title: "Fortnight Fighter",
        description: "Maintain a 14-day check-in streak",
        icon: "fire",
        category: AchievementCategory::Streak,
        reward: 150,
    },
    Achievement {
        id: AchievementId::Streak30,
        title: "Monthly Master",
        description: "Maintain a 30-day check-in streak",
        icon: "fire",
        category: AchievementCategory::Streak,
        reward: 500,
    },
    // === RANKS ===
    Achievement {
        id: AchievementId::RankBronze,
        title: "Bronze Rank",
        description: "Reach Bronze rank",
        icon: "medal",
        category: AchievementCategory::Rank,
        reward: 50,
    },
    Achievement {
        id: AchievementId::RankSilver,
        title: "Silver Rank",
        description: "Reach Silver rank",
        icon: "medal",
        category: AchievementCategory::Rank,
        reward: 100,
    },
    Achievement {
        id: AchievementId::RankGold,
        title: "Gold Rank",
        description: "Reach Gold rank",
        icon: "medal",
        category: AchievementCategory::Rank,
        reward: 200,
    },
    Achievement {
        id: AchievementId::RankPlatinum,
        title: "Platinum Rank",
        description: "Reach Platinum rank",
        icon: "medal",
        category: AchievementCategory::Rank,
        reward: 500,
    },
    Achievement {
        id: AchievementId::RankDiamond,
        title: "Diamond Rank",
        description: "Reach Diamond rank",
        icon: "medal",
        category: AchievementCategory::Rank,
        reward: 1000,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// Get total possible bonus coins from all achievements
    pub fn total_reward() -> u64 {
        ACHIEVEMENTS.iter().map(|a| a.reward).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_catalog_covers_all_ids() {
        assert_eq!(ACHIEVEMENTS.len(), AchievementId::all().len());
        for id in AchievementId::all() {
            assert_eq!(Achievement::get(*id).id, *id);
        }
    }
}
