//! Status and achievements commands

use anyhow::Result;

use rbxtask::domain::{Rank, TaskDef};
use rbxtask::rewards::ACHIEVEMENTS;

use super::{load_manager, save_manager};

/// Show balance, rank, streak and today's progress
pub fn status_command() -> Result<()> {
    let (mut manager, store) = load_manager()?;
    // Roll the day so the display reflects today's board
    let events = manager.evaluate_achievements();
    save_manager(&manager, &store)?;
    super::print_events(&events);

    let account = manager.account();
    let rank = Rank::for_coins(account.total_coins_earned);

    println!("{}", account.username);
    println!();
    println!("  Balance:        {} RBX (${:.2})", account.current_balance, account.balance_dollars());
    println!("  Lifetime:       {} RBX", account.total_coins_earned);
    println!("  Withdrawn:      ${:.2}", account.withdrawn_amount);
    println!();

    match Rank::next_for_coins(account.total_coins_earned) {
        Some(next) => println!(
            "  Rank:           {} {} ({:.0}% to {})",
            rank.icon,
            rank.name,
            Rank::progress_percent(account.total_coins_earned),
            next.name
        ),
        None => println!("  Rank:           {} {} (max)", rank.icon, rank.name),
    }

    println!(
        "  Streak:         {} day(s) (best: {})",
        manager.board().checkin_streak(),
        manager.board().longest_streak()
    );
    println!(
        "  Daily tasks:    {}/{} claimed today",
        manager.board().claimed_daily_count(),
        TaskDef::daily_count()
    );
    println!(
        "  Daily reward:   day {}/7{}",
        manager.cycle().current_day,
        if manager.cycle().claimed_today(&manager.today()) {
            " (claimed today)"
        } else {
            ""
        }
    );
    println!(
        "  Achievements:   {}/{}",
        manager.achievements().log().unlocked_count(),
        ACHIEVEMENTS.len()
    );

    Ok(())
}

/// List achievements, unlocked first
pub fn achievements_command() -> Result<()> {
    let (manager, _store) = load_manager()?;
    let log = manager.achievements().log();

    println!(
        "Achievements ({}/{} unlocked):\n",
        log.unlocked_count(),
        ACHIEVEMENTS.len()
    );

    for achievement in ACHIEVEMENTS {
        let marker = if log.is_unlocked(achievement.id) { "x" } else { " " };
        println!(
            "  [{}] {} - {} (+{} RBX)",
            marker, achievement.title, achievement.description, achievement.reward
        );
    }

    Ok(())
}
