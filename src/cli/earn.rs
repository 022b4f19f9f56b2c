//! Task, spin, and daily-reward commands

use anyhow::Result;

use rbxtask::domain::TaskDef;
use rbxtask::rewards::{DAILY_REWARD_SCHEDULE, DayState};

use super::{load_manager, parse_task, print_events, save_manager};

/// List all tasks with their current state
pub fn tasks_command() -> Result<()> {
    let (mut manager, store) = load_manager()?;
    let events = manager.evaluate_achievements();
    save_manager(&manager, &store)?;
    print_events(&events);

    println!("Tasks:\n");
    for state in manager.board().tasks() {
        let def = TaskDef::get(state.id);
        let status = if state.claimed {
            "claimed"
        } else if state.completed {
            "ready to claim"
        } else {
            "open"
        };
        println!("  {:<20} [{}] {}", state.id.as_str(), def.category.label(), status);
        println!("      {} - {}", def.title, def.reward_label);
    }

    Ok(())
}

/// Mark a task completed (stands in for the video/share/install callbacks)
pub fn complete_command(task: &str) -> Result<()> {
    let id = parse_task(task)?;
    let (mut manager, store) = load_manager()?;

    if manager.complete_task(id) {
        save_manager(&manager, &store)?;
        println!("Task {} completed. Claim it to collect the reward.", id);
    } else {
        println!("Task {} was already completed.", id);
    }

    Ok(())
}

/// Claim a completed task's reward
pub fn claim_command(task: &str) -> Result<()> {
    let id = parse_task(task)?;
    let (mut manager, store) = load_manager()?;

    match manager.claim_task(id) {
        Ok(events) => {
            save_manager(&manager, &store)?;
            print_events(&events);
        }
        // Expected business conditions; print and leave state untouched
        Err(err) => println!("{err}"),
    }

    Ok(())
}

/// Spin the reward wheel
pub fn spin_command() -> Result<()> {
    let (mut manager, store) = load_manager()?;

    match manager.spin_wheel() {
        Ok(events) => {
            save_manager(&manager, &store)?;
            print_events(&events);
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}

/// Show the 7-day cycle, or claim today's reward
pub fn daily_command(claim: bool) -> Result<()> {
    let (mut manager, store) = load_manager()?;

    if claim {
        match manager.claim_daily_reward() {
            Ok(events) => {
                save_manager(&manager, &store)?;
                print_events(&events);
            }
            Err(err) => println!("{err}"),
        }
        return Ok(());
    }

    let events = manager.evaluate_achievements();
    save_manager(&manager, &store)?;
    print_events(&events);

    let today = manager.today();
    println!("Daily rewards (day {}/7):\n", manager.cycle().current_day);
    for (i, amount) in DAILY_REWARD_SCHEDULE.iter().enumerate() {
        let day = i as u8 + 1;
        let state = match manager.cycle().day_state(day, &today) {
            DayState::Claimed => "claimed",
            DayState::Available => "available",
            DayState::Locked => "locked",
        };
        let prize = if day == 7 { " (grand prize)" } else { "" };
        println!("  Day {day}: {amount:>3} RBX - {state}{prize}");
    }

    Ok(())
}
