//! Profile and reset commands

use anyhow::Result;

use super::{load_manager, save_manager};

/// Show the profile, or update fields when flags are given
pub fn profile_command(username: Option<&str>, image: Option<&str>) -> Result<()> {
    let (mut manager, store) = load_manager()?;

    if username.is_some() || image.is_some() {
        manager.update_profile(username, image);
        if !manager.account().has_completed_onboarding {
            manager.complete_onboarding();
        }
        save_manager(&manager, &store)?;
        println!("Profile updated.");
        return Ok(());
    }

    let account = manager.account();
    println!("{}", account.username);
    if let Some(image) = &account.profile_image {
        println!("  Image:       {}", image);
    }
    println!("  Referral:    {} ({} referred)", account.referral_code, account.referral_count);
    println!("  Onboarded:   {}", if account.has_completed_onboarding { "yes" } else { "no" });

    Ok(())
}

/// Delete the local snapshot and start fresh
pub fn reset_command(force: bool) -> Result<()> {
    let (_manager, store) = load_manager()?;

    if !force {
        println!(
            "This deletes {} and all progress with it. Re-run with --force to confirm.",
            store.path().display()
        );
        return Ok(());
    }

    store.delete()?;
    println!("Snapshot deleted. A fresh account starts on the next command.");
    Ok(())
}
