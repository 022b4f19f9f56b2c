//! User account: balance, lifetime earnings, profile fields
//!
//! The account is only mutated through the reward manager; credits raise
//! both the spendable balance and the lifetime total, withdrawals lower the
//! balance only. `total_coins_earned` never decreases.

use serde::{Deserialize, Serialize};

/// Coins per withdrawn dollar
pub const COINS_PER_DOLLAR: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    /// Optional reference to a picked profile image, owned by the account
    pub profile_image: Option<String>,
    /// Creation timestamp in ms, immutable after `new`
    pub created_at: i64,
    /// Spendable coins
    pub current_balance: u64,
    /// Lifetime accrual; drives rank
    pub total_coins_earned: u64,
    /// Cumulative cash-out value in dollars
    pub withdrawn_amount: f64,
    pub referral_code: String,
    pub referral_count: u32,
    pub has_completed_onboarding: bool,
}

impl UserAccount {
    /// Create a fresh account with a generated referral code
    pub fn new(id: impl Into<String>, username: impl Into<String>, created_at: i64) -> Self {
        let id = id.into();
        Self {
            referral_code: generate_referral_code(),
            id,
            username: username.into(),
            profile_image: None,
            created_at,
            current_balance: 0,
            total_coins_earned: 0,
            withdrawn_amount: 0.0,
            referral_count: 0,
            has_completed_onboarding: false,
        }
    }

    /// Credit coins: raises balance and lifetime total together
    pub(crate) fn credit(&mut self, amount: u64) -> u64 {
        self.current_balance += amount;
        self.total_coins_earned += amount;
        self.current_balance
    }

    /// Debit coins for a withdrawal. The caller validates the amount; this
    /// only enforces the balance invariant.
    pub(crate) fn withdraw(&mut self, coins: u64) -> u64 {
        debug_assert!(coins <= self.current_balance);
        self.current_balance -= coins;
        self.withdrawn_amount += coins as f64 / COINS_PER_DOLLAR as f64;
        self.current_balance
    }

    /// One-way false -> true
    pub(crate) fn complete_onboarding(&mut self) {
        self.has_completed_onboarding = true;
    }

    pub fn has_withdrawn(&self) -> bool {
        self.withdrawn_amount > 0.0
    }

    /// Balance expressed in dollars for display
    pub fn balance_dollars(&self) -> f64 {
        self.current_balance as f64 / COINS_PER_DOLLAR as f64
    }
}

/// Generate a referral code in the `RBX-XXXXXX` format.
///
/// Falls back to a time/pid-derived code if the OS RNG is unavailable.
pub fn generate_referral_code() -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut bytes = [0u8; 6];
    if getrandom::getrandom(&mut bytes).is_err() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let pid = std::process::id() as u128;
        let mixed = (nanos ^ pid.rotate_left(17)).to_le_bytes();
        bytes.copy_from_slice(&mixed[..6]);
    }

    let mut code = String::with_capacity(10);
    code.push_str("RBX-");
    for b in bytes {
        code.push(CHARS[(b as usize) % CHARS.len()] as char);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_raises_both_totals() {
        let mut account = UserAccount::new("user_1", "RBX Player", 0);
        account.credit(50);
        account.credit(25);
        assert_eq!(account.current_balance, 75);
        assert_eq!(account.total_coins_earned, 75);
    }

    #[test]
    fn test_withdraw_keeps_lifetime_total() {
        let mut account = UserAccount::new("user_1", "RBX Player", 0);
        account.credit(2500);
        account.withdraw(2000);
        assert_eq!(account.current_balance, 500);
        assert_eq!(account.total_coins_earned, 2500);
        assert!((account.withdrawn_amount - 2.0).abs() < 1e-9);
        assert!(account.has_withdrawn());
    }

    #[test]
    fn test_referral_code_format() {
        let code = generate_referral_code();
        assert!(code.starts_with("RBX-"));
        assert_eq!(code.len(), 10);
        assert!(code[4..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_onboarding_is_one_way() {
        let mut account = UserAccount::new("user_1", "RBX Player", 0);
        assert!(!account.has_completed_onboarding);
        account.complete_onboarding();
        account.complete_onboarding();
        assert!(account.has_completed_onboarding);
    }
}
