//! XP sources outside of drink logging

/// XP rewards for social actions
pub struct XpRewards;

impl XpRewards {
    /// XP awarded to an inviter when their group reaches `member_count`
    /// members. Tiered by order of magnitude, with exact milestone sizes
    /// (1, 10, 100, 1000+) paying the tier they open.
    pub fn invitation(member_count: u32) -> u64 {
        match member_count {
            0..=9 => 10,
            10..=99 => 100,
            100..=999 => 1000,
            _ => 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invitation_tiers() {
        assert_eq!(XpRewards::invitation(1), 10);
        assert_eq!(XpRewards::invitation(9), 10);
        assert_eq!(XpRewards::invitation(10), 100);
        assert_eq!(XpRewards::invitation(100), 1000);
        assert_eq!(XpRewards::invitation(999), 1000);
        assert_eq!(XpRewards::invitation(1000), 100_000);
        assert_eq!(XpRewards::invitation(50_000), 100_000);
    }
}
