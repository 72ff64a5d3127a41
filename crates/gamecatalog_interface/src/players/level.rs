// Level progression of a player, derived from its experience.

/// Level reached with the given amount of experience. Negative experience counts as 0.
pub fn calc_level(experience: i32) -> i32 {
    let experience = f64::from(experience.max(0));

    // The float is truncated toward zero before the division, like the integer cast it replaces.
    let scaled = ((2500.0 + 200.0 * experience).sqrt() - 50.0) as i32;
    scaled / 100
}

/// Experience still missing to reach `level + 1`.
/// Not clamped: inconsistent inputs can produce a negative value.
pub fn calc_next_level(level: i32, experience: i32) -> i32 {
    let experience = i128::from(experience.max(0));
    let level = i128::from(level.max(0));

    let remaining = 50 * (level + 1) * (level + 2) - experience;
    i32::try_from(remaining).unwrap_or(i32::MAX)
}
