use core_types::TournamentError;

/// Minimum number of Swiss rounds needed to leave a single unbeaten player,
/// assuming no drawn games: `ceil(log2(player_count))`.
///
/// The value is informational. Nothing in pairing enforces it.
pub fn required_rounds(player_count: i64) -> Result<u32, TournamentError> {
    if player_count <= 0 {
        return Err(TournamentError::InvalidPlayerCount {
            count: player_count,
            reason: "round calculation requires at least one player".to_string(),
        });
    }

    // ceil(log2(n)) is the bit length of n - 1.
    let below = (player_count - 1) as u64;
    Ok(u64::BITS - below.leading_zeros())
}
