//! Relationship strength scoring.
//!
//! Strength is cumulative: every logged interaction adds its kind weight
//! scaled by its outcome, and nothing decays with time. One strong
//! collaboration years ago keeps counting.

use crate::interaction::Interaction;

/// Upper bound of the strength scale.
pub const MAX_STRENGTH: u8 = 100;

/// Contribution of a single interaction before rounding.
pub fn interaction_contribution(interaction: &Interaction) -> f64 {
    interaction.kind.weight() * interaction.outcome_multiplier()
}

/// Relationship strength in `0..=100`.
///
/// Weights: email 5, meeting 20, call 15, content collaboration 25,
/// campaign 30, note 2, unknown 0. Outcome multipliers: positive 1.2,
/// negative 0.5, neutral or missing 1.0. The sum is rounded to the nearest
/// integer and capped at 100.
pub fn relationship_strength(interactions: &[Interaction]) -> u8 {
    if interactions.is_empty() {
        return 0;
    }

    let total: f64 = interactions.iter().map(interaction_contribution).sum();

    // Weights and multipliers are non-negative, so only the upper bound needs clamping
    total.round().min(MAX_STRENGTH as f64) as u8
}
