//! Round phase.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// The pot is empty and no bet is in flight.
    Idle,
    /// Chips are in the pot and the next bet may be placed.
    Accumulating,
    /// The last bet lost; only a reset is accepted.
    Bust,
}
