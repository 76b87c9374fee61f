//! First-class invariants for the game-state manager.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](super::GameState). They are testable independently and are
//! checked as postconditions in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn violation_of<S, I: Invariant<S>>(state: &S) -> Option<InvariantViolation> {
    (!I::holds(state)).then(|| InvariantViolation::new(I::description()))
}

fn collect(violations: Vec<Option<InvariantViolation>>) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = violations.into_iter().flatten().collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(vec![
            violation_of::<S, I1>(state),
            violation_of::<S, I2>(state),
            violation_of::<S, I3>(state),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(vec![
            violation_of::<S, I1>(state),
            violation_of::<S, I2>(state),
        ])
    }
}

pub mod empty_start;
pub mod single_mark;
pub mod step_in_bounds;

pub use empty_start::EmptyStartInvariant;
pub use single_mark::SingleMarkPerStepInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All game-state invariants as a composable set.
pub type TimeTravelInvariants = (
    EmptyStartInvariant,
    SingleMarkPerStepInvariant,
    StepInBoundsInvariant,
);
