//! Stage transition gate
//!
//! Pure decision functions over an immutable deal snapshot. Every query is
//! total: nothing here panics or errors, and an unrecognized stage string
//! (import path) fails closed - no required fields, no successor, no
//! forward movement.

use std::collections::BTreeMap;

use fathom_domain::{Deal, DealStage, FathomError, FieldValue, Result};

use super::definitions::StageDefinition;

/// Decides legal stage transitions and reports missing requirements.
///
/// The gate never writes anything; the caller persists the result and uses
/// [`StageGate::missing_fields`] for user-facing messaging.
pub struct StageGate;

impl StageGate {
    /// Fields that must be non-empty before the deal may leave its stage.
    pub fn required_fields(stage: DealStage) -> &'static [&'static str] {
        StageDefinition::required_fields(stage)
    }

    /// Whether every required field of the deal's current stage is present.
    ///
    /// Text counts once non-blank; a boolean counts once explicitly set,
    /// so `false` satisfies a required boolean while an unset one does not.
    pub fn is_complete(deal: &Deal) -> bool {
        Self::required_fields(deal.stage).iter().copied().all(|name| deal.field_present(name))
    }

    /// Required fields of the current stage still missing from the record,
    /// in definition order. The set difference backing the user-facing
    /// "cannot advance" message.
    pub fn missing_fields(deal: &Deal) -> Vec<&'static str> {
        Self::required_fields(deal.stage)
            .iter()
            .copied()
            .filter(|name| !deal.field_present(name))
            .collect()
    }

    /// Whether the deal can advance along the linear chain.
    pub fn can_advance(deal: &Deal) -> bool {
        deal.stage.next().is_some() && Self::is_complete(deal)
    }

    /// Whether moving the deal to `target` is legal.
    ///
    /// - Backward moves are always allowed, with no field gating; this
    ///   includes reopening a terminal deal.
    /// - The immediate next stage requires the departing stage's required
    ///   fields to be complete.
    /// - Terminal stages are reachable only from the pre-terminal stage,
    ///   gated on the pre-terminal stage's own required fields (terminal
    ///   fields such as a loss reason are filled after the move).
    /// - Everything else - same stage, forward skips, terminal to terminal -
    ///   is illegal.
    pub fn can_move_to(deal: &Deal, target: DealStage) -> bool {
        if target.position() < deal.stage.position() {
            return true;
        }
        if deal.stage.next() == Some(target) {
            return Self::is_complete(deal);
        }
        if deal.stage.is_pre_terminal() && target.is_terminal() {
            return Self::is_complete(deal);
        }
        false
    }

    /// `Ok` iff the move is legal; otherwise [`FathomError::InvalidTransition`]
    /// carrying the departing stage's missing required fields.
    pub fn check_transition(deal: &Deal, target: DealStage) -> Result<()> {
        if Self::can_move_to(deal, target) {
            return Ok(());
        }
        Err(FathomError::InvalidTransition {
            from: deal.stage,
            to: target,
            missing: Self::missing_fields(deal).into_iter().map(String::from).collect(),
        })
    }

    /// Consistency check for an imported row: does the row's declared stage
    /// have all of its own required fields? An unparseable stage string
    /// fails closed.
    ///
    /// CSV parsing itself lives with the import collaborator; this only
    /// answers whether the already-parsed row is internally consistent.
    pub fn is_row_consistent(stage: &str, fields: &BTreeMap<String, FieldValue>) -> bool {
        let Some(stage) = DealStage::parse(stage) else {
            return false;
        };
        Self::required_fields(stage)
            .iter()
            .all(|name| fields.get(*name).is_some_and(FieldValue::is_present))
    }
}
