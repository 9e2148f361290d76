//! Static per-stage field configuration
//!
//! One declarative table consulted by both the form renderer and the gating
//! logic, so stage-field knowledge lives in exactly one place. This is
//! compile-time configuration, not a database entity.

use fathom_domain::DealStage;

/// Field configuration for one pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct StageDefinition {
    pub stage: DealStage,
    /// Fields introduced at this stage, in form-render order.
    pub fields: &'static [&'static str],
    /// Subset of `fields` that must be non-empty before the deal may leave
    /// this stage. Terminal stages gate nothing; their stage-specific
    /// fields (loss reason, abandon reason) are filled after the move.
    pub required: &'static [&'static str],
}

pub const STAGE_DEFINITIONS: [StageDefinition; 8] = [
    StageDefinition {
        stage: DealStage::Incoming,
        fields: &["contact_name", "company", "source"],
        required: &["contact_name", "company"],
    },
    StageDefinition {
        stage: DealStage::Discussions,
        fields: &["customer_need", "decision_maker_present"],
        required: &["customer_need", "decision_maker_present"],
    },
    StageDefinition {
        stage: DealStage::Qualified,
        fields: &["budget", "timeline"],
        required: &["budget", "timeline"],
    },
    StageDefinition {
        stage: DealStage::Proposal,
        fields: &["proposal_sent", "amount"],
        required: &["proposal_sent", "amount"],
    },
    StageDefinition {
        stage: DealStage::Negotiation,
        fields: &["expected_close_date", "final_amount"],
        required: &["expected_close_date", "final_amount"],
    },
    StageDefinition { stage: DealStage::Won, fields: &["won_reason"], required: &[] },
    StageDefinition { stage: DealStage::Lost, fields: &["loss_reason"], required: &[] },
    StageDefinition { stage: DealStage::Abandoned, fields: &["abandon_reason"], required: &[] },
];

impl StageDefinition {
    /// Definition for a stage. Total: every `DealStage` has an entry.
    pub fn for_stage(stage: DealStage) -> &'static Self {
        // STAGE_DEFINITIONS is in pipeline order and covers every variant.
        &STAGE_DEFINITIONS[stage as usize]
    }

    /// Fields required to leave `stage`.
    pub fn required_fields(stage: DealStage) -> &'static [&'static str] {
        Self::for_stage(stage).required
    }

    /// Fields relevant at or before `stage`, in form-render order.
    pub fn relevant_fields(stage: DealStage) -> Vec<&'static str> {
        STAGE_DEFINITIONS
            .iter()
            .filter(|def| def.stage.position() <= stage.position() && !def.stage.is_terminal())
            .chain(STAGE_DEFINITIONS.iter().filter(|def| def.stage == stage && stage.is_terminal()))
            .flat_map(|def| def.fields.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_pipeline_order() {
        for (index, def) in STAGE_DEFINITIONS.iter().enumerate() {
            assert_eq!(def.stage as usize, index);
            assert_eq!(StageDefinition::for_stage(def.stage).stage, def.stage);
        }
    }

    #[test]
    fn required_is_subset_of_fields() {
        for def in &STAGE_DEFINITIONS {
            for name in def.required {
                assert!(def.fields.contains(name), "{name} missing from {}", def.stage);
            }
        }
    }

    #[test]
    fn terminal_stages_require_nothing() {
        assert!(StageDefinition::required_fields(DealStage::Won).is_empty());
        assert!(StageDefinition::required_fields(DealStage::Lost).is_empty());
        assert!(StageDefinition::required_fields(DealStage::Abandoned).is_empty());
    }

    #[test]
    fn relevant_fields_accumulate_down_the_pipeline() {
        let qualified = StageDefinition::relevant_fields(DealStage::Qualified);
        assert!(qualified.contains(&"contact_name"));
        assert!(qualified.contains(&"customer_need"));
        assert!(qualified.contains(&"budget"));
        assert!(!qualified.contains(&"proposal_sent"));

        // A terminal form shows the whole linear history plus its own field.
        let lost = StageDefinition::relevant_fields(DealStage::Lost);
        assert!(lost.contains(&"final_amount"));
        assert!(lost.contains(&"loss_reason"));
        assert!(!lost.contains(&"won_reason"));
    }
}
