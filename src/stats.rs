use crate::error::BuildError;
use crate::iban::ErrorKey;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

const ERROR: &str = "error";
const KIND: &str = "kind";
const RULE_ID: &str = "rule_id";

/// Counters emitted by an engine. They are registered with the recorder
/// installed when the engine is built.
pub struct Stats {
    labels: Labels,
    pub validations: Counter,
    pub assembled: Counter,
    pub built: Counter,
    pub bic_lookups: Counter,
    pub bic_misses: Counter,
}

impl Stats {
    pub fn new(labels: &Labels) -> Self {
        Stats {
            labels: labels.clone(),
            validations: counter!("iban.validations", labels.clone()),
            assembled: counter!("iban.assembled", labels.clone()),
            built: counter!("iban.built", labels.clone()),
            bic_lookups: counter!("bic_finder.lookups", labels.clone()),
            bic_misses: counter!("bic_finder.misses", labels.clone()),
        }
    }

    pub fn record_invalid(&self, key: ErrorKey) {
        let error: &'static str = key.into();
        counter!("iban.invalid", self.labels.clone_with_labels(&[(ERROR, error)])).increment(1);
    }

    pub fn record_build_failure(&self, error: &BuildError) {
        let kind: &'static str = error.into();
        counter!(
            "iban.build_failures",
            self.labels.clone_with_labels(&[(KIND, kind)])
        )
        .increment(1);
    }

    pub fn record_unsupported_account(&self, rule_id: &str) {
        counter!(
            "german_rules.unsupported_accounts",
            self.labels.clone_with_labels(&[(RULE_ID, rule_id.to_string())])
        )
        .increment(1);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new(&NO_LABEL)
    }
}
