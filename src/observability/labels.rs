use metrics::{IntoLabels, Label, SharedString};

/// Key/value labels attached to every metric an engine emits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// A copy of these labels with `additional_labels` appended.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
