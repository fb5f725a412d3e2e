//! Multi-label one-hot encoding of genre sets.

use std::collections::{BTreeSet, HashMap};

/// Maps genre sets to fixed-width 0/1 vectors.
///
/// Classes are the sorted union of every label seen during [`fit`](Self::fit),
/// so column `i` always means `classes()[i]`.
#[derive(Debug, Clone, Default)]
pub struct GenreBinarizer {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl GenreBinarizer {
    /// Learns the class list from a collection of label sets.
    pub fn fit<I, L, S>(label_sets: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: Vec<String> = label_sets
            .into_iter()
            .flat_map(|labels| {
                labels
                    .into_iter()
                    .map(|l| l.as_ref().to_string())
                    .collect::<Vec<_>>()
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        log::debug!("Genre binarizer fitted with {} classes", classes.len());
        Self { classes, index }
    }

    /// Encodes one label set. Labels unseen during fitting are ignored.
    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Vec<f64> {
        let mut row = vec![0.0; self.classes.len()];
        for label in labels {
            match self.index.get(label.as_ref()) {
                Some(&i) => row[i] = 1.0,
                None => log::debug!("Ignoring unknown genre '{}'", label.as_ref()),
            }
        }
        row
    }

    /// The learned classes, sorted.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Vector width.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns whether no class was learned.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
