use std::collections::HashMap;

use indexmap::IndexSet;

/// A sparse feature × sample table of raw count text.
///
/// Rows (feature names) and columns (sample names) keep insertion order. A cell that was never
/// set is absent, which is distinct from a cell holding an empty string.
#[derive(Clone, Debug, Default)]
pub struct CountMatrix {
    feature_names: IndexSet<String>,
    sample_names: IndexSet<String>,
    values: HashMap<(usize, usize), String>,
}

impl CountMatrix {
    pub fn feature_names(&self) -> &IndexSet<String> {
        &self.feature_names
    }

    pub fn sample_names(&self) -> &IndexSet<String> {
        &self.sample_names
    }

    /// Adds a sample column, returning its index.
    ///
    /// This is a no-op if the sample already exists.
    pub fn add_sample(&mut self, sample_name: &str) -> usize {
        get_or_insert(&mut self.sample_names, sample_name)
    }

    /// Sets the count of a feature in a sample, adding the row and column if needed.
    ///
    /// Returns the previous value, if any.
    pub fn insert(
        &mut self,
        feature_name: &str,
        sample_name: &str,
        count: String,
    ) -> Option<String> {
        let i = get_or_insert(&mut self.feature_names, feature_name);
        let j = get_or_insert(&mut self.sample_names, sample_name);
        self.values.insert((i, j), count)
    }

    pub fn get(&self, feature_name: &str, sample_name: &str) -> Option<&str> {
        let i = self.feature_names.get_index_of(feature_name)?;
        let j = self.sample_names.get_index_of(sample_name)?;
        self.values.get(&(i, j)).map(|s| s.as_str())
    }

    /// Returns the cells of the feature at row `i`, in column order.
    pub fn row(&self, i: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.sample_names.len()).map(move |j| self.values.get(&(i, j)).map(|s| s.as_str()))
    }

    /// Replaces the columns with `sample_names`, in that order.
    ///
    /// Existing columns not listed are dropped, and listed columns that do not exist are empty.
    /// Rows are unchanged. Repeated names in `sample_names` collapse to their first position.
    pub fn reindex<S>(self, sample_names: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let sample_names: IndexSet<String> = sample_names
            .iter()
            .map(|name| name.as_ref().into())
            .collect();

        let column_map: Vec<_> = self
            .sample_names
            .iter()
            .map(|name| sample_names.get_index_of(name.as_str()))
            .collect();

        let values = self
            .values
            .into_iter()
            .filter_map(|((i, j), value)| column_map[j].map(|k| ((i, k), value)))
            .collect();

        Self {
            feature_names: self.feature_names,
            sample_names,
            values,
        }
    }
}

fn get_or_insert(names: &mut IndexSet<String>, name: &str) -> usize {
    match names.get_index_of(name) {
        Some(i) => i,
        None => {
            let (i, _) = names.insert_full(name.into());
            i
        }
    }
}
