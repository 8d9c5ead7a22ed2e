use indexmap::IndexMap;

use crate::core::Series;
use crate::error::{ChartError, ChartResult};

/// Labels plus the series drawn against them, keyed by series label in
/// insertion order.
///
/// Every mutation either keeps `series.data.len() == labels.len()` for all
/// series or fails without touching the state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartState {
    labels: Vec<String>,
    series: IndexMap<String, Series>,
}

/// What one successful append changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendSummary {
    pub labels_appended: usize,
    pub points_appended: usize,
    pub labels_len: usize,
}

impl ChartState {
    /// Builds a state from aligned input, stamping the fixed border color on
    /// every series.
    pub fn from_parts(labels: Vec<String>, series: Vec<Series>) -> ChartResult<Self> {
        let mut by_label = IndexMap::with_capacity(series.len());
        for mut entry in series {
            if by_label.contains_key(&entry.label) {
                return Err(ChartError::DuplicateSeries { label: entry.label });
            }
            if entry.data.len() != labels.len() {
                return Err(ChartError::LengthMismatch {
                    series: entry.label,
                    data_len: entry.data.len(),
                    labels_len: labels.len(),
                });
            }
            entry.apply_fixed_color();
            by_label.insert(entry.label.clone(), entry);
        }

        Ok(Self {
            labels,
            series: by_label,
        })
    }

    /// Replaces labels and series wholesale.
    pub fn replace(&mut self, labels: Vec<String>, series: Vec<Series>) -> ChartResult<()> {
        *self = Self::from_parts(labels, series)?;
        Ok(())
    }

    /// Appends labels and extends the matching series point by point.
    ///
    /// All input is checked before anything is written: unknown or repeated
    /// series labels and any series left misaligned with the grown label
    /// sequence reject the whole call.
    pub fn append(&mut self, labels: Vec<String>, series: Vec<Series>) -> ChartResult<AppendSummary> {
        let labels_len = self.labels.len() + labels.len();

        let mut incoming: IndexMap<&str, usize> = IndexMap::with_capacity(series.len());
        for entry in &series {
            if !self.series.contains_key(&entry.label) {
                return Err(ChartError::SeriesNotFound {
                    label: entry.label.clone(),
                });
            }
            if incoming
                .insert(entry.label.as_str(), entry.data.len())
                .is_some()
            {
                return Err(ChartError::DuplicateSeries {
                    label: entry.label.clone(),
                });
            }
        }

        for (label, existing) in &self.series {
            let data_len =
                existing.data.len() + incoming.get(label.as_str()).copied().unwrap_or(0);
            if data_len != labels_len {
                return Err(ChartError::LengthMismatch {
                    series: label.clone(),
                    data_len,
                    labels_len,
                });
            }
        }

        let labels_appended = labels.len();
        self.labels.extend(labels);

        let mut points_appended = 0;
        for entry in series {
            if let Some(existing) = self.series.get_mut(&entry.label) {
                points_appended += entry.data.len();
                existing.data.extend(entry.data);
                existing.apply_fixed_color();
            }
        }

        Ok(AppendSummary {
            labels_appended,
            points_appended,
            labels_len,
        })
    }

    /// Drops every label and point past `len`, undoing appends made since the
    /// state had `len` labels.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.labels.truncate(len);
        for entry in self.series.values_mut() {
            entry.data.truncate(len);
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> impl ExactSizeIterator<Item = &Series> + '_ {
        self.series.values()
    }

    #[must_use]
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.get(label)
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.series
            .values()
            .all(|entry| entry.data.len() == self.labels.len())
    }

    /// Smallest and largest finite value across all series.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.series
            .values()
            .flat_map(|entry| entry.data.iter().copied())
            .filter(|value| value.is_finite())
            .fold(None, |extent, value| match extent {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::ChartState;
    use crate::core::Series;
    use crate::error::ChartError;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn append_requires_every_series_to_keep_pace() {
        let mut state = ChartState::from_parts(
            labels(&["a"]),
            vec![Series::new("cpu", vec![1.0]), Series::new("mem", vec![2.0])],
        )
        .expect("aligned state");

        let err = state
            .append(labels(&["b"]), vec![Series::new("cpu", vec![3.0])])
            .expect_err("mem would fall behind");
        assert!(matches!(
            err,
            ChartError::LengthMismatch { ref series, data_len: 1, labels_len: 2 } if series == "mem"
        ));
        assert_eq!(state.labels(), labels(&["a"]).as_slice());
        assert_eq!(state.series_by_label("cpu").expect("cpu").data, vec![1.0]);
    }

    #[test]
    fn append_rejects_repeated_series_in_one_call() {
        let mut state = ChartState::from_parts(labels(&["a"]), vec![Series::new("cpu", vec![1.0])])
            .expect("aligned state");

        let err = state
            .append(
                labels(&["b"]),
                vec![Series::new("cpu", vec![2.0]), Series::new("cpu", vec![3.0])],
            )
            .expect_err("duplicate must fail");
        assert!(matches!(err, ChartError::DuplicateSeries { ref label } if label == "cpu"));
        assert_eq!(state.series_by_label("cpu").expect("cpu").data, vec![1.0]);
    }

    #[test]
    fn truncate_undoes_an_append() {
        let mut state = ChartState::from_parts(labels(&["a"]), vec![Series::new("cpu", vec![1.0])])
            .expect("aligned state");
        let before = state.clone();

        state
            .append(labels(&["b", "c"]), vec![Series::new("cpu", vec![2.0, 3.0])])
            .expect("append");
        state.truncate(1);

        assert_eq!(state, before);
        assert!(state.is_aligned());
    }

    #[test]
    fn value_extent_skips_non_finite_points() {
        let state = ChartState::from_parts(
            labels(&["a", "b", "c"]),
            vec![Series::new("cpu", vec![3.0, f64::NAN, -1.0])],
        )
        .expect("aligned state");
        assert_eq!(state.value_extent(), Some((-1.0, 3.0)));
        assert_eq!(ChartState::default().value_extent(), None);
    }
}
