//! Dominance Filter - Pareto front extraction under all-criteria-minimise semantics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::domain::foundation::ValidationError;

/// Algorithm used to extract the Pareto front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominanceVariant {
    /// Compares every ordered pair. Baseline oracle.
    Exhaustive,
    /// Scans forward candidates only, dropping candidates the current point dominates.
    EarlyExit,
    /// Sorts by distance to the ideal point, then runs `EarlyExit`.
    #[default]
    PreSorted,
}

impl DominanceVariant {
    /// Every variant, in benchmark order.
    pub const ALL: [DominanceVariant; 3] = [
        DominanceVariant::Exhaustive,
        DominanceVariant::EarlyExit,
        DominanceVariant::PreSorted,
    ];

    /// Returns the configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DominanceVariant::Exhaustive => "exhaustive",
            DominanceVariant::EarlyExit => "early_exit",
            DominanceVariant::PreSorted => "pre_sorted",
        }
    }
}

impl fmt::Display for DominanceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DominanceVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "exhaustive" => Ok(DominanceVariant::Exhaustive),
            "early_exit" => Ok(DominanceVariant::EarlyExit),
            "pre_sorted" => Ok(DominanceVariant::PreSorted),
            other => Err(ValidationError::invalid_format(
                "dominance_variant",
                format!("unknown variant '{}'", other),
            )),
        }
    }
}

/// Treatment of coordinate-wise identical points.
///
/// Identical points dominate each other under the `<=` test, so without
/// deduplication the survivors depend on the variant and on input order:
/// `Exhaustive` drops every copy, `EarlyExit` keeps the last copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Collapse identical points to their first occurrence before filtering.
    #[default]
    Deduplicate,
    /// Filter the raw input.
    KeepAll,
}

/// Returns true if `x` dominates `y`: every coordinate of `x` is <= the
/// corresponding coordinate of `y`. Callers guarantee `x` and `y` are
/// different points of the input.
pub fn dominates(x: &[f64], y: &[f64]) -> bool {
    x.iter().zip(y.iter()).all(|(a, b)| a <= b)
}

/// Indices of the surviving points plus the work done to find them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoFront {
    /// Input positions of the non-dominated points.
    pub indices: Vec<usize>,
    /// Number of pairwise dominance tests performed.
    pub comparisons: usize,
}

impl ParetoFront {
    /// Number of surviving points.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing survived.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves the surviving points against the input.
    pub fn points<'a, P: AsRef<[f64]>>(&self, input: &'a [P]) -> Vec<&'a [f64]> {
        self.indices.iter().map(|&i| input[i].as_ref()).collect()
    }

    /// Surviving indices in ascending order, for set comparisons.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted
    }
}

/// Timing and work for one variant over one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceReport {
    pub variant: DominanceVariant,
    pub front: ParetoFront,
    pub elapsed: Duration,
}

/// Configurable Pareto filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DominanceFilter {
    variant: DominanceVariant,
    duplicates: DuplicatePolicy,
    ideal: Option<Vec<f64>>,
}

impl DominanceFilter {
    /// Creates a filter with the given variant, deduplication on, origin as ideal.
    pub fn new(variant: DominanceVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Sets the duplicate policy.
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Replaces the origin as the reference point of the pre-sorted variant.
    pub fn with_ideal(mut self, ideal: Vec<f64>) -> Self {
        self.ideal = Some(ideal);
        self
    }

    /// The configured variant.
    pub fn variant(&self) -> DominanceVariant {
        self.variant
    }

    /// Computes the Pareto front of `points`.
    ///
    /// The result is always a subset of the input. On inputs without
    /// duplicates (or with `DuplicatePolicy::Deduplicate`) every variant
    /// returns the same set of indices, possibly in a different order.
    pub fn front<P: AsRef<[f64]>>(&self, points: &[P]) -> ParetoFront {
        let candidates = match self.duplicates {
            DuplicatePolicy::Deduplicate => first_occurrences(points),
            DuplicatePolicy::KeepAll => (0..points.len()).collect(),
        };

        match self.variant {
            DominanceVariant::Exhaustive => exhaustive(points, &candidates),
            DominanceVariant::EarlyExit => early_exit(points, candidates),
            DominanceVariant::PreSorted => {
                let sorted = self.sort_by_distance(points, candidates);
                early_exit(points, sorted)
            }
        }
    }

    /// Returns the surviving points themselves.
    pub fn filter<P: AsRef<[f64]>>(&self, points: &[P]) -> Vec<Vec<f64>> {
        self.front(points)
            .points(points)
            .into_iter()
            .map(<[f64]>::to_vec)
            .collect()
    }

    /// Runs every variant over the same input with this filter's settings.
    pub fn benchmark<P: AsRef<[f64]>>(&self, points: &[P]) -> Vec<DominanceReport> {
        DominanceVariant::ALL
            .iter()
            .map(|&variant| {
                let filter = Self {
                    variant,
                    ..self.clone()
                };
                let started = Instant::now();
                let front = filter.front(points);
                DominanceReport {
                    variant,
                    front,
                    elapsed: started.elapsed(),
                }
            })
            .collect()
    }

    fn sort_by_distance<P: AsRef<[f64]>>(&self, points: &[P], mut order: Vec<usize>) -> Vec<usize> {
        let distances: Vec<f64> = points
            .iter()
            .map(|p| distance_to(p.as_ref(), self.ideal.as_deref()))
            .collect();
        order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
        order
    }
}

/// Euclidean distance to the ideal point; missing ideal coordinates read as 0.
fn distance_to(point: &[f64], ideal: Option<&[f64]>) -> f64 {
    point
        .iter()
        .enumerate()
        .map(|(k, v)| {
            let target = ideal.and_then(|i| i.get(k)).copied().unwrap_or(0.0);
            (v - target).powi(2)
        })
        .sum::<f64>()
        .sqrt()
}

/// Indices of the first occurrence of each distinct point.
fn first_occurrences<P: AsRef<[f64]>>(points: &[P]) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let point = point.as_ref();
        if !kept.iter().any(|&k| points[k].as_ref() == point) {
            kept.push(i);
        }
    }
    kept
}

fn exhaustive<P: AsRef<[f64]>>(points: &[P], candidates: &[usize]) -> ParetoFront {
    let mut indices = Vec::new();
    let mut comparisons = 0;

    for &i in candidates {
        let mut dominated = false;
        for &j in candidates {
            if i == j {
                continue;
            }
            comparisons += 1;
            if dominates(points[j].as_ref(), points[i].as_ref()) {
                dominated = true;
                break;
            }
        }
        if !dominated {
            indices.push(i);
        }
    }

    ParetoFront {
        indices,
        comparisons,
    }
}

/// Forward scan with filtering.
///
/// Each point is compared with every remaining point after it. A forward
/// point that the current point dominates is removed from the list, so it
/// is never scanned again; the scan of the current point continues past
/// it. The scan stops at the first forward dominator.
fn early_exit<P: AsRef<[f64]>>(points: &[P], mut candidates: Vec<usize>) -> ParetoFront {
    let mut indices = Vec::new();
    let mut comparisons = 0;
    let mut i = 0;

    while i < candidates.len() {
        let current = points[candidates[i]].as_ref();
        let mut dominated = false;
        let mut j = i + 1;

        while j < candidates.len() {
            let other = points[candidates[j]].as_ref();
            comparisons += 1;
            if dominates(other, current) {
                dominated = true;
                break;
            }
            if dominates(current, other) {
                candidates.remove(j);
            } else {
                j += 1;
            }
        }

        if !dominated {
            indices.push(candidates[i]);
        }
        i += 1;
    }

    ParetoFront {
        indices,
        comparisons,
    }
}
