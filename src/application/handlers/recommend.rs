//! RecommendHandler - ingest, rank, and shape results for display.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DominanceConfig, RankingConfig};
use crate::domain::constraints::Preferences;
use crate::domain::decision::{CriterionSpec, FieldValue, WeightVector};
use crate::domain::dominance::minimization_view;
use crate::domain::foundation::{AlternativeId, DomainError};
use crate::domain::ranking::{RankingPipeline, ScoredCandidates};
use crate::domain::scoring::Method;
use crate::ports::AlternativeSource;

/// A recommendation request.
///
/// Criteria fix the column order; `weights` must match them one to one.
/// Unset options fall back to the handler's [`RankingConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendCommand {
    pub criteria: Vec<CriterionSpec>,
    pub weights: WeightVector,

    #[serde(default)]
    pub method: Option<Method>,

    /// When absent, default preferences with the configured `top_n`.
    #[serde(default)]
    pub preferences: Option<Preferences>,

    /// Record fields to copy into each result; overrides the configured list.
    #[serde(default)]
    pub echo_fields: Option<Vec<String>>,

    /// Mark which results lie on the Pareto front of the eligible set.
    #[serde(default)]
    pub mark_pareto: bool,
}

/// One displayed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: AlternativeId,
    /// 1-based.
    pub rank: usize,
    /// Rounded to the method's display precision.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pareto_optimal: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldValue>,
}

/// Handler for recommendation requests.
pub struct RecommendHandler {
    source: Arc<dyn AlternativeSource>,
    ranking: RankingConfig,
    dominance: DominanceConfig,
}

impl RecommendHandler {
    pub fn new(
        source: Arc<dyn AlternativeSource>,
        ranking: RankingConfig,
        dominance: DominanceConfig,
    ) -> Self {
        Self {
            source,
            ranking,
            dominance,
        }
    }

    pub fn handle(&self, cmd: RecommendCommand) -> Result<Vec<Recommendation>, DomainError> {
        // 1. Resolve request defaults
        let method = cmd.method.unwrap_or(self.ranking.default_method);
        let preferences = cmd
            .preferences
            .unwrap_or_else(|| Preferences::default().with_top_n(self.ranking.top_n));
        let echo_fields = cmd
            .echo_fields
            .unwrap_or_else(|| self.ranking.echo_fields.clone());

        // 2. Load candidates
        let alternatives = self.source.load()?;

        // 3. Filter and score
        let pipeline =
            RankingPipeline::new(cmd.criteria).with_uta_segments(self.ranking.uta_segments);
        let scored = pipeline.score(&alternatives, &preferences, method, &cmd.weights)?;

        // 4. Order and truncate
        let ranking = RankingPipeline::rank_candidates(&scored, method, preferences.top_n);

        let pareto = if cmd.mark_pareto {
            Some(self.pareto_ids(&scored, &pipeline))
        } else {
            None
        };

        debug!(
            method = %method,
            candidates = alternatives.len(),
            returned = ranking.len(),
            "Recommendation produced"
        );

        // 5. Shape for display
        let by_id: BTreeMap<&AlternativeId, _> =
            scored.alternatives.iter().map(|alt| (&alt.id, *alt)).collect();
        let precision = method.display_precision();

        Ok(ranking
            .into_iter()
            .map(|result| {
                let fields = by_id
                    .get(&result.alternative_id)
                    .map(|alt| {
                        echo_fields
                            .iter()
                            .filter_map(|name| {
                                alt.field(name).map(|value| (name.clone(), value.clone()))
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                Recommendation {
                    pareto_optimal: pareto
                        .as_ref()
                        .map(|ids| ids.contains(&result.alternative_id)),
                    score: result.rounded_score(precision),
                    rank: result.rank_position,
                    id: result.alternative_id,
                    fields,
                }
            })
            .collect())
    }

    /// Ids of the eligible alternatives no other eligible alternative dominates.
    fn pareto_ids(
        &self,
        scored: &ScoredCandidates<'_>,
        pipeline: &RankingPipeline,
    ) -> HashSet<AlternativeId> {
        let Some(matrix) = &scored.matrix else {
            return HashSet::new();
        };
        let points = minimization_view(matrix, &pipeline.params().directions);
        let front = self.dominance.filter().front(&points);
        debug!(
            front = front.len(),
            comparisons = front.comparisons,
            "Pareto front marked"
        );
        front
            .indices
            .iter()
            .map(|&i| scored.alternatives[i].id.clone())
            .collect()
    }
}
