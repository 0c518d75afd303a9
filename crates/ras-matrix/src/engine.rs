//! MatrixEngine: projects a collection onto the triage matrix.

use ras_core::config::{JitterSource, MatrixConfig};
use ras_core::RiskItem;
use ras_observability::matrix_span;

use crate::axis;
use crate::input::PlotInput;
use crate::jitter;
use crate::marker;
use crate::point::MatrixPoint;

/// Stateless projector. The same input sequence always yields the same points.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixEngine {
    jitter_source: JitterSource,
}

impl MatrixEngine {
    /// Engine seeding jitter from the input position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit jitter seed source.
    pub fn with_jitter_source(jitter_source: JitterSource) -> Self {
        Self { jitter_source }
    }

    pub fn from_config(config: &MatrixConfig) -> Self {
        Self::with_jitter_source(config.jitter_source)
    }

    pub fn jitter_source(&self) -> JitterSource {
        self.jitter_source
    }

    /// Project every item, in input order.
    pub fn project(&self, items: &[RiskItem]) -> Vec<MatrixPoint> {
        let _span = matrix_span!(items.len(), self.jitter_source).entered();
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.point(index, &PlotInput::from(item)))
            .collect()
    }

    /// Project loosely-typed inputs, in input order.
    pub fn project_inputs(&self, inputs: &[PlotInput]) -> Vec<MatrixPoint> {
        let _span = matrix_span!(inputs.len(), self.jitter_source).entered();
        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| self.point(index, input))
            .collect()
    }

    /// Position of the input at `index` within its sequence.
    pub fn point(&self, index: usize, input: &PlotInput) -> MatrixPoint {
        let seed = jitter::seed(self.jitter_source, index, &input.id);
        let x = axis::clamp_to_plot(axis::urgency_x(input.urgency) + jitter::x_offset(seed));
        let y = axis::clamp_to_plot(axis::cost_y(input.cost) + jitter::y_offset(seed));
        MatrixPoint {
            id: input.id.clone(),
            title: input.title.clone(),
            x,
            y,
            size: marker::size(input.priority),
            color: marker::color(input.priority).to_string(),
            priority: input.priority,
            urgency: input.urgency,
        }
    }
}
