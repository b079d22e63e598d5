use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::region::Region;

/// Snapshot of everything one render pass reads.
///
/// Taken by value so the viewport can move on while a pass is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub region: Region,
    pub budget: IterationBudget,
    pub canvas: CanvasSize,
}
