use serde::{Deserialize, Serialize};

use crate::coord::LatLng;

/// One atomic directions segment: a directed hop between two coordinates
/// with its reported distance, duration and instruction text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub start: LatLng,
    pub end: LatLng,
    /// Distance in metres.
    pub distance: u32,
    /// Duration in seconds.
    pub duration: u32,
    /// Instruction text as provided by the source, markup included.
    pub instruction: String,
    /// Source-provided display label for the distance, e.g. `"0.2 km"`.
    /// Empty when the payload omitted it.
    #[serde(default)]
    pub distance_text: String,
    /// Source-provided display label for the duration, e.g. `"3 min"`.
    #[serde(default)]
    pub duration_text: String,
}

impl Step {
    /// The instruction with `<b>` emphasis markup removed. Other markup
    /// passes through untouched for display layers to handle.
    pub fn plain_instruction(&self) -> String {
        self.instruction.replace("<b>", "").replace("</b>", "")
    }
}

/// One full candidate route: the ordered steps of a single alternative
/// offered for an origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub steps: Vec<Step>,
}

impl Alternative {
    pub fn new(steps: Vec<Step>) -> Self {
        Alternative { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
