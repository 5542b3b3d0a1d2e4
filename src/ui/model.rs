use crate::catalog::HookCategory;
use crate::playback::{ProcessorState, Speed};

/// Where a step sits relative to the playback position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Current,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookView {
    pub category: HookCategory,
    pub label: Option<String>,
    pub info_available: Vec<String>,
    /// Whether playback has passed this hook since the last reset.
    pub fired: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub ordinal: usize,
    pub label: String,
    pub component: String,
    pub timing: Option<String>,
    pub status: StepStatus,
    pub hook: Option<HookView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowView {
    pub title: String,
    pub steps: Vec<StepView>,
    pub position: Option<usize>,
    pub description: Option<String>,
    pub playing: bool,
    pub speed: Speed,
    pub state: ProcessorState,
}

impl FlowView {
    #[must_use]
    pub fn current_step(&self) -> Option<&StepView> {
        self.position.and_then(|index| self.steps.get(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRow {
    pub label: String,
    pub timing_ms: u32,
    pub is_hook: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingView {
    pub title: String,
    pub rows: Vec<TimingRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Text,
    Flow(FlowView),
    Timing(Vec<TimingView>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateView {
    pub input_len: usize,
    pub error: bool,
}

/// Everything the renderer needs for one frame. Rebuilt after every state
/// change and pushed over the UI watch channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckView {
    pub no_color: bool,
    pub slide_index: usize,
    pub slide_count: usize,
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub lines: Vec<String>,
    /// `Some` only while speaker notes are toggled on.
    pub notes: Option<Vec<String>>,
    pub body: ViewBody,
    /// `Some` while the passcode gate is still locked.
    pub gate: Option<GateView>,
}

impl Default for DeckView {
    fn default() -> Self {
        Self {
            no_color: false,
            slide_index: 0,
            slide_count: 1,
            label: String::new(),
            title: String::new(),
            subtitle: String::new(),
            lines: Vec::new(),
            notes: None,
            body: ViewBody::Text,
            gate: None,
        }
    }
}
