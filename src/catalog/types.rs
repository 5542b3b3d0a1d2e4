use std::fmt;

/// When a hook fires relative to node placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookCategory {
    /// Workload identity known, node unknown; signal goes to every candidate node.
    EarlyBroadcast,
    /// Workload and node both known; signal goes to one node.
    LateTargeted,
    Both,
}

impl HookCategory {
    /// Parses an authored category name. `phase1`/`phase2` are accepted as
    /// the older spellings.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "early-broadcast" | "early_broadcast" | "phase1" => Some(Self::EarlyBroadcast),
            "late-targeted" | "late_targeted" | "phase2" => Some(Self::LateTargeted),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EarlyBroadcast => "early-broadcast",
            Self::LateTargeted => "late-targeted",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub const fn phase_label(self) -> &'static str {
        match self {
            Self::EarlyBroadcast => "Phase 1 broadcast",
            Self::LateTargeted => "Phase 2 targeted",
            Self::Both => "Phase 1 + 2",
        }
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    pub category: HookCategory,
    pub label: Option<String>,
    pub info_available: Vec<String>,
}

/// One stage of a depicted pipeline.
///
/// A step is a hook point exactly when `hook` is `Some`, so a hook point
/// without a category cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: String,
    pub ordinal: usize,
    pub label: String,
    pub component: String,
    pub description: String,
    pub hook: Option<Hook>,
    pub timing: Option<String>,
    pub timing_ms: Option<u32>,
}

impl Step {
    #[must_use]
    pub const fn is_hook_point(&self) -> bool {
        self.hook.is_some()
    }

    #[must_use]
    pub fn hook_category(&self) -> Option<HookCategory> {
        self.hook.as_ref().map(|hook| hook.category)
    }
}

/// A validated, non-empty, ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    id: String,
    title: String,
    subtitle: String,
    steps: Vec<Step>,
}

impl Catalog {
    /// Only called by the loader after validation.
    pub(super) const fn from_validated(
        id: String,
        title: String,
        subtitle: String,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            id,
            title,
            subtitle,
            steps,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step. Validation guarantees at least one step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn step_by_id(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn hook_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|step| step.is_hook_point())
    }

    /// Largest `timing_ms` in the catalog, used to scale timing bars.
    #[must_use]
    pub fn max_timing_ms(&self) -> Option<u32> {
        self.steps.iter().filter_map(|step| step.timing_ms).max()
    }
}
