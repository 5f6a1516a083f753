/// One execution unit (core) and the task occupying it at each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub label: String,
    pub tokens: Vec<String>,
}

impl Lane {
    pub fn new(label: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            label: label.into(),
            tokens,
        }
    }

    /// Number of ticks recorded for this lane.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Lanes keyed by label, in first-appearance order.
///
/// Re-inserting a label replaces its tokens but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    lanes: Vec<Lane>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered upsert. Returns `true` when an existing lane was overwritten.
    pub fn insert(&mut self, label: impl Into<String>, tokens: Vec<String>) -> bool {
        let label = label.into();
        match self.lanes.iter_mut().find(|lane| lane.label == label) {
            Some(lane) => {
                lane.tokens = tokens;
                true
            }
            None => {
                self.lanes.push(Lane::new(label, tokens));
                false
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.label == label)
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.lanes.iter().map(|lane| lane.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Longest lane in ticks; 0 when every lane is empty.
    pub fn max_ticks(&self) -> usize {
        self.lanes.iter().map(Lane::len).max().unwrap_or(0)
    }

    /// Distinct task tokens, lanes in order then ticks in order.
    pub fn distinct_tasks(&self) -> Vec<&str> {
        let mut tasks: Vec<&str> = Vec::new();
        for tok in self.lanes.iter().flat_map(|lane| lane.tokens.iter()) {
            if !tasks.contains(&tok.as_str()) {
                tasks.push(tok);
            }
        }
        tasks
    }
}
