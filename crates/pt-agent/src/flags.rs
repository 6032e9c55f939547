//! Per-entity patrol settings, attached to each entity by the host.

/// Typed per-agent configuration, resolved once when a record is built.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentFlags {
    /// The entity patrols at all.
    pub patrol_enabled:   bool,
    /// The entity runs detection against targets.
    pub spotting_enabled: bool,
    /// Follow a named path instead of exploring at random.
    pub path_follower:    bool,
    /// Patrol every path carrying `path_name`, in declaration order.
    pub multi_path:       bool,
    pub path_name:        Option<String>,
    /// Node the path cursor starts on (wrapped to the path length).
    pub start_node:       usize,
}

impl AgentFlags {
    /// A random explorer, optionally able to spot.
    pub fn explorer(spotting: bool) -> Self {
        Self { patrol_enabled: true, spotting_enabled: spotting, ..Self::default() }
    }

    /// A path follower on the path(s) named `name`.
    pub fn follower(name: impl Into<String>, spotting: bool) -> Self {
        Self {
            patrol_enabled:   true,
            spotting_enabled: spotting,
            path_follower:    true,
            path_name:        Some(name.into()),
            ..Self::default()
        }
    }
}
