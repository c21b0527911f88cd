use serde::Serialize;

/// The seven entity kinds the calendar timeline is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// A generated course meeting instance.
    Meeting,
    /// A general (institution-wide) event.
    Event,
    Holiday,
    Vacation,
    /// A task due marker.
    Task,
    /// A personal event, visible only to its owner.
    StudentEvent,
    /// A year or semester boundary marker.
    TermMarker,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Event => "event",
            Self::Holiday => "holiday",
            Self::Vacation => "vacation",
            Self::Task => "task",
            Self::StudentEvent => "studentEvent",
            Self::TermMarker => "termMarker",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
