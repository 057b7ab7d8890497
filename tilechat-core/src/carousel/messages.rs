//! Message types exchanged between a viewer and its host

/// Inputs the host forwards to the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerMessage {
    // Navigation (manual, pauses playback)
    Next,
    Previous,
    GoTo(usize),

    // Playback
    TogglePlay,
    SetPlaying(bool),

    // Raw wheel/trackpad deltas, debounced by the viewer
    Wheel { delta_x: f32, delta_y: f32 },

    // Visibility reporting
    Intersection { ratio: f32 },
    VisibilityUnsupported,

    // Pagination
    LoadMore,

    // Requests the viewer passes up to the chat script
    ChangeCategory,
    OpenDetails,
}

/// Notifications the viewer sends up to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    IndexChanged {
        index: usize,
    },
    PlaybackChanged {
        playing: bool,
    },
    VisibilityChanged {
        visible: bool,
    },
    WindowExtended {
        window_size: usize,
        has_more: bool,
    },
    ItemsReplaced {
        generation: u64,
        total: usize,
        window_size: usize,
    },
    /// The user asked to pick another category from within the viewer.
    CategoryChangeRequested,
    DetailsRequested {
        url: String,
    },
}
