use super::strategy::ClipboardPayload;

/// Kind of element a paste event targeted.
///
/// Only pastes aimed at a non-interactive container are eligible for grid
/// handling; pastes into interactive elements (inputs, editable cells) keep
/// their native behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTargetKind {
    Container,
    Interactive,
}

/// A native copy event routed through the adapter.
///
/// The handler fills `payload` and suppresses the default action when the
/// adapter is armed; otherwise the event passes through untouched and the
/// platform's own copy proceeds.
#[derive(Debug, Clone, Default)]
pub struct CopyEvent {
    /// Content written to the clipboard, if the handler produced any.
    pub payload: Option<ClipboardPayload>,
    /// True once the handler claimed the event.
    pub default_prevented: bool,
}

impl CopyEvent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Textual payload, if any text was produced.
    #[must_use]
    pub fn payload_text(&self) -> Option<&str> {
        self.payload.as_ref().and_then(ClipboardPayload::as_text)
    }
}

/// A native paste event routed through the adapter.
///
/// Clipboard text can surface through several platform APIs; each optional
/// field mirrors one of them and [`PasteEvent::clipboard_text`] probes them
/// in fixed order.
#[derive(Debug, Clone)]
pub struct PasteEvent {
    pub target: PasteTargetKind,
    /// Text from the legacy global clipboard object.
    pub global_text: Option<String>,
    /// Text carried by the event itself.
    pub event_text: Option<String>,
    /// Text carried by the underlying platform event.
    pub raw_event_text: Option<String>,
    /// True once the handler claimed the event.
    pub default_prevented: bool,
}

/// Ordered clipboard-text providers; the first to yield text wins.
const TEXT_PROVIDERS: [for<'a> fn(&'a PasteEvent) -> Option<&'a str>; 3] = [
    |event| event.global_text.as_deref(),
    |event| event.event_text.as_deref(),
    |event| event.raw_event_text.as_deref(),
];

impl PasteEvent {
    /// An event targeting the grid's container, carrying `text` through the
    /// event's own clipboard data.
    #[must_use]
    pub fn with_text(target: PasteTargetKind, text: impl Into<String>) -> Self {
        Self {
            target,
            global_text: None,
            event_text: Some(text.into()),
            raw_event_text: None,
            default_prevented: false,
        }
    }

    /// An event with no clipboard text available from any source.
    #[must_use]
    pub fn empty(target: PasteTargetKind) -> Self {
        Self {
            target,
            global_text: None,
            event_text: None,
            raw_event_text: None,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Probes the text providers in order and returns the first available
    /// clipboard text.
    #[must_use]
    pub fn clipboard_text(&self) -> Option<&str> {
        TEXT_PROVIDERS.iter().find_map(|provider| provider(self))
    }
}

/// The platform selection/copy machinery the adapter drives during an
/// explicit copy.
///
/// Production implementations wrap the host's selection and clipboard APIs
/// (including any legacy-engine alternate selection path); tests inject a
/// fake. `exec_copy` must behave synchronously: the returned event stands
/// for the copy event the platform fires before the copy action returns.
pub trait CopyDispatcher {
    /// The live native text selection, if the user has one.
    fn selection_text(&self) -> Option<String>;

    /// Programmatically selects the grid's region so the native copy
    /// captures the intended scope.
    fn select_grid_region(&mut self);

    /// Triggers the platform copy action and returns the copy event it
    /// fired.
    fn exec_copy(&mut self) -> CopyEvent;

    /// Removes any programmatic selection left behind by
    /// [`CopyDispatcher::select_grid_region`].
    fn clear_selection(&mut self);
}
