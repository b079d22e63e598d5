/// User events posted to the winit loop from other threads.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker left a finished frame in the presenter adapter.
    Wake,
}
