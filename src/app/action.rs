/// Side effects requested by the handler, executed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartTicker,
    StopTicker,
    Quit,
}
