/// Application actions triggered by user input or the tick timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    MoveSelectionUp,
    MoveSelectionDown,
    Tick,
}
