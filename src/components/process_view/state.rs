/// Transient view state for the process list panel.
#[derive(Default)]
pub struct ProcessView {
    /// Last terminate failure, shown next to the button until the next one.
    pub status: Option<String>,
}
