/// Operator input for closing a stoppage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndStoppage {
    pub stoppage_id: String,
    pub end_time: String,
}
