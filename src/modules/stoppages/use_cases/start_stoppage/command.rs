/// Operator input for opening a stoppage, as received from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartStoppage {
    pub sector: String,
    pub start_date: String,
    pub start_time: String,
    pub reason: String,
    pub created_by: Option<String>,
}
