use crate::modules::activity_records::core::record::NewRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("record content must not be empty")]
    EmptyContent,

    #[error("auto records are created by the timeline engine only")]
    AutoSourceNotAllowed,
}

pub enum Decision {
    Accepted { record: NewRecord },
    Rejected { reason: DecideError },
}
