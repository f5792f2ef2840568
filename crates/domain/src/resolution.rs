use crate::dns_record::{RecordHeader, RecordType};

/// The three record sections an authoritative lookup produces. Encoding
/// them is the caller's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub answer: Vec<RecordHeader>,
    pub authority: Vec<RecordHeader>,
    pub additional: Vec<RecordHeader>,
}

impl Resolution {
    pub fn new(
        answer: Vec<RecordHeader>,
        authority: Vec<RecordHeader>,
        additional: Vec<RecordHeader>,
    ) -> Self {
        Self {
            answer,
            authority,
            additional,
        }
    }

    /// The name exists but holds nothing of the asked type: empty answer,
    /// SOA in authority.
    pub fn is_no_data(&self) -> bool {
        self.answer.is_empty()
            && self
                .authority
                .iter()
                .all(|header| header.record_type() == RecordType::SOA)
            && !self.authority.is_empty()
    }

    /// The answer delegates to a child zone instead of answering.
    pub fn is_referral(&self) -> bool {
        self.answer.is_empty()
            && self
                .authority
                .iter()
                .any(|header| header.record_type() == RecordType::NS && !header.authoritative)
    }

    pub fn into_sections(self) -> (Vec<RecordHeader>, Vec<RecordHeader>, Vec<RecordHeader>) {
        (self.answer, self.authority, self.additional)
    }
}
