use super::codec::{RecordConverter, RecordTypeMapper};
use hickory_proto::op::{Message, Query};
use recordbook_application::ports::RecordBook;
use recordbook_application::use_cases::LookupRecordsUseCase;
use recordbook_domain::{DomainName, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a decoded query into a store lookup and, on a hit, into a
/// response. A miss yields no response at all.
pub struct QueryResolver {
    lookup: LookupRecordsUseCase,
}

impl QueryResolver {
    pub fn new(book: Arc<dyn RecordBook>) -> Self {
        Self {
            lookup: LookupRecordsUseCase::new(book),
        }
    }

    /// `None` when the question cannot name a stored record set, which the
    /// caller treats as a miss.
    pub fn derive_key(query: &Query) -> Option<(DomainName, RecordType)> {
        let record_type = RecordTypeMapper::from_hickory(query.query_type())?;
        let name = RecordConverter::name_from_hickory(query.name()).ok()?;
        Some((name, record_type))
    }

    /// Appends `records` to the answer section. Header, ID and question
    /// section are left as received.
    pub fn compose_answer(message: &mut Message, records: &[ResourceRecord]) {
        let answers = records
            .iter()
            .filter_map(|record| match RecordConverter::to_hickory(record) {
                Ok(answer) => Some(answer),
                Err(e) => {
                    warn!(name = %record.name, error = %e, "Skipping unencodable record");
                    None
                }
            })
            .collect::<Vec<_>>();
        message.add_answers(answers);
    }

    /// Resolves the first question only; any further questions are ignored.
    pub fn resolve(&self, mut message: Message) -> Option<Message> {
        let query = message.queries().first()?;

        let Some((name, record_type)) = Self::derive_key(query) else {
            debug!(
                name = %query.name(),
                record_type = ?query.query_type(),
                "Query outside the stored type set"
            );
            return None;
        };

        let records = self.lookup.execute(&name, record_type)?;
        Self::compose_answer(&mut message, &records);
        Some(message)
    }
}
