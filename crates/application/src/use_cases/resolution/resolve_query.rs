use dnsforever_domain::{
    domain_name, DnsQuery, DomainError, RecordHeader, RecordType, Resolution,
};
use std::sync::Arc;
use tracing::{debug, trace};

use super::AdditionalSectionProcessor;
use crate::ports::ZoneStore;

/// Answers one query from the zones in the store.
///
/// Synchronous and side-effect free: the result depends only on the query
/// and on the zone snapshots read while answering it.
pub struct ResolveQueryUseCase {
    store: Arc<dyn ZoneStore>,
    additional: AdditionalSectionProcessor,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn ZoneStore>) -> Self {
        Self {
            additional: AdditionalSectionProcessor::new(Arc::clone(&store)),
            store,
        }
    }

    pub fn execute(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let name = domain_name::normalize(&query.domain);

        let zone = self.store.find_zone(&name).ok_or_else(|| {
            debug!(domain = %query.domain, "No enclosing zone");
            DomainError::NoAuthority(query.domain.to_string())
        })?;

        let records = zone.records(&name).ok_or_else(|| {
            debug!(domain = %query.domain, zone = %zone.apex(), "Name not in zone");
            DomainError::AuthoritativeName(query.domain.to_string())
        })?;

        let at_apex = zone.is_apex(&name);
        let mut answer = Vec::new();
        let mut authority = Vec::new();
        let mut aliases = Vec::new();

        for record in records
            .iter()
            .filter(|record| record.class().matches(query.class))
        {
            let record_type = record.record_type();

            // NS below the apex marks a zone cut; the child is authoritative
            // for these, so they go out as a non-authoritative referral.
            // RFC 2181 section 6.1.
            if record_type == RecordType::NS && !at_apex {
                authority.push(RecordHeader::non_authoritative(Arc::clone(record)));
            } else if record_type.answers(query.record_type) {
                answer.push(RecordHeader::authoritative(Arc::clone(record)));
            }

            if record_type == RecordType::CNAME {
                aliases.push(RecordHeader::authoritative(Arc::clone(record)));
            }
        }

        // Single level only: the alias target's own data is not chased.
        let substituted = answer.is_empty() && !aliases.is_empty();
        if substituted {
            answer = aliases;
        }

        let glue: Vec<RecordHeader> = self.additional.records(&answer, &authority).collect();

        // Glue for a substituted alias stays next to the CNAME in the answer
        // section rather than going to additional.
        let additional = if substituted {
            answer.extend(glue);
            Vec::new()
        } else {
            glue
        };

        if answer.is_empty() && authority.is_empty() {
            // No data: hand back the SOA so the result can be cached
            // negatively. RFC 2308 section 2.2.
            authority.push(RecordHeader::authoritative(Arc::clone(zone.soa())));
        }

        trace!(
            domain = %name,
            record_type = %query.record_type,
            answer = answer.len(),
            authority = authority.len(),
            additional = additional.len(),
            "Query resolved"
        );

        Ok(Resolution::new(answer, authority, additional))
    }
}
