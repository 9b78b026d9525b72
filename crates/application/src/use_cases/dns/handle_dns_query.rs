use crate::ports::{QueryEventSink, RecordResolver};
use std::sync::Arc;
use zonelight_domain::{Answer, DnsQuery, QueryEvent};

pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn RecordResolver>,
    events: Arc<dyn QueryEventSink>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>, events: Arc<dyn QueryEventSink>) -> Self {
        Self { resolver, events }
    }

    /// Resolves every question of `query`, returning one answer per question
    /// in question order. Unresolved names yield `Answer::Unresolved`
    /// and never cut the rest of the query short.
    pub fn execute(&self, query: &DnsQuery) -> Vec<Answer> {
        query
            .questions
            .iter()
            .map(|question| {
                self.events.record(&QueryEvent::Question {
                    id: query.id,
                    question,
                });

                match self.resolver.resolve(&question.name) {
                    Some(resolution) => {
                        self.events.record(&QueryEvent::Resolved {
                            name: &question.name,
                            resolution: &resolution,
                        });
                        Answer::Resolved(resolution)
                    }
                    None => {
                        self.events.record(&QueryEvent::NotFound {
                            name: &question.name,
                        });
                        Answer::Unresolved
                    }
                }
            })
            .collect()
    }
}
