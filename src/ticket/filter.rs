use serde::{Deserialize, Serialize};

use super::Ticket;
use crate::workflow::TicketStatus;

/// Search text and status selection applied to the ticket list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Vec<TicketStatus>,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: impl IntoIterator<Item = TicketStatus>) -> Self {
        self.status = status.into_iter().collect();
        self
    }

    pub fn clear(&mut self) {
        self.search = None;
        self.status.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.status.is_empty()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    /// Case-insensitive match on id or title, and membership in the status
    /// selection when one is set.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let status_ok = self.status.is_empty() || self.status.contains(&ticket.status);
        if !status_ok {
            return false;
        }

        match self.search_term() {
            None => true,
            Some(term) => {
                ticket.id.to_lowercase().contains(&term)
                    || ticket.title.to_lowercase().contains(&term)
            }
        }
    }

    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|ticket| self.matches(ticket)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::{Category, Priority};
    use chrono::Utc;

    fn tickets() -> Vec<Ticket> {
        let make = |id: &str, title: &str, status| Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status,
            priority: Priority::Medium,
            category: Category::Software,
            created_at: Utc::now(),
        };
        vec![
            make("INC-100", "Outlook crashes on start", TicketStatus::Open),
            make("INC-101", "Printer offline", TicketStatus::InProgress),
            make("INC-102", "Request Jira access", TicketStatus::Closed),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let all = tickets();
        let filter = TicketFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&all).len(), 3);

        let blank = TicketFilter::new().with_search("   ");
        assert!(blank.is_empty());
        assert_eq!(blank.apply(&all).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_on_id_and_title() {
        let all = tickets();
        let by_title = TicketFilter::new().with_search("PRINTER");
        assert_eq!(by_title.apply(&all)[0].id, "INC-101");

        let by_id = TicketFilter::new().with_search("inc-102");
        assert_eq!(by_id.apply(&all).len(), 1);
    }

    #[test]
    fn test_status_selection_combines_with_search() {
        let all = tickets();
        let filter = TicketFilter::new()
            .with_status([TicketStatus::Open, TicketStatus::Closed])
            .with_search("access");
        let hits = filter.apply(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "INC-102");
    }

    #[test]
    fn test_clear_resets_filter() {
        let mut filter = TicketFilter::new()
            .with_status([TicketStatus::Resolved])
            .with_search("vpn");
        filter.clear();
        assert_eq!(filter, TicketFilter::default());
    }
}
