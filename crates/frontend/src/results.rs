use tension_shared::models::{self, ClimbSummary, ResultPage};

/// Permission to run one page fetch. Carries the feed generation so a
/// completion that outlived a restart can be recognized and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Accumulates search result pages in order and enforces single-flight
/// fetch discipline: at most one page request is outstanding per feed,
/// and a restart invalidates whatever is still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFeed {
    climbs: Vec<ClimbSummary>,
    total: u64,
    last_page: Option<u32>,
    has_more: bool,
    in_flight: bool,
    generation: u64,
    error: Option<String>,
    searched: bool,
}

impl ResultFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything accumulated and hand back the ticket for page 0
    /// of a fresh search. A fetch still in flight keeps its old
    /// generation and will be discarded on completion.
    pub fn restart(&mut self) -> FetchTicket {
        self.climbs.clear();
        self.total = 0;
        self.last_page = None;
        self.has_more = true;
        self.error = None;
        self.searched = true;
        self.generation += 1;
        self.in_flight = true;
        FetchTicket {
            generation: self.generation,
            page: 0,
        }
    }

    /// Ticket for the next page, or `None` while a fetch is in flight or
    /// no further pages exist. Redundant visibility signals therefore
    /// coalesce into at most one outstanding fetch.
    pub fn request_more(&mut self) -> Option<FetchTicket> {
        if self.in_flight || !self.has_more {
            return None;
        }
        let page = match self.last_page {
            Some(p) => p + 1,
            // The first page never landed (it failed); try it again.
            None => 0,
        };
        self.error = None;
        self.in_flight = true;
        Some(FetchTicket {
            generation: self.generation,
            page,
        })
    }

    /// Fold a completed fetch into the feed; returns whether it was
    /// applied. Completions from before the most recent restart are
    /// discarded without touching any state.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<ResultPage, String>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(page = ticket.page, "discarding stale result page");
            return false;
        }
        self.in_flight = false;
        match result {
            Ok(page) => {
                self.total = page.total;
                self.has_more = models::has_more(page.page, page.page_size, page.total);
                self.last_page = Some(page.page);
                self.climbs.extend(page.items);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    pub fn climbs(&self) -> &[ClimbSummary] {
        &self.climbs
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// True while the first page of a search is still loading.
    pub fn is_initial_loading(&self) -> bool {
        self.in_flight && self.last_page.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// False until the first `restart`.
    pub fn has_searched(&self) -> bool {
        self.searched
    }
}
