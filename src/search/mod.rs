pub mod client;
pub mod collapse;
pub mod rank;
pub mod resolver;

pub use client::{ScryfallClient, SearchClient, SortOrder};
pub use collapse::collapse_same_printing;
pub use rank::rank_results;
pub use resolver::{Resolver, SearchOptions, SearchOutcome, SearchStatus};
