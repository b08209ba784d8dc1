pub mod page;

pub use page::CandidatePage;
