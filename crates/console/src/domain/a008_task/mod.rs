pub mod page;

pub use page::TaskBoardPage;
