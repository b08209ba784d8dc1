pub mod collection;
pub mod config;
pub mod dispatcher;
pub mod form;
pub mod list_filter;
pub mod logging;
pub mod surfaces;
