pub mod article;
pub mod config;
pub mod feedback;
pub mod logging;
pub mod mvi;
pub mod paging;
pub mod source;
pub mod view;
