pub mod extractor;
pub mod feed;
pub mod index;
pub mod pipeline;
pub mod refdata;
pub mod report;
pub mod resolver;
