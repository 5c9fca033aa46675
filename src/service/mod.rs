pub mod calendar_service;
pub mod color_policy;
pub mod enricher;
pub mod resolver;
pub mod tag_table;
pub mod update_flow;
