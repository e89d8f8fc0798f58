pub mod phrase_table;
pub mod remote;
pub mod resolver;
