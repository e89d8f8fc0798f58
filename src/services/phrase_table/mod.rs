pub mod model;
pub mod normalize;
pub mod seed;
pub mod store;
pub mod table;

pub use model::PhraseEntry;
pub use table::{PairSummary, PhraseTable};
