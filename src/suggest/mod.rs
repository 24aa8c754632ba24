pub mod advice;
pub mod heuristic;
pub mod usage;


pub use advice::{advice_title, advise, recommend, Advice, Recommendation, Verdict};
pub use heuristic::{suggest, FALLBACK_ORDER};
pub use usage::UsageContext;
