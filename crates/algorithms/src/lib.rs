pub mod bernstein_vazirani;
pub mod deutsch;
pub mod sampling;
pub mod simon;

pub use bernstein_vazirani::{bernstein_vazirani, dot_product_table};
pub use deutsch::{deutsch, deutsch_jozsa, FunctionClass};
pub use sampling::outcome_counts;
pub use simon::{simon_period, simon_sample};
