//! High-level facade over the calculation engines.
//!
//! Accepts the JSON request shapes the outer API layer produces and returns
//! fully serializable chart structures. Re-exports the engine crates for
//! callers that need the lower-level pieces.

pub mod error;
pub mod facade;
pub mod input;

pub use error::MingliError;
pub use facade::{
    BaziReport, DivinationReport, HexagramView, bazi_chart, cast_hexagram, ziwei_chart,
};
pub use input::{BirthInput, DivinationInput, GenderInput, MethodInput};

pub use mingli_almanac as almanac;
pub use mingli_bazi as bazi;
pub use mingli_cycle as cycle;
pub use mingli_time as time;
pub use mingli_yijing as yijing;
pub use mingli_ziwei as ziwei;
