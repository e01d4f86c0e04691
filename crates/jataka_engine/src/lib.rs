//! Horoscope engine: turns validated birth data into an immutable
//! [`Horoscope`].
//!
//! ```no_run
//! use jataka_engine::{BirthInput, EngineConfig, compute_horoscope};
//!
//! let input = BirthInput {
//!     name: "Meena".into(),
//!     place: "Chennai".into(),
//!     year: 2000, month: 1, day: 1, hour: 0, minute: 0,
//!     utc_offset_hours: 5.5,
//!     latitude: 13.08,
//!     longitude: 80.27,
//! };
//! let h = compute_horoscope(&input, &EngineConfig::default());
//! println!("{}", h.lagna.rashi.name());
//! ```
//!
//! Only the input boundary ([`BirthForm`] parsing, [`EngineConfig::load`],
//! [`PlaceResolver`]) returns errors. The computation never fails.

pub mod config;
pub mod digest;
pub mod error;
pub mod horoscope;
pub mod input;
pub mod pipeline;

pub use config::EngineConfig;
pub use error::EngineError;
pub use horoscope::{ChartBody, Horoscope, HouseChart, Placement};
pub use input::{
    BirthForm, BirthInput, IST_OFFSET_HOURS, Meridiem, PlaceCandidate, PlaceResolver,
};
pub use pipeline::compute_horoscope;
