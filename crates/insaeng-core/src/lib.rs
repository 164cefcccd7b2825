//! Core logic for the insaeng life-in-weeks app.
//!
//! Pure computations shared by the TUI and the web form variant: the
//! aspect-ratio-fit grid layout, the white-to-green color ramp, week
//! arithmetic over birth dates, and the bilingual string tables. Nothing
//! here touches the terminal or the network.

pub mod layout;
pub mod locale;
pub mod ramp;
pub mod weeks;

pub use layout::{Dimensions, GridSpec, SurfaceNotReady, layout};
pub use locale::{FontScale, Language, pick_reminder};
pub use ramp::Rgb;
pub use weeks::{InvalidDateFormat, TOTAL_WEEKS, parse_birth_date, weeks_lived, weeks_remaining};
