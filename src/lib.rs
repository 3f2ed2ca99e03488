//! Practice Exercises
//!
//! Each module is a self-contained exercise demonstrating one language or
//! algorithm idea. The modules share no state and can be read in any order.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod exercises;

/// Practice Exercises Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::exercises::bubble_step::*;
    #[doc(no_inline)]
    pub use super::exercises::chunks::*;
    #[doc(no_inline)]
    pub use super::exercises::closures::*;
    #[doc(no_inline)]
    pub use super::exercises::digit_steps::*;
    #[doc(no_inline)]
    pub use super::exercises::field_access::*;
    #[doc(no_inline)]
    pub use super::exercises::fill::*;
    #[doc(no_inline)]
    pub use super::exercises::find::*;
    #[doc(no_inline)]
    pub use super::exercises::greetings::*;
    #[doc(no_inline)]
    pub use super::exercises::grid::*;
    #[doc(no_inline)]
    pub use super::exercises::name_check::*;
    #[doc(no_inline)]
    pub use super::exercises::swap::*;
}
