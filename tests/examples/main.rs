//! Example story tests.
//!
//! Plays the stories shipped in `stories/` end to end.

mod cave;
