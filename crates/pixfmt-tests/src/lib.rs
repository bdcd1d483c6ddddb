//! Integration tests for the pixfmt crates.
//!
//! End-to-end checks that span codecs, the bulk dispatcher and the blending
//! engine: concrete scenarios, bit identity of every shortcut against the
//! canonical vector path, and compositing identities.

#[cfg(test)]
mod compositing;
#[cfg(test)]
mod identity;
#[cfg(test)]
mod metadata;
#[cfg(test)]
mod roundtrip;
#[cfg(test)]
mod scenarios;
