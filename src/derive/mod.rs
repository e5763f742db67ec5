//! Derivation stages between the parsed color set and the theme map.
//!
//! Each submodule is a stateless strategy: free functions over immutable
//! input, one algorithm per concern. All of them are total over validated
//! hex; missing source colors are filled from `defaults` before they get
//! here, so nothing in this tree can fail.

pub mod accent;
pub mod background;
pub mod extended;
pub mod opacity;
