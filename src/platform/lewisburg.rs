//! Lewisburg server PCH. Pad behavior is identical to Sunrise Point, with more communities.

use super::{sunrise::Sunrise, PlatformLayer};
use crate::keyword::keywords_check;

static GROUPS: &[&str] = &[
  "GPP_A", "GPP_B", "GPP_F", "GPP_C", "GPP_D", "GPP_E", "GPD", "GPP_I", "GPP_J", "GPP_K", "GPP_G",
  "GPP_H", "GPP_L",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Lewisburg<N = Sunrise> {
  next: N,
}
impl Lewisburg {
  pub fn new() -> Self {
    Self::wrapping(Sunrise::new())
  }
}
impl<N: PlatformLayer> Lewisburg<N> {
  pub fn wrapping(next: N) -> Self {
    Self { next }
  }
}
impl<N: PlatformLayer> PlatformLayer for Lewisburg<N> {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    Some(&self.next)
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }
}
