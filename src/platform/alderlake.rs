//! Alder Lake PCH.

use super::{cannonlake::CannonLake, PlatformLayer};
use crate::keyword::keywords_check;

static GROUPS: &[&str] = &[
  "GPP_B", "GPP_T", "GPP_A", "GPP_S", "GPP_I", "GPP_H", "GPP_D", "GPD", "GPP_C", "GPP_F", "GPP_E",
  "GPP_R", "GPP_J", "GPP_K", "GPP_G",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AlderLake<N = CannonLake> {
  next: N,
}
impl AlderLake {
  pub fn new() -> Self {
    Self::wrapping(CannonLake::new())
  }
}
impl<N: PlatformLayer> AlderLake<N> {
  pub fn wrapping(next: N) -> Self {
    Self { next }
  }
}
impl<N: PlatformLayer> PlatformLayer for AlderLake<N> {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    Some(&self.next)
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }
}
