//! Tiger Lake PCH.

use super::{cannonlake::CannonLake, PlatformLayer};
use crate::keyword::keywords_check;

static GROUPS: &[&str] = &[
  "GPP_A", "GPP_R", "GPP_B", "GPP_D", "GPP_C", "GPP_S", "GPP_G", "GPD", "GPP_E", "GPP_F", "GPP_H",
  "GPP_J", "GPP_K",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TigerLake<N = CannonLake> {
  next: N,
}
impl TigerLake {
  pub fn new() -> Self {
    Self::wrapping(CannonLake::new())
  }
}
impl<N: PlatformLayer> TigerLake<N> {
  pub fn wrapping(next: N) -> Self {
    Self { next }
  }
}
impl<N: PlatformLayer> PlatformLayer for TigerLake<N> {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    Some(&self.next)
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }
}
