//! Jasper Lake SoC.

use super::{cannonlake::CannonLake, PlatformLayer};
use crate::keyword::keywords_check;

static GROUPS: &[&str] = &[
  "GPP_A", "GPP_B", "GPP_C", "GPP_D", "GPP_E", "GPP_F", "GPP_G", "GPP_H", "GPP_R", "GPP_S", "GPD",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct JasperLake<N = CannonLake> {
  next: N,
}
impl JasperLake {
  pub fn new() -> Self {
    Self::wrapping(CannonLake::new())
  }
}
impl<N: PlatformLayer> JasperLake<N> {
  pub fn wrapping(next: N) -> Self {
    Self { next }
  }
}
impl<N: PlatformLayer> PlatformLayer for JasperLake<N> {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    Some(&self.next)
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }
}
