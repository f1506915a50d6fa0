//! Meteor Lake SoC.

use super::{cannonlake::CannonLake, remap_reset_source, PlatformLayer};
use crate::{
  context::MacroContext,
  keyword::{contains_any, keywords_check},
  value::ResetSource,
};

static GROUPS: &[&str] = &[
  "GPP_V",
  "GPP_C",
  "GPP_A",
  "GPP_E",
  "GPP_H",
  "GPP_F",
  "GPP_S",
  "GPP_B",
  "GPP_D",
  "GPD",
  "VGPIO_USB",
  "VGPIO_PCIE",
];

static NAMESPACE: &[&str] = &["GPP_", "GPD", "VGPIO"];

static RESET_REMAP: &[ResetSource] = &[
  ResetSource::Rsmrst,
  ResetSource::Deep,
  ResetSource::Pltrst,
  ResetSource::Pwrok,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MeteorLake<N = CannonLake> {
  next: N,
}
impl MeteorLake {
  pub fn new() -> Self {
    Self::wrapping(CannonLake::new())
  }
}
impl<N: PlatformLayer> MeteorLake<N> {
  pub fn wrapping(next: N) -> Self {
    Self { next }
  }
}
impl<N: PlatformLayer> PlatformLayer for MeteorLake<N> {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    Some(&self.next)
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }

  fn keyword_check(&self, line: &str) -> bool {
    contains_any(line, NAMESPACE)
  }

  // The GPD community uses the common reset map and is skipped by the remap.
  fn reset_remap(&self, ctx: &mut MacroContext<'_>) {
    remap_reset_source(ctx, RESET_REMAP);
  }
}
