//! Cannon Lake PCH.

use super::{remap_reset_source, sunrise::Sunrise, PlatformLayer, ReadOnlyMasks};
use crate::{context::MacroContext, keyword::keywords_check, value::ResetSource};

pub const PAD_CFG_DW0_RO_FIELDS: u32 =
  (0x1 << 27) | (0x1 << 24) | (0x3 << 21) | (0xf << 16) | 0xfc;
pub const PAD_CFG_DW1_RO_FIELDS: u32 = 0xfdff_c3ff;

static GROUPS: &[&str] = &[
  "GPP_A", "GPP_B", "GPP_G", "GPP_D", "GPP_F", "GPP_H", "GPD", "GPP_C", "GPP_E",
];

/// PADRSTCFG hardware codes of the GPP communities. Code 3 is reserved.
static RESET_REMAP: &[ResetSource] = &[
  ResetSource::Rsmrst,
  ResetSource::Deep,
  ResetSource::Pltrst,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CannonLake<N = Sunrise> {
  next: N,
}
impl CannonLake {
  pub fn new() -> Self {
    Self::wrapping(Sunrise::new())
  }
}
impl<N: PlatformLayer> CannonLake<N> {
  pub fn wrapping(next: N) -> Self {
    Self { next }
  }
}
impl<N: PlatformLayer> PlatformLayer for CannonLake<N> {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    Some(&self.next)
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }

  fn read_only_masks(&self) -> ReadOnlyMasks {
    ReadOnlyMasks {
      dw0: PAD_CFG_DW0_RO_FIELDS,
      dw1: PAD_CFG_DW1_RO_FIELDS,
    }
  }

  fn reset_remap(&self, ctx: &mut MacroContext<'_>) {
    remap_reset_source(ctx, RESET_REMAP);
  }
}
