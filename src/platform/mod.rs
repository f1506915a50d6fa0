//! Chipset-specific pad macro behavior.
//!
//! Every chipset generation is a layer that owns the next, more generic layer. A layer implements
//! the behaviors it changes and leaves the rest to the trait's default methods, which forward to
//! the next layer. [`sunrise::Sunrise`] is the base of every chain and implements all behaviors.

use log::error;
use std::{fmt, str::FromStr};

use crate::{
  context::MacroContext,
  error::{PadGenError, Result},
  field::PAD_RST_CFG,
  pad::SourceMode,
  value::ResetSource,
};

pub mod alderlake;
pub mod cannonlake;
pub mod jasperlake;
pub mod lewisburg;
pub mod meteorlake;
pub mod sunrise;
pub mod tigerlake;

/// Read-only bits of the two pad configuration registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOnlyMasks {
  pub dw0: u32,
  pub dw1: u32,
}

/// One layer of a platform chain.
///
/// Behaviors that take a [`MacroContext`] read the pad registers from it and add to its macro
/// buffer. When they need another behavior (the termination argument, for instance) they go through
/// the context, which dispatches to the outermost layer.
pub trait PlatformLayer {
  /// The next, more generic layer. `None` marks the base of the chain, where the default methods
  /// below do nothing.
  fn fallback(&self) -> Option<&dyn PlatformLayer>;

  /// Group keyword contained in `line`, if the line describes a pad of one of this platform's
  /// groups.
  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    self.fallback().and_then(|next| next.group_name_extract(line))
  }

  /// Whether `line` belongs to this platform's GPIO namespace at all.
  fn keyword_check(&self, line: &str) -> bool {
    self.fallback().map_or(false, |next| next.keyword_check(line))
  }

  fn read_only_masks(&self) -> ReadOnlyMasks {
    self
      .fallback()
      .map_or(ReadOnlyMasks::default(), |next| next.read_only_masks())
  }

  /// Converts the hardware PADRSTCFG encoding of the pad's community into the symbolic encoding.
  fn reset_remap(&self, ctx: &mut MacroContext<'_>) {
    if let Some(next) = self.fallback() {
      next.reset_remap(ctx);
    }
  }

  /// Adds the pad termination argument.
  fn pull(&self, ctx: &mut MacroContext<'_>) {
    if let Some(next) = self.fallback() {
      next.pull(ctx);
    }
  }

  /// Builds a `PAD_CFG_GPI*` macro.
  fn gpi_macro_add(&self, ctx: &mut MacroContext<'_>) {
    if let Some(next) = self.fallback() {
      next.gpi_macro_add(ctx);
    }
  }

  /// Builds a `PAD_CFG_GPO*` macro.
  fn gpo_macro_add(&self, ctx: &mut MacroContext<'_>) {
    if let Some(next) = self.fallback() {
      next.gpo_macro_add(ctx);
    }
  }

  /// Builds a `PAD_CFG_NF*` macro.
  fn native_function_macro_add(&self, ctx: &mut MacroContext<'_>) {
    if let Some(next) = self.fallback() {
      next.native_function_macro_add(ctx);
    }
  }

  /// Builds a `PAD_NC` macro.
  fn no_conn_macro_add(&self, ctx: &mut MacroContext<'_>) {
    if let Some(next) = self.fallback() {
      next.no_conn_macro_add(ctx);
    }
  }
}

/// Rewrites PADRSTCFG through `remapping`, indexed by the hardware code.
///
/// Only register dumps carry hardware codes, and the GPD community already uses the symbolic
/// encoding. Without a known group, a `GPD` pad name prefix identifies that community. A code
/// without an entry is logged and left as is. In every case the reset field is withdrawn from the
/// decoded set so the macro has to state it again.
pub(crate) fn remap_reset_source(ctx: &mut MacroContext<'_>, remapping: &[ResetSource]) {
  if ctx.options().source != SourceMode::Inteltool {
    return;
  }
  let gpd = match ctx.pad_group() {
    Some(group) => group == "GPD",
    None => ctx.pad_id().starts_with("GPD"),
  };
  if gpd {
    return;
  }

  let code = ctx.dw0_mut().decode(&PAD_RST_CFG);
  match remapping.get(code as usize) {
    Some(source) => {
      ctx.dw0_mut().set_field(&PAD_RST_CFG, source.code());
    }
    None => error!(
      "{}: invalid pad reset config {:#x}, left unchanged",
      ctx.pad_id(),
      code
    ),
  }
  ctx.dw0_mut().forget_decoded(PAD_RST_CFG.mask());
}

/// Chipsets a chain can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Sunrise,
  Lewisburg,
  CannonLake,
  TigerLake,
  JasperLake,
  AlderLake,
  MeteorLake,
}
impl Platform {
  pub const ALL: [Platform; 7] = [
    Platform::Sunrise,
    Platform::Lewisburg,
    Platform::CannonLake,
    Platform::TigerLake,
    Platform::JasperLake,
    Platform::AlderLake,
    Platform::MeteorLake,
  ];

  /// Short name used to select the platform.
  pub fn name(&self) -> &'static str {
    match self {
      Platform::Sunrise => "snr",
      Platform::Lewisburg => "lbg",
      Platform::CannonLake => "cnl",
      Platform::TigerLake => "tgl",
      Platform::JasperLake => "jsl",
      Platform::AlderLake => "adl",
      Platform::MeteorLake => "mtl",
    }
  }

  /// Builds the outermost layer of the platform together with its fallback chain.
  pub fn chain(&self) -> Box<dyn PlatformLayer> {
    match self {
      Platform::Sunrise => Box::new(sunrise::Sunrise::new()),
      Platform::Lewisburg => Box::new(lewisburg::Lewisburg::new()),
      Platform::CannonLake => Box::new(cannonlake::CannonLake::new()),
      Platform::TigerLake => Box::new(tigerlake::TigerLake::new()),
      Platform::JasperLake => Box::new(jasperlake::JasperLake::new()),
      Platform::AlderLake => Box::new(alderlake::AlderLake::new()),
      Platform::MeteorLake => Box::new(meteorlake::MeteorLake::new()),
    }
  }

  pub fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    self.chain().group_name_extract(line)
  }

  pub fn keyword_check(&self, line: &str) -> bool {
    self.chain().keyword_check(line)
  }
}
impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
impl FromStr for Platform {
  type Err = PadGenError;

  fn from_str(s: &str) -> Result<Self> {
    Platform::ALL
      .iter()
      .copied()
      .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| PadGenError::new(&format!("Unknown platform '{}'", s)))
  }
}
