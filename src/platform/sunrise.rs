//! Sunrise Point PCH, the base layer of every chain.

use log::warn;

use super::{PlatformLayer, ReadOnlyMasks};
use crate::{
  context::MacroContext,
  field::{
    PAD_RST_CFG, PAD_TOL, RX_INVERT, RX_LEVEL_EDGE_CONFIG, RX_STATE, RX_TX_BUF_DISABLE,
    TERMINATION,
  },
  keyword::{contains_any, keywords_check},
  pad::PAD_OWN_ACPI,
  value::{GpiRoute, ResetSource, TriggerSpec},
};

pub const PAD_CFG_DW0_RO_FIELDS: u32 =
  (0x1 << 27) | (0x1 << 24) | (0x3 << 21) | (0xf << 16) | 0xfe;
pub const PAD_CFG_DW1_RO_FIELDS: u32 = 0xfdff_c3ff;

static GROUPS: &[&str] = &[
  "GPP_A", "GPP_B", "GPP_F", "GPP_C", "GPP_D", "GPP_E", "GPP_G", "GPP_H", "GPP_I", "GPD",
];

static NAMESPACE: &[&str] = &["GPP_", "GPD"];

/// Name of a TERM encoding, if the encoding is defined.
pub fn termination_name(term: u32) -> Option<&'static str> {
  match term {
    0x0 => Some("NONE"),
    0x2 => Some("DN_5K"),
    0x4 => Some("DN_20K"),
    0x9 => Some("UP_1K"),
    0xa => Some("UP_5K"),
    0xb => Some("UP_2K"),
    0xc => Some("UP_20K"),
    0xd => Some("UP_667"),
    0xf => Some("NATIVE"),
    _ => None,
  }
}

/// Withdraws the trigger field unless it is `OFF`, the value the GPO, NC and native-function macros
/// imply.
fn require_trigger_off(ctx: &mut MacroContext<'_>) {
  let trig = TriggerSpec::new(ctx.dw0_mut().decode(&RX_LEVEL_EDGE_CONFIG));
  if trig != TriggerSpec::Off {
    ctx.dw0_mut().forget_decoded(RX_LEVEL_EDGE_CONFIG.mask());
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sunrise;
impl Sunrise {
  pub fn new() -> Self {
    Sunrise
  }
}
impl PlatformLayer for Sunrise {
  fn fallback(&self) -> Option<&dyn PlatformLayer> {
    None
  }

  fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    keywords_check(line, GROUPS)
  }

  fn keyword_check(&self, line: &str) -> bool {
    contains_any(line, NAMESPACE)
  }

  fn read_only_masks(&self) -> ReadOnlyMasks {
    ReadOnlyMasks {
      dw0: PAD_CFG_DW0_RO_FIELDS,
      dw1: PAD_CFG_DW1_RO_FIELDS,
    }
  }

  // Register dumps already use the symbolic encoding.
  fn reset_remap(&self, _ctx: &mut MacroContext<'_>) {}

  fn pull(&self, ctx: &mut MacroContext<'_>) {
    let term = ctx.dw1_mut().decode(&TERMINATION);
    let name = match termination_name(term) {
      Some(name) => name,
      None => {
        warn!("{}: invalid TERM value {:#x}", ctx.pad_id(), term);
        "INVALID"
      }
    };
    ctx.arg(name);
  }

  fn gpi_macro_add(&self, ctx: &mut MacroContext<'_>) {
    // Input status sampled by the dump, not configuration.
    ctx.dw0_mut().decode(&RX_STATE);

    let mut routes = Vec::new();
    for route in GpiRoute::ALL.iter() {
      if ctx.dw0_mut().decode(route.field()) != 0 {
        routes.push(*route);
      }
    }

    ctx.set_name("PAD_CFG_GPI");
    match routes.as_slice() {
      [] => {
        // PAD_CFG_GPI_TRIG_OWN(pad, pull, rst, trig, own)
        ctx.append_name("_TRIG_OWN");
        ctx.id().pull().rstsrc().trig().own();
      }
      [route] => {
        // PAD_CFG_GPI_APIC(pad, pull, rst, trig, inv)
        ctx.append_name(route.macro_suffix());
        ctx.id().pull().rstsrc().trig().invert();
      }
      [first, second] => {
        // PAD_CFG_GPI_DUAL_ROUTE(pad, pull, rst, trig, inv, route1, route2)
        let (first, second) = (first.name(), second.name());
        ctx.set_name("PAD_CFG_GPI_DUAL_ROUTE");
        ctx.id().pull().rstsrc().trig().invert().arg(first).arg(second);
      }
      _ => {
        // No short macro for three or more routes. The empty buffer selects the
        // `_PAD_CFG_STRUCT` form, which carries these fields.
        ctx.dw0_mut().decode(&PAD_RST_CFG);
        ctx.dw0_mut().decode(&RX_LEVEL_EDGE_CONFIG);
        ctx.dw0_mut().decode(&RX_INVERT);
        ctx.dw1_mut().decode(&TERMINATION);
        return;
      }
    }

    if !routes.is_empty() && ctx.options().ignore_fields {
      // Routed interrupts are always owned by ACPI.
      ctx.set_ownership(PAD_OWN_ACPI);
    }
  }

  fn gpo_macro_add(&self, ctx: &mut MacroContext<'_>) {
    require_trigger_off(ctx);
    let term = ctx.dw1_mut().decode(&TERMINATION);

    ctx.set_name("PAD_CFG");
    if ctx.is_ownership_driver() {
      // PAD_CFG_GPO_GPIO_DRIVER(pad, val, rst, pull)
      ctx.append_name("_GPO_GPIO_DRIVER");
      ctx.id().val().rstsrc().pull();
      return;
    }

    if term != 0 {
      // PAD_CFG_TERM_GPO(pad, val, pull, rst)
      ctx.append_name("_TERM_GPO");
      ctx.id().val().pull().rstsrc();
    } else {
      // PAD_CFG_GPO(pad, val, rst)
      ctx.append_name("_GPO");
      ctx.id().val().rstsrc();
    }
  }

  fn native_function_macro_add(&self, ctx: &mut MacroContext<'_>) {
    require_trigger_off(ctx);
    // The buffers are controlled by the native function.
    ctx.dw0_mut().decode(&RX_TX_BUF_DISABLE);

    // PAD_CFG_NF(pad, pull, rst, func)
    ctx.set_name("PAD_CFG_NF");
    if ctx.dw1_mut().decode(&PAD_TOL) != 0 {
      ctx.append_name("_1V8");
    }
    ctx.id().pull().rstsrc().padfn();
  }

  fn no_conn_macro_add(&self, ctx: &mut MacroContext<'_>) {
    // PAD_NC implies PAD_RESET(DEEP) | PAD_TRIG(OFF) | PAD_BUF(TX_RX_DISABLE)
    require_trigger_off(ctx);
    if ctx.dw0_mut().decode(&PAD_RST_CFG) != ResetSource::Deep.code() {
      ctx.dw0_mut().forget_decoded(PAD_RST_CFG.mask());
    }

    ctx.set_name("PAD_NC");
    ctx.id().pull();
  }
}
