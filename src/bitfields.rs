//! Rendering of the `_PAD_CFG_STRUCT` form, used when no short macro describes a pad completely.

use log::debug;

use crate::{
  context::MacroContext,
  field::{
    IO_STANDBY_STATE, IO_STANDBY_TERMINATION, PAD_MODE, PAD_RST_CFG, PAD_TOL, RX_INVERT,
    RX_LEVEL_EDGE_CONFIG, RX_PAD_STATE_SELECT, RX_RAW_OVERRIDE_TO_1, RX_STATE, RX_TX_BUF_DISABLE,
    TERMINATION, TX_STATE,
  },
  register::RegisterKind,
  value::GpiRoute,
};

/// How the register contents of the `_PAD_CFG_STRUCT` form are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
  /// Symbolic coreboot bitfield macros, e.g. `PAD_FUNC(NF1) | PAD_RESET(DEEP)`.
  Coreboot,

  /// The register values as hex words.
  Raw,
}
impl Default for FieldFormat {
  fn default() -> Self {
    FieldFormat::Coreboot
  }
}

/// Replaces the macro buffer with `_PAD_CFG_STRUCT(pad, dw0, dw1)`.
pub(crate) fn advanced(ctx: &mut MacroContext<'_>) {
  let options = ctx.options();
  if options.ignore_fields {
    for kind in [RegisterKind::Dw0, RegisterKind::Dw1].iter() {
      let reg = ctx.register_mut(*kind);
      let ignored = reg.ignored_fields();
      if ignored != 0 {
        let value = reg.value() & !ignored;
        reg.set_value(value);
        debug!(
          "{}: {} bits {:#010x} dropped",
          ctx.pad_id(),
          kind.name(),
          ignored
        );
      }
    }
  }

  let (dw0, dw1) = match options.field_format {
    FieldFormat::Raw => (
      format!("{:#010x}", ctx.dw0().value()),
      format!("{:#010x}", ctx.dw1().value()),
    ),
    FieldFormat::Coreboot => (dw0_bitfields(ctx), dw1_bitfields(ctx)),
  };

  ctx.buffer_mut().clear();
  ctx.set_name("_PAD_CFG_STRUCT").id().arg(dw0).arg(dw1);
}

fn join(fields: Vec<String>) -> String {
  if fields.is_empty() {
    return "0".to_string();
  }
  fields.join(" | ")
}

fn dw0_bitfields(ctx: &mut MacroContext<'_>) -> String {
  let mut fields = Vec::new();
  let dw0 = ctx.dw0().clone();

  if dw0.get_field(&PAD_MODE) != 0 {
    fields.push(format!("PAD_FUNC({})", ctx.capture(|c| {
      c.padfn();
    })));
  }
  if dw0.get_field(&PAD_RST_CFG) != 0 {
    fields.push(format!("PAD_RESET({})", ctx.capture(|c| {
      c.rstsrc();
    })));
  }
  if dw0.get_field(&RX_LEVEL_EDGE_CONFIG) != 0 {
    fields.push(format!("PAD_TRIG({})", ctx.capture(|c| {
      c.trig();
    })));
  }
  for route in GpiRoute::ALL.iter() {
    if dw0.get_field(route.field()) != 0 {
      fields.push(format!("PAD_IRQ_ROUTE({})", route.name()));
    }
  }
  if dw0.get_field(&RX_INVERT) != 0 {
    fields.push("PAD_RX_POL(INVERT)".to_string());
  }
  if dw0.get_field(&RX_TX_BUF_DISABLE) != 0 {
    fields.push(format!("PAD_BUF({})", ctx.capture(|c| {
      c.bufdis();
    })));
  }
  if dw0.get_field(&RX_PAD_STATE_SELECT) != 0 {
    fields.push("(1 << 29)".to_string());
  }
  if dw0.get_field(&RX_RAW_OVERRIDE_TO_1) != 0 {
    fields.push("(1 << 28)".to_string());
  }
  if dw0.get_field(&RX_STATE) != 0 {
    fields.push("(1 << 1)".to_string());
  }
  if dw0.get_field(&TX_STATE) != 0 {
    fields.push("1".to_string());
  }

  join(fields)
}

fn dw1_bitfields(ctx: &mut MacroContext<'_>) -> String {
  let mut fields = Vec::new();
  let dw1 = ctx.dw1().clone();

  if dw1.get_field(&PAD_TOL) != 0 {
    fields.push("PAD_TOL(1V8)".to_string());
  }
  if dw1.get_field(&TERMINATION) != 0 {
    fields.push(format!("PAD_PULL({})", ctx.capture(|c| {
      c.pull();
    })));
  }
  if dw1.get_field(&IO_STANDBY_STATE) != 0 {
    fields.push(format!("PAD_IOSSTATE({})", ctx.capture(|c| {
      c.ios_state();
    })));
  }
  if dw1.get_field(&IO_STANDBY_TERMINATION) != 0 {
    fields.push(format!("PAD_IOSTERM({})", ctx.capture(|c| {
      c.io_term();
    })));
  }
  if ctx.is_ownership_driver() {
    fields.push("PAD_CFG_OWN_GPIO(DRIVER)".to_string());
  }

  join(fields)
}
