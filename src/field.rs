/// Describes a bit field on a pad configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
  /// Name of the field as it appears in the chipset datasheets.
  pub name: &'static str,

  /// The position of the least-significant bit of this field within its register. The field
  /// must end within the register.
  pub offset: u32,

  /// The bit width of the field. Always between 1 and 32.
  pub width: u32,
}
impl FieldSpec {
  /// `width` must be between 1 and 32 and the field must end within the register
  /// (`offset + width <= 32`).
  pub const fn new(name: &'static str, offset: u32, width: u32) -> Self {
    debug_assert!(
      width >= 1 && width <= 32 && offset <= 32 - width,
      "field does not fit in a 32-bit register"
    );
    Self {
      name,
      offset,
      width,
    }
  }

  /// The largest value the field can hold, right-aligned.
  pub const fn max_value(&self) -> u32 {
    u32::MAX >> (32 - self.width)
  }

  /// The bit mask for reading/writing this field on the parent register
  pub const fn mask(&self) -> u32 {
    self.max_value() << self.offset
  }

  /// Extracts this field from a raw register value.
  pub const fn extract(&self, value: u32) -> u32 {
    (value >> self.offset) & self.max_value()
  }

  /// Places `field_value` into the field's bit span, truncating it to the field's width.
  pub const fn place(&self, field_value: u32) -> u32 {
    (field_value & self.max_value()) << self.offset
  }
}

/// Every bit of a register.
pub const ALL_FIELDS: u32 = 0xffff_ffff;

// PAD_CFG_DW0
pub const PAD_RST_CFG: FieldSpec = FieldSpec::new("PADRSTCFG", 30, 2);
pub const RX_PAD_STATE_SELECT: FieldSpec = FieldSpec::new("RXPADSTSEL", 29, 1);
pub const RX_RAW_OVERRIDE_TO_1: FieldSpec = FieldSpec::new("RXRAW1", 28, 1);
pub const RX_LEVEL_EDGE_CONFIG: FieldSpec = FieldSpec::new("RXEVCFG", 25, 2);
pub const RX_INVERT: FieldSpec = FieldSpec::new("RXINV", 23, 1);
pub const RX_TX_ENABLE_CONFIG: FieldSpec = FieldSpec::new("RXTXENCFG", 21, 2);
pub const INPUT_ROUTE_IOXAPIC: FieldSpec = FieldSpec::new("GPIROUTIOXAPIC", 20, 1);
pub const INPUT_ROUTE_SCI: FieldSpec = FieldSpec::new("GPIROUTSCI", 19, 1);
pub const INPUT_ROUTE_SMI: FieldSpec = FieldSpec::new("GPIROUTSMI", 18, 1);
pub const INPUT_ROUTE_NMI: FieldSpec = FieldSpec::new("GPIROUTNMI", 17, 1);
pub const PAD_MODE: FieldSpec = FieldSpec::new("PMODE", 10, 3);
pub const RX_TX_BUF_DISABLE: FieldSpec = FieldSpec::new("GPIORXTXDIS", 8, 2);
pub const RX_STATE: FieldSpec = FieldSpec::new("GPIORXSTATE", 1, 1);
pub const TX_STATE: FieldSpec = FieldSpec::new("GPIOTXSTATE", 0, 1);

// PAD_CFG_DW1
pub const PAD_TOL: FieldSpec = FieldSpec::new("PADTOL", 25, 1);
pub const IO_STANDBY_STATE: FieldSpec = FieldSpec::new("IOSSTATE", 14, 4);
pub const TERMINATION: FieldSpec = FieldSpec::new("TERM", 10, 4);
pub const IO_STANDBY_TERMINATION: FieldSpec = FieldSpec::new("IOSTERM", 8, 2);
pub const INTERRUPT_SELECT: FieldSpec = FieldSpec::new("INTSEL", 0, 8);

/// All named fields of PAD_CFG_DW0, most significant first.
pub static DW0_FIELDS: &[FieldSpec] = &[
  PAD_RST_CFG,
  RX_PAD_STATE_SELECT,
  RX_RAW_OVERRIDE_TO_1,
  RX_LEVEL_EDGE_CONFIG,
  RX_INVERT,
  RX_TX_ENABLE_CONFIG,
  INPUT_ROUTE_IOXAPIC,
  INPUT_ROUTE_SCI,
  INPUT_ROUTE_SMI,
  INPUT_ROUTE_NMI,
  PAD_MODE,
  RX_TX_BUF_DISABLE,
  RX_STATE,
  TX_STATE,
];

/// All named fields of PAD_CFG_DW1, most significant first.
pub static DW1_FIELDS: &[FieldSpec] = &[
  PAD_TOL,
  IO_STANDBY_STATE,
  TERMINATION,
  IO_STANDBY_TERMINATION,
  INTERRUPT_SELECT,
];

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_disjoint(fields: &[FieldSpec]) {
    let mut seen = 0u32;
    for f in fields.iter() {
      assert_eq!(0, seen & f.mask(), "{} overlaps a previous field", f.name);
      seen |= f.mask();
    }
  }

  #[test]
  fn dw0_fields_do_not_overlap() {
    assert_disjoint(DW0_FIELDS);
  }

  #[test]
  fn dw1_fields_do_not_overlap() {
    assert_disjoint(DW1_FIELDS);
  }

  #[test]
  fn computes_masks() {
    assert_eq!(0xc000_0000, PAD_RST_CFG.mask());
    assert_eq!(0x0000_1c00, PAD_MODE.mask());
    assert_eq!(0x0000_3c00, TERMINATION.mask());
    assert_eq!(0x0000_0001, TX_STATE.mask());
    assert_eq!(0xffff_ffff, FieldSpec::new("ALL", 0, 32).mask());
  }

  #[test]
  fn extracts_field_from_value() {
    assert_eq!(1, PAD_RST_CFG.extract(0x4400_0600));
    assert_eq!(1, PAD_MODE.extract(0x4400_0600));
    assert_eq!(2, RX_TX_BUF_DISABLE.extract(0x4400_0600));
    assert_eq!(2, RX_LEVEL_EDGE_CONFIG.extract(0x4400_0600));
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "field does not fit in a 32-bit register")]
  fn rejects_zero_width() {
    let _ = FieldSpec::new("EMPTY", 0, 0);
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "field does not fit in a 32-bit register")]
  fn rejects_field_past_register_end() {
    let _ = FieldSpec::new("WIDE", 31, 2);
  }

  #[test]
  fn place_truncates_to_width() {
    assert_eq!(0x0000_0c00, PAD_MODE.place(0b1011));
    assert_eq!(0x4000_0000, PAD_RST_CFG.place(0x5));
  }
}
