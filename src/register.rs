use crate::field::FieldSpec;

/// Selects one of the two configuration registers of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterKind {
  Dw0,
  Dw1,
}
impl RegisterKind {
  pub fn name(&self) -> &'static str {
    match self {
      RegisterKind::Dw0 => "DW0",
      RegisterKind::Dw1 => "DW1",
    }
  }
}

/// A pad configuration register (PAD_CFG_DW0 or PAD_CFG_DW1) under reconstruction.
///
/// Besides the raw value the register keeps three masks:
///
/// * the read-only mask, bits reserved by hardware that must survive any clearing;
/// * the snapshot of the latest known original value those bits are restored from;
/// * the decoded mask, bits that the macro being generated already expresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Register {
  value: u32,
  original: u32,
  read_only: u32,
  decoded: u32,
}
impl Register {
  pub fn new(value: u32) -> Self {
    Self {
      value,
      original: value,
      read_only: 0,
      decoded: 0,
    }
  }

  /// Current raw contents.
  pub fn value(&self) -> u32 {
    self.value
  }

  /// Replaces the raw contents and records them as the latest known original value. Does not
  /// apply read-only protection by itself.
  pub fn set_value(&mut self, value: u32) -> &mut Self {
    self.value = value;
    self.original = value;
    self
  }

  pub fn get_field(&self, spec: &FieldSpec) -> u32 {
    spec.extract(self.value)
  }

  /// Writes `field_value` into the bit span of `spec`. Values wider than the field are truncated;
  /// all other bits are left untouched.
  pub fn set_field(&mut self, spec: &FieldSpec, field_value: u32) -> &mut Self {
    self.value = (self.value & !spec.mask()) | spec.place(field_value);
    self
  }

  /// Zeroes every bit in `mask`, then restores the read-only bits from the original value.
  pub fn clear_masked_fields(&mut self, mask: u32) -> &mut Self {
    self.value &= !mask;
    self.value |= self.original & self.read_only;
    self
  }

  /// Marks the bits of `mask` as read-only and snapshots the current value as their source.
  pub fn read_only_fields_set(&mut self, mask: u32) -> &mut Self {
    self.read_only = mask;
    self.original = self.value;
    self
  }

  pub fn read_only_fields(&self) -> u32 {
    self.read_only
  }

  /// Reads a field for use in a macro and records its bit span as decoded.
  pub fn decode(&mut self, spec: &FieldSpec) -> u32 {
    self.decoded |= spec.mask();
    self.get_field(spec)
  }

  /// Withdraws the decoded claim on every bit of `mask`.
  pub fn forget_decoded(&mut self, mask: u32) -> &mut Self {
    self.decoded &= !mask;
    self
  }

  pub fn decoded_fields(&self) -> u32 {
    self.decoded
  }

  /// Set bits that are neither decoded nor read-only.
  pub fn ignored_fields(&self) -> u32 {
    self.value & !(self.decoded | self.read_only)
  }

  /// Returns true if every set bit is accounted for by the generated macro or is read-only.
  pub fn mask_check(&self) -> bool {
    self.ignored_fields() == 0
  }
}
