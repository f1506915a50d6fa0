use regex::Regex;

use crate::error::Result;

pub const PAD_OWN_ACPI: u8 = 0;
pub const PAD_OWN_DRIVER: u8 = 1;

/// One pad's worth of input, as produced by the dump tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadRecord {
  /// Pad name, e.g. `GPP_A10`.
  pub id: String,

  /// Raw PAD_CFG_DW0 value.
  pub dw0: u32,

  /// Raw PAD_CFG_DW1 value.
  pub dw1: u32,

  /// Host software pad ownership, `PAD_OWN_DRIVER` or `PAD_OWN_ACPI`.
  pub ownership: u8,
}
impl PadRecord {
  pub fn new(id: &str, dw0: u32, dw1: u32, ownership: u8) -> Self {
    Self {
      id: id.to_owned(),
      dw0,
      dw1,
      ownership,
    }
  }
}

/// Where the register values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
  /// Live register dump (`inteltool -G`). Reset sources use the hardware encoding of the
  /// community and may need remapping.
  Inteltool,

  /// Values taken from an existing firmware header. Reset sources are already symbolic.
  Header,
}
impl Default for SourceMode {
  fn default() -> Self {
    SourceMode::Inteltool
  }
}

/// Splits pad names into their group and index.
#[derive(Debug, Clone)]
pub struct PadNameParser {
  pattern: Regex,
}
impl PadNameParser {
  pub fn new() -> Result<Self> {
    Ok(Self {
      pattern: Regex::new(r"^(?P<group>[A-Z][A-Z0-9_]*?[A-Z])_?(?P<index>[0-9]+)$")?,
    })
  }

  /// Group part of a pad name (`GPP_A10` → `GPP_A`, `GPD7` → `GPD`), if the name has the usual
  /// `<group><index>` shape.
  pub fn group<'a>(&self, pad_id: &'a str) -> Option<&'a str> {
    self
      .pattern
      .captures(pad_id)
      .and_then(|c| c.name("group"))
      .map(|m| m.as_str())
  }

  /// Numeric index of the pad within its group.
  pub fn index(&self, pad_id: &str) -> Option<u32> {
    self
      .pattern
      .captures(pad_id)
      .and_then(|c| c.name("index"))
      .and_then(|m| m.as_str().parse().ok())
  }
}

#[cfg(test)]
mod tests {
  use super::{PadNameParser, PadRecord, SourceMode, PAD_OWN_DRIVER};

  #[test]
  fn splits_common_pad_names() {
    let parser = PadNameParser::new().unwrap();

    assert_eq!(Some("GPP_A"), parser.group("GPP_A10"));
    assert_eq!(Some(10), parser.index("GPP_A10"));

    assert_eq!(Some("GPD"), parser.group("GPD7"));
    assert_eq!(Some(7), parser.index("GPD7"));

    assert_eq!(Some("VGPIO_USB"), parser.group("VGPIO_USB_0"));
    assert_eq!(Some(0), parser.index("VGPIO_USB_0"));

    assert_eq!(Some("VGPIO"), parser.group("VGPIO_30"));
  }

  #[test]
  fn rejects_names_without_index() {
    let parser = PadNameParser::new().unwrap();
    assert_eq!(None, parser.group("SPI0_CLK"));
    assert_eq!(None, parser.index("GPP_A"));
  }

  #[test]
  fn builds_record() {
    let record = PadRecord::new("GPP_B23", 0x4400_0a00, 0x1000, PAD_OWN_DRIVER);
    assert_eq!("GPP_B23", record.id);
    assert_eq!(0x4400_0a00, record.dw0);
    assert_eq!(PAD_OWN_DRIVER, record.ownership);
  }

  #[test]
  fn defaults_to_register_dump() {
    assert_eq!(SourceMode::Inteltool, SourceMode::default());
  }
}
