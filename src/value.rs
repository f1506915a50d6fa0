//! Symbolic names for the encoded values of pad configuration fields.

use crate::field::{
  FieldSpec, INPUT_ROUTE_IOXAPIC, INPUT_ROUTE_NMI, INPUT_ROUTE_SCI, INPUT_ROUTE_SMI,
};

/// Platform reset signal that returns a pad to its default configuration. The discriminant is the
/// PADRSTCFG encoding shared by most chipsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetSource {
  Pwrok = 0,
  Deep = 1,
  Pltrst = 2,
  Rsmrst = 3,
}
impl ResetSource {
  pub fn new(code: u32) -> Option<Self> {
    match code {
      0 => Some(ResetSource::Pwrok),
      1 => Some(ResetSource::Deep),
      2 => Some(ResetSource::Pltrst),
      3 => Some(ResetSource::Rsmrst),
      _ => None,
    }
  }

  pub fn code(&self) -> u32 {
    *self as u32
  }

  pub fn name(&self) -> &'static str {
    match self {
      ResetSource::Pwrok => "PWROK",
      ResetSource::Deep => "DEEP",
      ResetSource::Pltrst => "PLTRST",
      ResetSource::Rsmrst => "RSMRST",
    }
  }
}

/// RX level/edge configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSpec {
  Level = 0,
  EdgeSingle = 1,
  Off = 2,
  EdgeBoth = 3,
}
impl TriggerSpec {
  pub fn new(code: u32) -> Self {
    match code & 0x3 {
      0 => TriggerSpec::Level,
      1 => TriggerSpec::EdgeSingle,
      2 => TriggerSpec::Off,
      _ => TriggerSpec::EdgeBoth,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      TriggerSpec::Level => "LEVEL",
      TriggerSpec::EdgeSingle => "EDGE_SINGLE",
      TriggerSpec::Off => "OFF",
      TriggerSpec::EdgeBoth => "EDGE_BOTH",
    }
  }
}

/// GPIO RX/TX buffer disable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSpec {
  NoDisable = 0,
  TxDisable = 1,
  RxDisable = 2,
  TxRxDisable = 3,
}
impl BufferSpec {
  pub fn new(code: u32) -> Self {
    match code & 0x3 {
      0 => BufferSpec::NoDisable,
      1 => BufferSpec::TxDisable,
      2 => BufferSpec::RxDisable,
      _ => BufferSpec::TxRxDisable,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      BufferSpec::NoDisable => "NO_DISABLE",
      BufferSpec::TxDisable => "TX_DISABLE",
      BufferSpec::RxDisable => "RX_DISABLE",
      BufferSpec::TxRxDisable => "TX_RX_DISABLE",
    }
  }
}

/// Interrupt routes a GPI pad can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpiRoute {
  IoApic,
  Sci,
  Smi,
  Nmi,
}
impl GpiRoute {
  /// Routes in the order they are listed in generated macros.
  pub const ALL: [GpiRoute; 4] = [GpiRoute::IoApic, GpiRoute::Sci, GpiRoute::Smi, GpiRoute::Nmi];

  pub fn field(&self) -> &'static FieldSpec {
    match self {
      GpiRoute::IoApic => &INPUT_ROUTE_IOXAPIC,
      GpiRoute::Sci => &INPUT_ROUTE_SCI,
      GpiRoute::Smi => &INPUT_ROUTE_SMI,
      GpiRoute::Nmi => &INPUT_ROUTE_NMI,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      GpiRoute::IoApic => "IOAPIC",
      GpiRoute::Sci => "SCI",
      GpiRoute::Smi => "SMI",
      GpiRoute::Nmi => "NMI",
    }
  }

  /// Suffix of the single-route `PAD_CFG_GPI` macro.
  pub fn macro_suffix(&self) -> &'static str {
    match self {
      GpiRoute::IoApic => "_APIC",
      GpiRoute::Sci => "_SCI",
      GpiRoute::Smi => "_SMI",
      GpiRoute::Nmi => "_NMI",
    }
  }
}

pub const IOSSTATE_TX_DRIVE_RX_ENABLE: u32 = 0x9;

/// Name of an I/O standby state. Reserved encodings are reported as `IGNORE`.
pub fn io_standby_state_name(code: u32) -> &'static str {
  match code {
    0x0 => "TxLASTRxE",
    0x1 => "Tx0RxDCRx0",
    0x2 => "Tx0RxDCRx1",
    0x3 => "Tx1RxDCRx0",
    0x4 => "Tx1RxDCRx1",
    0x5 => "Tx0RxE",
    0x6 => "Tx1RxE",
    0x7 => "HIZCRx0",
    0x8 => "HIZCRx1",
    IOSSTATE_TX_DRIVE_RX_ENABLE => "TxDRxE",
    _ => "IGNORE",
  }
}

/// Name of an I/O standby termination.
pub fn io_standby_termination_name(code: u32) -> &'static str {
  match code & 0x3 {
    0x0 => "SAME",
    0x1 => "DISPUPD",
    0x2 => "ENPD",
    _ => "ENPU",
  }
}
