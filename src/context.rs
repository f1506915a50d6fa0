use crate::{
  field::{
    IO_STANDBY_STATE, IO_STANDBY_TERMINATION, PAD_MODE, PAD_RST_CFG, RX_INVERT,
    RX_LEVEL_EDGE_CONFIG, RX_TX_BUF_DISABLE, TX_STATE,
  },
  generator::GeneratorOptions,
  pad::PAD_OWN_DRIVER,
  platform::PlatformLayer,
  register::{Register, RegisterKind},
  value::{io_standby_state_name, io_standby_termination_name, BufferSpec, ResetSource, TriggerSpec},
};

/// Macro under construction: a name and its ordered argument tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroBuffer {
  name: String,
  args: Vec<String>,
}
impl MacroBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn clear(&mut self) -> &mut Self {
    self.name.clear();
    self.args.clear();
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn set_name(&mut self, name: &str) -> &mut Self {
    self.name = name.to_owned();
    self
  }

  pub fn append_name(&mut self, suffix: &str) -> &mut Self {
    self.name.push_str(suffix);
    self
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }

  pub fn push_arg<S: Into<String>>(&mut self, arg: S) -> &mut Self {
    self.args.push(arg.into());
    self
  }

  /// True if no argument has been added yet.
  pub fn is_empty(&self) -> bool {
    self.args.is_empty()
  }

  /// Renders `NAME(arg0, arg1, ..., argN)`.
  pub fn render(&self) -> String {
    format!("{}({})", self.name, self.args.join(", "))
  }
}

/// Per-record generation state handed to every platform behavior.
///
/// A context is created for exactly one pad and dropped once its macro is rendered, so nothing
/// leaks from one pad into the next.
pub struct MacroContext<'p> {
  platform: &'p dyn PlatformLayer,
  options: GeneratorOptions,
  registers: [Register; 2],
  pad_id: String,
  pad_group: Option<String>,
  ownership: u8,
  buffer: MacroBuffer,
}
impl<'p> MacroContext<'p> {
  /// `platform` must be the outermost layer of the chain; argument helpers such as `pull` dispatch
  /// through it.
  pub fn new(platform: &'p dyn PlatformLayer, options: GeneratorOptions) -> Self {
    Self {
      platform,
      options,
      registers: [Register::default(), Register::default()],
      pad_id: String::new(),
      pad_group: None,
      ownership: 0,
      buffer: MacroBuffer::new(),
    }
  }

  pub fn platform(&self) -> &'p dyn PlatformLayer {
    self.platform
  }

  pub fn options(&self) -> GeneratorOptions {
    self.options
  }

  pub fn clear(&mut self) -> &mut Self {
    self.buffer.clear();
    self
  }

  pub fn register(&self, kind: RegisterKind) -> &Register {
    match kind {
      RegisterKind::Dw0 => &self.registers[0],
      RegisterKind::Dw1 => &self.registers[1],
    }
  }

  pub fn register_mut(&mut self, kind: RegisterKind) -> &mut Register {
    match kind {
      RegisterKind::Dw0 => &mut self.registers[0],
      RegisterKind::Dw1 => &mut self.registers[1],
    }
  }

  pub fn dw0(&self) -> &Register {
    self.register(RegisterKind::Dw0)
  }

  pub fn dw0_mut(&mut self) -> &mut Register {
    self.register_mut(RegisterKind::Dw0)
  }

  pub fn dw1(&self) -> &Register {
    self.register(RegisterKind::Dw1)
  }

  pub fn dw1_mut(&mut self) -> &mut Register {
    self.register_mut(RegisterKind::Dw1)
  }

  pub fn pad_id(&self) -> &str {
    &self.pad_id
  }

  /// Group the pad belongs to, e.g. `GPD` for `GPD7`.
  pub fn pad_group(&self) -> Option<&str> {
    self.pad_group.as_deref()
  }

  pub fn set_pad_id(&mut self, pad_id: &str, pad_group: Option<&str>) -> &mut Self {
    self.pad_id = pad_id.to_owned();
    self.pad_group = pad_group.map(|g| g.to_owned());
    self
  }

  pub fn set_ownership(&mut self, ownership: u8) -> &mut Self {
    self.ownership = ownership;
    self
  }

  pub fn is_ownership_driver(&self) -> bool {
    self.ownership == PAD_OWN_DRIVER
  }

  pub fn buffer(&self) -> &MacroBuffer {
    &self.buffer
  }

  pub fn buffer_mut(&mut self) -> &mut MacroBuffer {
    &mut self.buffer
  }

  pub fn set_name(&mut self, name: &str) -> &mut Self {
    self.buffer.set_name(name);
    self
  }

  pub fn append_name(&mut self, suffix: &str) -> &mut Self {
    self.buffer.append_name(suffix);
    self
  }

  pub fn arg<S: Into<String>>(&mut self, arg: S) -> &mut Self {
    self.buffer.push_arg(arg);
    self
  }

  /// Runs `f` and returns the arguments it added, joined by `", "`, removing them from the buffer.
  pub fn capture<F: FnOnce(&mut Self)>(&mut self, f: F) -> String {
    let mark = self.buffer.args.len();
    f(self);
    let captured: Vec<String> = self.buffer.args.drain(mark..).collect();
    captured.join(", ")
  }

  /// Pad name.
  pub fn id(&mut self) -> &mut Self {
    let id = self.pad_id.clone();
    self.arg(id)
  }

  /// Pad termination, as interpreted by the platform.
  pub fn pull(&mut self) -> &mut Self {
    let platform = self.platform;
    platform.pull(self);
    self
  }

  /// PADRSTCFG reset source.
  pub fn rstsrc(&mut self) -> &mut Self {
    let code = self.dw0_mut().decode(&PAD_RST_CFG);
    let name = ResetSource::new(code).map_or("INVALID", |s| s.name());
    self.arg(name)
  }

  /// GPIO TX state.
  pub fn val(&mut self) -> &mut Self {
    let state = self.dw0_mut().decode(&TX_STATE);
    self.arg(state.to_string())
  }

  pub fn trig(&mut self) -> &mut Self {
    let trig = TriggerSpec::new(self.dw0_mut().decode(&RX_LEVEL_EDGE_CONFIG));
    self.arg(trig.name())
  }

  /// RX polarity inversion.
  pub fn invert(&mut self) -> &mut Self {
    if self.dw0_mut().decode(&RX_INVERT) != 0 {
      return self.arg("INVERT");
    }
    self.arg("NONE")
  }

  pub fn bufdis(&mut self) -> &mut Self {
    let state = BufferSpec::new(self.dw0_mut().decode(&RX_TX_BUF_DISABLE));
    self.arg(state.name())
  }

  /// Host software ownership.
  pub fn own(&mut self) -> &mut Self {
    if self.is_ownership_driver() {
      return self.arg("DRIVER");
    }
    self.arg("ACPI")
  }

  /// Native function number, or `GPIO` for pad mode 0.
  pub fn padfn(&mut self) -> &mut Self {
    match self.dw0_mut().decode(&PAD_MODE) {
      0 => self.arg("GPIO"),
      n => self.arg(format!("NF{}", n)),
    }
  }

  pub fn ios_state(&mut self) -> &mut Self {
    let state = self.dw1_mut().decode(&IO_STANDBY_STATE);
    self.arg(io_standby_state_name(state))
  }

  pub fn io_term(&mut self) -> &mut Self {
    let term = self.dw1_mut().decode(&IO_STANDBY_TERMINATION);
    self.arg(io_standby_termination_name(term))
  }
}

#[cfg(test)]
mod tests {
  use super::{MacroBuffer, MacroContext};
  use crate::{
    field::{PAD_MODE, PAD_RST_CFG},
    generator::GeneratorOptions,
    pad::PAD_OWN_DRIVER,
    platform::sunrise::Sunrise,
  };

  #[test]
  fn renders_macro_call() {
    let mut buffer = MacroBuffer::new();
    buffer.set_name("PAD_CFG").append_name("_NF");
    buffer.push_arg("GPP_A0").push_arg("NONE").push_arg("DEEP").push_arg("NF1");
    assert_eq!("PAD_CFG_NF(GPP_A0, NONE, DEEP, NF1)", buffer.render());
  }

  #[test]
  fn renders_empty_call() {
    let mut buffer = MacroBuffer::new();
    buffer.set_name("PAD_CFG_GPI");
    assert!(buffer.is_empty());
    assert_eq!("PAD_CFG_GPI()", buffer.render());
  }

  #[test]
  fn clear_drops_previous_pad() {
    let mut buffer = MacroBuffer::new();
    buffer.set_name("PAD_NC").push_arg("GPP_A0");
    buffer.clear();
    assert_eq!("", buffer.name());
    assert!(buffer.is_empty());
  }

  #[test]
  fn argument_helpers_decode_fields() {
    let platform = Sunrise::new();
    let mut ctx = MacroContext::new(&platform, GeneratorOptions::default());
    ctx.set_pad_id("GPP_C4", Some("GPP_C")).set_ownership(PAD_OWN_DRIVER);
    ctx.dw0_mut().set_value(0x8480_0801);
    ctx.dw1_mut().set_value(0x0000_3000);

    ctx.set_name("TEST");
    ctx.id().val().pull().rstsrc().trig().invert().own().padfn();

    assert_eq!(
      "TEST(GPP_C4, 1, UP_20K, PLTRST, OFF, INVERT, DRIVER, NF2)",
      ctx.buffer().render()
    );
    let decoded = ctx.dw0().decoded_fields();
    assert_eq!(PAD_RST_CFG.mask(), decoded & PAD_RST_CFG.mask());
    assert_eq!(PAD_MODE.mask(), decoded & PAD_MODE.mask());
  }

  #[test]
  fn capture_takes_arguments_out_of_buffer() {
    let platform = Sunrise::new();
    let mut ctx = MacroContext::new(&platform, GeneratorOptions::default());
    ctx.dw0_mut().set_value(0x4000_0000);
    ctx.set_name("TEST").arg("first");

    let captured = ctx.capture(|c| {
      c.rstsrc().trig();
    });

    assert_eq!("DEEP, LEVEL", captured);
    assert_eq!(&["first".to_string()], ctx.buffer().args());
  }
}
