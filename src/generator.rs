use log::debug;

use crate::{
  bitfields::{advanced, FieldFormat},
  context::MacroContext,
  error::Result,
  field::{
    ALL_FIELDS, IO_STANDBY_STATE, IO_STANDBY_TERMINATION, PAD_MODE, RX_STATE, RX_TX_BUF_DISABLE,
  },
  pad::{PadNameParser, PadRecord, SourceMode},
  platform::{Platform, PlatformLayer},
  register::RegisterKind,
  value::BufferSpec,
};

/// Knobs of macro generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
  /// Origin of the register values.
  pub source: SourceMode,

  /// Format of the `_PAD_CFG_STRUCT` form.
  pub field_format: FieldFormat,

  /// Always emit the `_PAD_CFG_STRUCT` form.
  pub advanced: bool,

  /// Keep the short macro even when it does not account for every register bit.
  pub skip_check: bool,

  /// Drop bits that the short macro does not account for, and hand routed GPIs to ACPI.
  pub ignore_fields: bool,
}

/// Generates the macro for one pad.
///
/// `platform` must be a freshly built chain (see [`Platform::chain`]); `pad_group` is the group
/// part of the pad name, used by layers that treat some groups specially.
pub(crate) fn generate(
  platform: &dyn PlatformLayer,
  options: GeneratorOptions,
  record: &PadRecord,
  pad_group: Option<&str>,
) -> String {
  let mut ctx = MacroContext::new(platform, options);
  ctx.clear();
  for kind in [RegisterKind::Dw0, RegisterKind::Dw1].iter() {
    ctx
      .register_mut(*kind)
      .clear_masked_fields(ALL_FIELDS)
      .forget_decoded(ALL_FIELDS);
  }
  ctx
    .set_pad_id(&record.id, pad_group)
    .set_ownership(record.ownership);

  let masks = platform.read_only_masks();
  ctx
    .dw0_mut()
    .set_value(record.dw0)
    .read_only_fields_set(masks.dw0);
  ctx
    .dw1_mut()
    .set_value(record.dw1)
    .read_only_fields_set(masks.dw1);

  ctx.generate()
}

impl<'p> MacroContext<'p> {
  /// Runs the platform behaviors over the loaded registers and renders the result.
  pub(crate) fn generate(&mut self) -> String {
    let platform = self.platform();

    platform.reset_remap(self);
    self.set_name("PAD_CFG");
    if self.dw0_mut().decode(&PAD_MODE) == 0 {
      match BufferSpec::new(self.dw0_mut().decode(&RX_TX_BUF_DISABLE)) {
        BufferSpec::TxDisable => platform.gpi_macro_add(self),
        BufferSpec::RxDisable => platform.gpo_macro_add(self),
        BufferSpec::TxRxDisable => platform.no_conn_macro_add(self),
        BufferSpec::NoDisable => self.bidirection(),
      }
    } else {
      platform.native_function_macro_add(self);
    }

    let options = self.options();
    let complete = self.dw0().mask_check() && self.dw1().mask_check();
    if options.advanced || self.buffer().is_empty() || (!options.skip_check && !complete) {
      debug!(
        "{}: {} does not cover DW0 {:#010x} DW1 {:#010x}",
        self.pad_id(),
        self.buffer().name(),
        self.dw0().ignored_fields(),
        self.dw1().ignored_fields()
      );
      advanced(self);
    }

    self.buffer().render()
  }

  /// GPIO with both buffers enabled.
  fn bidirection(&mut self) {
    let ios = self.dw1().get_field(&IO_STANDBY_STATE) != 0
      || self.dw1().get_field(&IO_STANDBY_TERMINATION) != 0;

    self.dw0_mut().decode(&RX_STATE);
    self.set_name("PAD_CFG_GPIO_BIDIRECT");
    if ios {
      // PAD_CFG_GPIO_BIDIRECT_IOS(pad, val, pull, rst, trig, iosstate, iosterm, own)
      self.append_name("_IOS");
      self.id().val().pull().rstsrc().trig().ios_state().io_term().own();
    } else {
      // PAD_CFG_GPIO_BIDIRECT(pad, val, pull, rst, trig, own)
      self.id().val().pull().rstsrc().trig().own();
    }
  }
}

/// Turns pad records into macros for one platform.
#[derive(Debug, Clone)]
pub struct Translator {
  platform: Platform,
  options: GeneratorOptions,
  names: PadNameParser,
}
impl Translator {
  pub fn new(platform: Platform, options: GeneratorOptions) -> Result<Self> {
    Ok(Self {
      platform,
      options,
      names: PadNameParser::new()?,
    })
  }

  pub fn platform(&self) -> Platform {
    self.platform
  }

  pub fn options(&self) -> GeneratorOptions {
    self.options
  }

  /// Group keyword of a configuration line, if the line belongs to one of the platform's groups.
  pub fn group_name_extract(&self, line: &str) -> Option<&'static str> {
    self.platform.group_name_extract(line)
  }

  /// Whether a configuration line belongs to the platform's GPIO namespace.
  pub fn keyword_check(&self, line: &str) -> bool {
    self.platform.keyword_check(line)
  }

  /// Macro for one pad. Each call builds its own chain and context.
  pub fn translate(&self, record: &PadRecord) -> String {
    let chain = self.platform.chain();
    generate(
      chain.as_ref(),
      self.options,
      record,
      self.names.group(&record.id),
    )
  }

  /// Macros for a sequence of pads, in input order.
  pub fn translate_all<'a, I>(&self, records: I) -> Vec<String>
  where
    I: IntoIterator<Item = &'a PadRecord>,
  {
    records.into_iter().map(|r| self.translate(r)).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::{generate, GeneratorOptions, Translator};
  use crate::{
    bitfields::FieldFormat,
    pad::{PadRecord, SourceMode, PAD_OWN_ACPI, PAD_OWN_DRIVER},
    platform::{cannonlake::CannonLake, sunrise::Sunrise, Platform},
  };

  fn translate(platform: Platform, record: &PadRecord) -> String {
    Translator::new(platform, GeneratorOptions::default())
      .unwrap()
      .translate(record)
  }

  #[test]
  fn generates_native_function() {
    let record = PadRecord::new("GPP_A10", 0x4400_0600, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_NF(GPP_A10, NONE, DEEP, NF1)",
      generate(&Sunrise::new(), GeneratorOptions::default(), &record, Some("GPP_A"))
    );
  }

  #[test]
  fn generates_bidirectional_gpio() {
    let record = PadRecord::new("GPP_C2", 0x4400_0000, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_GPIO_BIDIRECT(GPP_C2, 0, NONE, DEEP, OFF, ACPI)",
      translate(Platform::Sunrise, &record)
    );

    let record = PadRecord::new("GPP_C2", 0x4400_0001, 0x0002_4100, PAD_OWN_DRIVER);
    assert_eq!(
      "PAD_CFG_GPIO_BIDIRECT_IOS(GPP_C2, 1, NONE, DEEP, OFF, TxDRxE, DISPUPD, DRIVER)",
      translate(Platform::Sunrise, &record)
    );
  }

  #[test]
  fn falls_back_to_advanced_form() {
    let record = PadRecord::new("GPP_B23", 0x4480_0201, 0, PAD_OWN_ACPI);
    assert_eq!(
      "_PAD_CFG_STRUCT(GPP_B23, PAD_RESET(DEEP) | PAD_TRIG(OFF) | PAD_RX_POL(INVERT) | \
       PAD_BUF(RX_DISABLE) | 1, 0)",
      translate(Platform::Sunrise, &record)
    );
  }

  #[test]
  fn skip_check_keeps_short_macro() {
    let options = GeneratorOptions {
      skip_check: true,
      ..GeneratorOptions::default()
    };
    let record = PadRecord::new("GPP_B23", 0x4480_0201, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_GPO(GPP_B23, 1, DEEP)",
      Translator::new(Platform::Sunrise, options)
        .unwrap()
        .translate(&record)
    );
  }

  #[test]
  fn ignore_fields_drops_uncovered_bits() {
    let options = GeneratorOptions {
      ignore_fields: true,
      ..GeneratorOptions::default()
    };
    let record = PadRecord::new("GPP_B23", 0x4480_0201, 0, PAD_OWN_ACPI);
    assert_eq!(
      "_PAD_CFG_STRUCT(GPP_B23, PAD_RESET(DEEP) | PAD_TRIG(OFF) | PAD_BUF(RX_DISABLE) | 1, 0)",
      Translator::new(Platform::Sunrise, options)
        .unwrap()
        .translate(&record)
    );
  }

  #[test]
  fn forced_advanced_form_in_raw_words() {
    let options = GeneratorOptions {
      advanced: true,
      field_format: FieldFormat::Raw,
      ..GeneratorOptions::default()
    };
    let record = PadRecord::new("GPP_A10", 0x4400_0600, 0, PAD_OWN_ACPI);
    assert_eq!(
      "_PAD_CFG_STRUCT(GPP_A10, 0x44000600, 0x00000000)",
      Translator::new(Platform::MeteorLake, options)
        .unwrap()
        .translate(&record)
    );
  }

  #[test]
  fn three_routes_use_advanced_form() {
    let record = PadRecord::new("GPP_D1", 0x401c_0100, 0, PAD_OWN_ACPI);
    assert_eq!(
      "_PAD_CFG_STRUCT(GPP_D1, PAD_RESET(DEEP) | PAD_IRQ_ROUTE(IOAPIC) | PAD_IRQ_ROUTE(SCI) | \
       PAD_IRQ_ROUTE(SMI) | PAD_BUF(TX_DISABLE), 0)",
      translate(Platform::Sunrise, &record)
    );
  }

  #[test]
  fn three_routes_keep_their_fields_when_ignoring() {
    let options = GeneratorOptions {
      ignore_fields: true,
      ..GeneratorOptions::default()
    };
    let record = PadRecord::new("GPP_D1", 0x401c_0100, 0, PAD_OWN_ACPI);
    assert_eq!(
      "_PAD_CFG_STRUCT(GPP_D1, PAD_RESET(DEEP) | PAD_IRQ_ROUTE(IOAPIC) | PAD_IRQ_ROUTE(SCI) | \
       PAD_IRQ_ROUTE(SMI) | PAD_BUF(TX_DISABLE), 0)",
      Translator::new(Platform::Sunrise, options)
        .unwrap()
        .translate(&record)
    );
  }

  #[test]
  fn input_state_does_not_force_advanced_form() {
    let low = PadRecord::new("GPP_B5", 0x4400_0100, 0, PAD_OWN_ACPI);
    let high = PadRecord::new("GPP_B5", 0x4400_0102, 0, PAD_OWN_ACPI);
    for record in [low, high].iter() {
      assert_eq!(
        "PAD_CFG_GPI_TRIG_OWN(GPP_B5, NONE, DEEP, OFF, ACPI)",
        translate(Platform::CannonLake, record)
      );
    }

    let record = PadRecord::new("GPP_C2", 0x4400_0002, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_GPIO_BIDIRECT(GPP_C2, 0, NONE, DEEP, OFF, ACPI)",
      translate(Platform::MeteorLake, &record)
    );
  }

  #[test]
  fn gpd_pads_without_group_keep_their_reset_source() {
    let record = PadRecord::new("GPD7", 0x0400_0201, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_GPO(GPD7, 1, PWROK)",
      generate(&CannonLake::new(), GeneratorOptions::default(), &record, None)
    );
  }

  #[test]
  fn remaps_reset_source_for_register_dumps_only() {
    let record = PadRecord::new("GPP_B23", 0x0400_0201, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_GPO(GPP_B23, 1, RSMRST)",
      translate(Platform::MeteorLake, &record)
    );
    assert_eq!(
      "PAD_CFG_GPO(GPP_B23, 1, PWROK)",
      translate(Platform::Sunrise, &record)
    );

    let options = GeneratorOptions {
      source: SourceMode::Header,
      ..GeneratorOptions::default()
    };
    assert_eq!(
      "PAD_CFG_GPO(GPP_B23, 1, PWROK)",
      Translator::new(Platform::MeteorLake, options)
        .unwrap()
        .translate(&record)
    );
  }

  #[test]
  fn gpd_pads_keep_their_reset_source() {
    let record = PadRecord::new("GPD7", 0x0400_0201, 0, PAD_OWN_ACPI);
    assert_eq!(
      "PAD_CFG_GPO(GPD7, 1, PWROK)",
      translate(Platform::MeteorLake, &record)
    );
  }

  #[test]
  fn records_do_not_leak_into_each_other() {
    let translator = Translator::new(Platform::CannonLake, GeneratorOptions::default()).unwrap();
    let records = vec![
      PadRecord::new("GPP_B23", 0x4480_0201, 0x0000_3000, PAD_OWN_DRIVER),
      PadRecord::new("GPP_A10", 0x4400_0600, 0, PAD_OWN_ACPI),
    ];

    let macros = translator.translate_all(records.iter());

    assert_eq!(2, macros.len());
    assert_eq!("PAD_CFG_NF(GPP_A10, NONE, DEEP, NF1)", macros[1]);
    assert_eq!(translator.translate(&records[1]), macros[1]);
  }

  #[test]
  fn classifies_lines_for_platform() {
    let translator = Translator::new(Platform::AlderLake, GeneratorOptions::default()).unwrap();
    assert_eq!(Some("GPP_T"), translator.group_name_extract("GPP_T3 0x44000702"));
    assert!(translator.keyword_check("GPD0"));
    assert!(!translator.keyword_check("XYZ_1"));
  }
}
