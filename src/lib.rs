//! Converts Intel GPIO pad configuration register values (PAD_CFG_DW0 and PAD_CFG_DW1) into
//! coreboot pad initializer macros such as `PAD_CFG_NF(GPP_A10, NONE, DEEP, NF1)`.

mod bitfields;
mod context;
mod error;
mod field;
mod generator;
mod keyword;
mod pad;
pub mod platform;
mod register;
mod value;

pub use bitfields::FieldFormat;
pub use context::{MacroBuffer, MacroContext};
pub use error::{PadGenError, Result};
pub use field::{FieldSpec, ALL_FIELDS, DW0_FIELDS, DW1_FIELDS};
pub use generator::{GeneratorOptions, Translator};
pub use keyword::{contains_any, keywords_check};
pub use pad::{PadNameParser, PadRecord, SourceMode, PAD_OWN_ACPI, PAD_OWN_DRIVER};
pub use platform::{Platform, PlatformLayer, ReadOnlyMasks};
pub use register::{Register, RegisterKind};
pub use value::{BufferSpec, GpiRoute, ResetSource, TriggerSpec};
