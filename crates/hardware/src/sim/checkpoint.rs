//! Register bank checkpointing.
//!
//! This module persists and restores the register bank as one unit. It provides:
//! 1. **Field Order:** A single declared order covering every scalar and array,
//!    used for both directions so that save and restore can never disagree.
//! 2. **Framework Seams:** `CheckpointSink` / `CheckpointSource` traits called once
//!    per named field; a source must be fully consumed for a restore to succeed.
//! 3. **Container:** `Checkpoint`, an ordered, serde-serializable list of fields
//!    with JSON and file helpers.
//!
//! Compare-timer schedules are not part of the checkpoint; the owner re-arms
//! timers by rewriting the compare registers after restore if it needs them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::CheckpointError;
use crate::core::arch::misc_reg::ContextClass;
use crate::core::bank::RegisterBank;

/// Receives fields while a bank is saved.
pub trait CheckpointSink {
    /// Records one scalar field.
    fn persist_scalar(&mut self, name: &'static str, value: u64);

    /// Records one array field.
    fn persist_array(&mut self, name: &'static str, values: &[u64]);
}

/// Supplies fields while a bank is restored.
pub trait CheckpointSource {
    /// Returns the scalar field `name`.
    fn restore_scalar(&mut self, name: &'static str) -> Result<u64, CheckpointError>;

    /// Fills `values` from the array field `name`; the lengths must match.
    fn restore_array(&mut self, name: &'static str, values: &mut [u64])
    -> Result<(), CheckpointError>;

    /// Confirms that every supplied field has been consumed.
    fn finish(&mut self) -> Result<(), CheckpointError>;
}

const C0: usize = ContextClass::Zero as usize;
const CX: usize = ContextClass::NonZero as usize;

/// The declared checkpoint order, handed to `$walk` as
/// `kind name (path within MiscRegs)` entries.
macro_rules! checkpoint_fields {
    ($walk:ident!($($args:tt)*)) => {
        $walk!($($args)*;
            scalar pstate (pstate),
            scalar tba (tba),
            scalar y (y),
            scalar pil (pil),
            scalar gl (gl),
            scalar cwp (cwp),
            array tt (tt),
            scalar ccr (ccr),
            scalar asi (asi),
            scalar tl (tl),
            array tpc (tpc),
            array tnpc (tnpc),
            array tstate (tstate),
            scalar tick (tick),
            scalar cansave (cansave),
            scalar canrestore (canrestore),
            scalar otherwin (otherwin),
            scalar cleanwin (cleanwin),
            scalar wstate (wstate),
            scalar fsr (fsr),
            scalar fprs (fprs),
            scalar hpstate (hpstate),
            array htstate (htstate),
            scalar htba (htba),
            scalar hstick_cmpr (hstick_cmpr),
            scalar strand_sts_reg (strand_sts_reg),
            scalar pri_context (pri_context),
            scalar sec_context (sec_context),
            scalar part_id (part_id),
            scalar lsu_ctrl (lsu_ctrl),
            scalar itlb_c0_tsb_ps0 (itlb.contexts[C0].tsb_ps0),
            scalar itlb_c0_tsb_ps1 (itlb.contexts[C0].tsb_ps1),
            scalar itlb_c0_config (itlb.contexts[C0].config),
            scalar itlb_cx_tsb_ps0 (itlb.contexts[CX].tsb_ps0),
            scalar itlb_cx_tsb_ps1 (itlb.contexts[CX].tsb_ps1),
            scalar itlb_cx_config (itlb.contexts[CX].config),
            scalar itlb_sfsr (itlb.sfsr),
            scalar itlb_tag_access (itlb.tag_access),
            scalar dtlb_c0_tsb_ps0 (dtlb.contexts[C0].tsb_ps0),
            scalar dtlb_c0_tsb_ps1 (dtlb.contexts[C0].tsb_ps1),
            scalar dtlb_c0_config (dtlb.contexts[C0].config),
            scalar dtlb_cx_tsb_ps0 (dtlb.contexts[CX].tsb_ps0),
            scalar dtlb_cx_tsb_ps1 (dtlb.contexts[CX].tsb_ps1),
            scalar dtlb_cx_config (dtlb.contexts[CX].config),
            scalar dtlb_sfsr (dtlb.sfsr),
            scalar dtlb_sfar (dtlb_sfar),
            scalar dtlb_tag_access (dtlb.tag_access),
            array scratchpad (scratchpad),
            scalar gsr (gsr),
            scalar softint (softint),
            scalar tick_cmpr (tick_cmpr),
            scalar stick (stick),
            scalar stick_cmpr (stick_cmpr),
        )
    };
}

/// Expands to the array of field names.
macro_rules! field_name_list {
    (; $($kind:ident $name:ident ($($path:tt)+)),+ $(,)?) => {
        [$(stringify!($name)),+]
    };
}

/// Expands to one `persist_*` call per field.
macro_rules! save_fields {
    ($regs:ident, $sink:ident; $($kind:ident $name:ident ($($path:tt)+)),+ $(,)?) => {
        $( save_fields!(@$kind $sink, stringify!($name), $regs.$($path)+); )+
    };
    (@scalar $sink:ident, $name:expr, $value:expr) => {
        $sink.persist_scalar($name, $value)
    };
    (@array $sink:ident, $name:expr, $value:expr) => {
        $sink.persist_array($name, AsRef::<[u64]>::as_ref(&$value))
    };
}

/// Expands to one `restore_*` call per field, propagating the first error.
macro_rules! restore_fields {
    ($regs:ident, $source:ident; $($kind:ident $name:ident ($($path:tt)+)),+ $(,)?) => {
        $( restore_fields!(@$kind $source, stringify!($name), $regs.$($path)+); )+
    };
    (@scalar $source:ident, $name:expr, $place:expr) => {
        $place = $source.restore_scalar($name)?
    };
    (@array $source:ident, $name:expr, $place:expr) => {
        $source.restore_array($name, AsMut::<[u64]>::as_mut(&mut $place))?
    };
}

/// Every checkpoint field name, in declared order.
const FIELD_NAMES: &[&str] = &checkpoint_fields!(field_name_list!());

/// Returns every checkpoint field name in declared order.
pub const fn field_names() -> &'static [&'static str] {
    FIELD_NAMES
}

impl RegisterBank {
    /// Writes every register field to `sink` in checkpoint order.
    ///
    /// # Arguments
    ///
    /// * `sink` - Receives one call per field.
    pub fn save<S: CheckpointSink + ?Sized>(&self, sink: &mut S) {
        let regs = &self.regs;
        checkpoint_fields!(save_fields!(regs, sink));
    }

    /// Replaces every register field with the values from `source`.
    ///
    /// The bank is only modified if every field restores successfully and the
    /// source holds nothing beyond the last field.
    ///
    /// # Arguments
    ///
    /// * `source` - Supplies one value (or array) per field, in checkpoint order.
    pub fn restore<S: CheckpointSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), CheckpointError> {
        let mut regs = self.regs.clone();
        checkpoint_fields!(restore_fields!(regs, source));
        source.finish()?;
        self.regs = regs;
        Ok(())
    }

    /// Saves the bank into a new [`Checkpoint`].
    pub fn checkpoint(&self) -> Checkpoint {
        let mut cp = Checkpoint::new();
        self.save(&mut cp);
        cp
    }

    /// Restores the bank from a [`Checkpoint`].
    pub fn restore_checkpoint(&mut self, cp: &Checkpoint) -> Result<(), CheckpointError> {
        self.restore(&mut cp.reader())
    }
}

/// Value of one checkpoint field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single register.
    Scalar(u64),
    /// A register array.
    Array(Vec<u64>),
}

/// One named checkpoint field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: FieldValue,
}

/// Ordered list of checkpoint fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checkpoint {
    fields: Vec<CheckpointField>,
}

impl Checkpoint {
    /// Creates an empty checkpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &[CheckpointField] {
        &self.fields
    }

    /// Returns a source reading the fields from the start.
    pub fn reader(&self) -> CheckpointReader<'_> {
        CheckpointReader {
            fields: &self.fields,
            pos: 0,
        }
    }

    /// Encodes the checkpoint as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a checkpoint from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the checkpoint as JSON to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CheckpointError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a JSON checkpoint from `path`.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, CheckpointError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl CheckpointSink for Checkpoint {
    fn persist_scalar(&mut self, name: &'static str, value: u64) {
        self.fields.push(CheckpointField {
            name: name.to_owned(),
            value: FieldValue::Scalar(value),
        });
    }

    fn persist_array(&mut self, name: &'static str, values: &[u64]) {
        self.fields.push(CheckpointField {
            name: name.to_owned(),
            value: FieldValue::Array(values.to_vec()),
        });
    }
}

/// Sequential reader over a [`Checkpoint`].
#[derive(Debug)]
pub struct CheckpointReader<'a> {
    fields: &'a [CheckpointField],
    pos: usize,
}

impl<'a> CheckpointReader<'a> {
    /// Takes the next field, checking its name.
    fn next_field(&mut self, name: &'static str) -> Result<&'a FieldValue, CheckpointError> {
        let fields = self.fields;
        let field = fields
            .get(self.pos)
            .ok_or(CheckpointError::MissingField(name))?;
        if field.name != name {
            return Err(CheckpointError::FieldMismatch {
                expected: name,
                found: field.name.clone(),
            });
        }
        self.pos += 1;
        Ok(&field.value)
    }
}

impl CheckpointSource for CheckpointReader<'_> {
    fn restore_scalar(&mut self, name: &'static str) -> Result<u64, CheckpointError> {
        match self.next_field(name)? {
            FieldValue::Scalar(v) => Ok(*v),
            FieldValue::Array(vs) => Err(CheckpointError::LengthMismatch {
                field: name,
                expected: 1,
                found: vs.len(),
            }),
        }
    }

    fn restore_array(
        &mut self,
        name: &'static str,
        values: &mut [u64],
    ) -> Result<(), CheckpointError> {
        match self.next_field(name)? {
            FieldValue::Array(vs) if vs.len() == values.len() => {
                values.copy_from_slice(vs);
                Ok(())
            }
            FieldValue::Array(vs) => Err(CheckpointError::LengthMismatch {
                field: name,
                expected: values.len(),
                found: vs.len(),
            }),
            FieldValue::Scalar(_) => Err(CheckpointError::LengthMismatch {
                field: name,
                expected: values.len(),
                found: 1,
            }),
        }
    }

    fn finish(&mut self) -> Result<(), CheckpointError> {
        match self.fields.get(self.pos) {
            Some(extra) => Err(CheckpointError::TrailingField(extra.name.clone())),
            None => Ok(()),
        }
    }
}
