//! Structured representation of one stack frame.

use super::function_name::decompose;
use super::location::Location;
use crate::utils::config::{FRAME_INDENT, FRAME_MARKER, NATIVE_LOCATION};
use crate::utils::error::CallSiteError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location text rendered for frames without a file name
const UNKNOWN_LOCATION: &str = "<anonymous>";

/// Options bag for building a `CallSite`
///
/// Every field is optional. Keys follow the host runtime's camelCase
/// spelling when deserialized; unrecognized keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallSiteOptions {
    pub file_name: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
    pub function_name: Option<String>,
    pub type_name: Option<String>,
    pub method_name: Option<String>,
    pub native: bool,
    pub eval: bool,
    pub constructor: bool,
    pub top_level: bool,
}

/// One parsed or captured stack frame
///
/// Immutable once built. Every accessor is a plain read and unknown
/// fields come back as `None` or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSite {
    file_name: Option<String>,
    line_number: Option<u32>,
    column_number: Option<u32>,
    function_name: Option<String>,
    type_name: Option<String>,
    method_name: Option<String>,
    is_native: bool,
    is_eval: bool,
    is_constructor: bool,
    is_top_level: bool,
}

impl CallSite {
    /// Build a call site, normalizing the options so the record invariants hold
    ///
    /// * zero line or column numbers become unknown
    /// * a column without a line is dropped
    /// * native frames carry no location
    /// * type and method names require a function name
    pub fn new(options: CallSiteOptions) -> Self {
        let CallSiteOptions {
            mut file_name,
            mut line_number,
            mut column_number,
            function_name,
            mut type_name,
            mut method_name,
            native,
            eval,
            constructor,
            top_level,
        } = options;

        line_number = line_number.filter(|n| *n > 0);
        column_number = column_number.filter(|n| *n > 0);
        if line_number.is_none() && column_number.take().is_some() {
            debug!("Dropping column number without a line number");
        }

        if native && (file_name.is_some() || line_number.is_some()) {
            debug!("Clearing location of native frame {:?}", function_name);
            file_name = None;
            line_number = None;
            column_number = None;
        }

        if function_name.is_none() {
            type_name = None;
            method_name = None;
        }

        Self {
            file_name,
            line_number,
            column_number,
            function_name,
            type_name,
            method_name,
            is_native: native,
            is_eval: eval,
            is_constructor: constructor,
            is_top_level: top_level,
        }
    }

    /// Build a call site from a function name and a parsed location
    ///
    /// **Internal** - shared by the line parser and the live capture adapter
    /// so both paths decompose names identically
    pub(crate) fn from_parts(function_name: Option<&str>, location: Location, native: bool) -> Self {
        let (type_name, method_name) = function_name.map(decompose).unwrap_or((None, None));

        Self::new(CallSiteOptions {
            file_name: location.file_name,
            line_number: location.line_number,
            column_number: location.column_number,
            function_name: function_name.map(str::to_string),
            type_name,
            method_name,
            native,
            eval: location.is_eval,
            ..Default::default()
        })
    }

    /// Build a call site from an untyped JSON options bag
    ///
    /// # Errors
    /// * `CallSiteError::NotAnObject` - The value is not a JSON object
    /// * `CallSiteError::InvalidOptions` - A recognized key has the wrong type
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CallSiteError> {
        if !value.is_object() {
            return Err(CallSiteError::NotAnObject(value.to_string()));
        }
        let options: CallSiteOptions = serde_json::from_value(value.clone())?;
        Ok(Self::new(options))
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    pub fn column_number(&self) -> Option<u32> {
        self.column_number
    }

    /// Full function text, including any `[as alias]` annotation
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    pub fn is_native(&self) -> bool {
        self.is_native
    }

    /// Not derived from the line shapes recognized today; only `eval at`
    /// locations set it.
    pub fn is_eval(&self) -> bool {
        self.is_eval
    }

    /// Reserved. Only set when supplied through `CallSiteOptions`.
    pub fn is_constructor(&self) -> bool {
        self.is_constructor
    }

    /// Reserved. Only set when supplied through `CallSiteOptions`.
    pub fn is_top_level(&self) -> bool {
        self.is_top_level
    }

    /// Render as an indented `at ...` frame line
    pub fn to_frame_line(&self) -> String {
        format!("{}{}{}", FRAME_INDENT, FRAME_MARKER, self)
    }

    fn fmt_location(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name.as_deref().unwrap_or(UNKNOWN_LOCATION))?;
        if let Some(line) = self.line_number {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column_number {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}

impl From<CallSiteOptions> for CallSite {
    fn from(options: CallSiteOptions) -> Self {
        Self::new(options)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.function_name, self.is_native) {
            (Some(name), true) => write!(f, "{} ({})", name, NATIVE_LOCATION),
            (None, true) => f.write_str(NATIVE_LOCATION),
            (Some(name), false) => {
                write!(f, "{} (", name)?;
                self.fmt_location(f)?;
                f.write_str(")")
            }
            (None, false) => self.fmt_location(f),
        }
    }
}
