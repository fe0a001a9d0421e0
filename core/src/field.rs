//! Field declarations
//!
//! A [`FieldSpec`] describes one input of a form: its id, label, the kind of
//! editor used to render it and the rule that validates it. Specs are
//! collected into [`Fields`], which checks the declaration once and is
//! immutable afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::rules::Validation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field id must not be empty")]
    EmptyId,

    #[error("Duplicate field id: {0}")]
    DuplicateId(String),

    #[error("Unknown editor '{editor}' for field {field}")]
    UnknownEditor { field: String, editor: String },

    #[error("Dropdown field {0} has no options")]
    MissingOptions(String),
}

// ============================================================================
// Editor
// ============================================================================

/// Input control used to render a field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Editor {
    /// Single-line text input
    #[default]
    TextBox,
    /// Multi-line text area
    MultilineTextBox,
    /// Choice control populated from the field's options
    Dropdown,
}

impl Editor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Editor::TextBox => "textbox",
            Editor::MultilineTextBox => "multilinetextbox",
            Editor::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse; the error carries the rejected name
impl FromStr for Editor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Editor::TextBox, Editor::MultilineTextBox, Editor::Dropdown]
            .into_iter()
            .find(|editor| editor.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

impl TryFrom<String> for Editor {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
            .map_err(|name| format!("unknown editor '{}'", name))
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// Static declaration of one form field
#[derive(Clone, Debug)]
pub struct FieldSpec {
    id: String,
    label: Option<String>,
    editor: Editor,
    options: Vec<String>,
    value: Option<Value>,
    validation: Option<Validation>,
}

impl FieldSpec {
    /// New text box field with no label and no validation
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            editor: Editor::default(),
            options: Vec::new(),
            value: None,
            validation: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn editor(mut self, editor: Editor) -> Self {
        self.editor = editor;
        self
    }

    /// Sets the editor from its name, e.g. `"Dropdown"`
    pub fn editor_named(self, name: &str) -> Result<Self, FieldError> {
        let editor = name.parse::<Editor>().map_err(|editor| FieldError::UnknownEditor {
            field: self.id.clone(),
            editor,
        })?;
        Ok(self.editor(editor))
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Initial value; seeded into the form's values when it is created
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn editor_kind(&self) -> Editor {
        self.editor
    }

    pub fn option_list(&self) -> &[String] {
        &self.options
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn rule(&self) -> Option<&Validation> {
        self.validation.as_ref()
    }

    fn check(&self) -> Result<(), FieldError> {
        if self.id.is_empty() {
            return Err(FieldError::EmptyId);
        }
        if self.editor == Editor::Dropdown && self.options.is_empty() {
            return Err(FieldError::MissingOptions(self.id.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// Fields
// ============================================================================

/// The declared field set of a form, in declaration order
#[derive(Clone, Debug, Default)]
pub struct Fields {
    specs: Vec<FieldSpec>,
}

impl Fields {
    pub fn new(specs: impl IntoIterator<Item = FieldSpec>) -> Result<Self, FieldError> {
        let specs: Vec<FieldSpec> = specs.into_iter().collect();
        let mut seen = HashSet::new();

        for spec in &specs {
            spec.check()?;
            if !seen.insert(spec.id.as_str()) {
                return Err(FieldError::DuplicateId(spec.id.clone()));
            }
        }

        Ok(Self { specs })
    }

    pub fn get(&self, id: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
