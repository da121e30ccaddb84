//! Per-extension transformer pipelines.
//!
//! # Registry
//!
//! ```text
//! css   remove-aui-css-prefix -> rename-css-classes
//! js    remove-aui-css-prefix -> handle-deprecated-modules -> rename-css-classes
//!       -> replace-selector-button -> change-handler-to-on-click -> replace-aui-dialog
//! jsp   remove-aui-css-prefix -> handle-deprecated-modules -> rename-css-classes
//!       -> replace-selector-button -> replace-input-css-class
//!       -> change-handler-to-on-click -> replace-aui-dialog -> add-namespace-input
//! jspf  same pipeline object as jsp
//! ```
//!
//! The table is static and never mutated. Step order matters: later rules
//! match on what earlier rules produce (for example button classes are only
//! recognised once the `aui-` prefix is gone).

mod process;

use std::fmt;

use crate::core::FileType;
use crate::transform::{
    AddNamespaceInput, ChangeHandlerToOnClick, HandleDeprecatedModules, RemoveAuiCssPrefix,
    RenameCssClasses, ReplaceAuiDialog, ReplaceInputCssClass, ReplaceSelectorButton, Transform,
    TransformError,
};

pub use process::{Outcome, ProcessError, ProcessOptions, process_file};

/// An ordered, fixed list of transformers.
pub struct Pipeline {
    steps: &'static [&'static dyn Transform],
}

/// A pipeline step failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepError {
    pub step: &'static str,
    pub error: TransformError,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.error)
    }
}

impl std::error::Error for StepError {}

impl Pipeline {
    pub const fn new(steps: &'static [&'static dyn Transform]) -> Self {
        Self { steps }
    }

    /// Step names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Fold every step over `content`, each consuming the previous output.
    pub fn run(&self, content: &str, context: FileType) -> Result<String, StepError> {
        let mut current = content.to_owned();
        for step in self.steps {
            current = step.process(&current, context).map_err(|error| StepError {
                step: step.name(),
                error,
            })?;
        }
        Ok(current)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ============================================================================
// Registry
// ============================================================================

static CSS: Pipeline = Pipeline::new(&[&RemoveAuiCssPrefix, &RenameCssClasses]);

static JS: Pipeline = Pipeline::new(&[
    &RemoveAuiCssPrefix,
    &HandleDeprecatedModules,
    &RenameCssClasses,
    &ReplaceSelectorButton,
    &ChangeHandlerToOnClick,
    &ReplaceAuiDialog,
]);

static JSP: Pipeline = Pipeline::new(&[
    &RemoveAuiCssPrefix,
    &HandleDeprecatedModules,
    &RenameCssClasses,
    &ReplaceSelectorButton,
    &ReplaceInputCssClass,
    &ChangeHandlerToOnClick,
    &ReplaceAuiDialog,
    &AddNamespaceInput,
]);

/// Extension to pipeline. `jspf` fragments reuse the `jsp` pipeline.
static REGISTRY: &[(&str, &Pipeline)] = &[
    ("css", &CSS),
    ("js", &JS),
    ("jsp", &JSP),
    ("jspf", &JSP),
];

/// Pipeline registered for an extension (case-insensitive, no leading dot).
pub fn pipeline_for(extension: &str) -> Option<&'static Pipeline> {
    REGISTRY
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|&(_, pipeline)| pipeline)
}
