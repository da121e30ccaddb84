//! Content transformers.
//!
//! Each transformer is one focused text rewrite for AlloyUI 1.x sources:
//!
//! | Rule                          | Rewrites                                         |
//! |-------------------------------|--------------------------------------------------|
//! | `remove-aui-css-prefix`       | `aui-` class prefixes                            |
//! | `handle-deprecated-modules`   | module names removed or renamed in AlloyUI 2     |
//! | `rename-css-classes`          | helper, state and width classes                  |
//! | `replace-selector-button`     | `button-input*` classes to `btn*`                |
//! | `replace-input-css-class`     | legacy field classes on form controls            |
//! | `change-handler-to-on-click`  | `handler:` in button configs to `on: {click:}`   |
//! | `replace-aui-dialog`          | `new A.Dialog(...)` to `new A.Modal(...)`        |
//! | `add-namespace-input`         | `<portlet:namespace />` on plain form fields     |
//!
//! Transformers are zero-sized and stateless. `process` depends only on its
//! arguments, so files can be processed in any order or in parallel.

mod button;
mod class;
mod dialog;
mod handler;
mod input;
mod markup;
mod modules;
mod namespace;
mod prefix;
mod rename;
mod scan;

use std::fmt;
use thiserror::Error;

use crate::core::FileType;

pub use button::ReplaceSelectorButton;
pub use dialog::ReplaceAuiDialog;
pub use handler::ChangeHandlerToOnClick;
pub use input::ReplaceInputCssClass;
pub use modules::HandleDeprecatedModules;
pub use namespace::AddNamespaceInput;
pub use prefix::RemoveAuiCssPrefix;
pub use rename::RenameCssClasses;

/// A single rewrite rule over file text.
pub trait Transform: fmt::Debug + Send + Sync {
    /// Stable rule name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Rewrite `content` for a file of type `context`.
    ///
    /// Must be idempotent: feeding the output back in yields the same text.
    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError>;
}

/// Failure of a single rule on a single file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("unbalanced `{open}` opened on line {line}")]
    Unbalanced { open: char, line: usize },
}
