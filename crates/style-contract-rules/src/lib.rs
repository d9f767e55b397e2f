//! # style-contract-rules
//!
//! Built-in stylesheet contract rules.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SC001 | `layout-related-properties` | Keeps layout placement in nested rules and cosmetics in root rules |
//! | SC002 | `parent-child-policy` | Requires root rules to set up the context their nested declarations rely on |
//!
//! ## Usage
//!
//! ```ignore
//! use style_contract_core::{CheckContext, InteractionRegistry, StyleRule};
//! use style_contract_rules::{LayoutRelatedProperties, ParentChildPolicy};
//!
//! let registry = InteractionRegistry::new();
//! let ctx = CheckContext::new(&stylesheet, &registry);
//! let violations = LayoutRelatedProperties::new().check(&ctx)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layout_related_properties;
mod parent_child_policy;
mod presets;

pub use layout_related_properties::LayoutRelatedProperties;
pub use parent_child_policy::{ParentChildPolicy, RELATIVE_TO_PARENT_CLASS};
pub use presets::{all_rules, default_rules};

/// Re-export core types for convenience.
pub use style_contract_core::{Severity, StyleRule, Violation};
