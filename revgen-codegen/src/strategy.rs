//! Output strategies and output file naming.

use std::fmt;

/// Template that is always rendered once and never formatted.
pub const PROTOBUF_TEMPLATE: &str = "protobuf.proto.tpl";

/// How many files a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One file per table, named after the table.
    #[default]
    MultiFile,
    /// One file for all tables, named after the template.
    SingleFile,
}

impl Strategy {
    pub fn from_single(single: bool) -> Self {
        if single {
            Strategy::SingleFile
        } else {
            Strategy::MultiFile
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::MultiFile => write!(f, "multi-file"),
            Strategy::SingleFile => write!(f, "single-file"),
        }
    }
}

/// What to do with one template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub strategy: Strategy,
    /// Whether output may go through the binding's formatter.
    pub format: bool,
}

impl Plan {
    /// Plan for `file_name` under the run's strategy.
    pub fn for_template(file_name: &str, strategy: Strategy) -> Self {
        if file_name == PROTOBUF_TEMPLATE {
            Self {
                strategy: Strategy::SingleFile,
                format: false,
            }
        } else {
            Self {
                strategy,
                format: true,
            }
        }
    }
}

/// Output naming derived from a template file name.
///
/// ```
/// use revgen_codegen::TemplateName;
///
/// let name = TemplateName::new("entity.go.tpl");
/// assert_eq!(name.single_output(), "entity.go");
/// assert_eq!(name.table_output("users"), "users.go");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName {
    stem: String,
}

impl TemplateName {
    pub fn new(file_name: &str) -> Self {
        let stem = match file_name.rfind('.') {
            Some(dot) if dot > 0 => &file_name[..dot],
            _ => file_name,
        };
        Self {
            stem: stem.to_string(),
        }
    }

    /// The file name without its final extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extension of the stem, including the dot, or `""`.
    pub fn extension(&self) -> &str {
        match self.stem.rfind('.') {
            Some(dot) => &self.stem[dot..],
            None => "",
        }
    }

    /// Output file name in single-file mode.
    pub fn single_output(&self) -> &str {
        &self.stem
    }

    /// Output file name for `table` in multi-file mode.
    pub fn table_output(&self, table: &str) -> String {
        format!("{}{}", table, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_name() {
        let name = TemplateName::new("model.go.tpl");
        assert_eq!(name.stem(), "model.go");
        assert_eq!(name.extension(), ".go");
        assert_eq!(name.table_output("orders"), "orders.go");
    }

    #[test]
    fn test_template_name_without_inner_extension() {
        let name = TemplateName::new("README.tpl");
        assert_eq!(name.single_output(), "README");
        assert_eq!(name.extension(), "");
        assert_eq!(name.table_output("users"), "users");
    }

    #[test]
    fn test_template_name_without_extension() {
        let name = TemplateName::new("Makefile");
        assert_eq!(name.stem(), "Makefile");
        assert_eq!(name.table_output("users"), "users");
    }

    #[test]
    fn test_dotfile_keeps_its_name() {
        assert_eq!(TemplateName::new(".tpl").single_output(), ".tpl");
    }

    #[test]
    fn test_protobuf_plan_overrides_strategy() {
        let plan = Plan::for_template(PROTOBUF_TEMPLATE, Strategy::MultiFile);
        assert_eq!(plan.strategy, Strategy::SingleFile);
        assert!(!plan.format);

        let plan = Plan::for_template("entity.go.tpl", Strategy::MultiFile);
        assert_eq!(plan.strategy, Strategy::MultiFile);
        assert!(plan.format);
    }
}
