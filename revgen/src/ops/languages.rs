//! List the registered language bindings.

use revgen_codegen::BindingOptions;

use crate::{
    language::LanguageSupport,
    reports::{LanguageInfo, LanguagesReport},
};

pub fn languages() -> LanguagesReport {
    let options = BindingOptions::default();
    let languages = LanguageSupport::all()
        .map(|support| LanguageInfo {
            name: support.language().as_str(),
            aliases: support.aliases,
            formatter: support.formatter,
            helpers: support.binding().helpers(&options).names().collect(),
        })
        .collect();

    LanguagesReport { languages }
}
