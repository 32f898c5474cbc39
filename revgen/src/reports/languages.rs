use super::{Output, Report};

pub struct LanguageInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub formatter: Option<&'static str>,
    pub helpers: Vec<&'static str>,
}

/// Report for the languages command.
pub struct LanguagesReport {
    pub languages: Vec<LanguageInfo>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, language) in self.languages.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(language.name);
            if !language.aliases.is_empty() {
                out.list_item(&format!("aliases: {}", language.aliases.join(", ")));
            }
            out.list_item(&format!("formatter: {}", language.formatter.unwrap_or("none")));
            out.list_item(&format!("helpers: {}", language.helpers.join(", ")));
        }
    }
}
