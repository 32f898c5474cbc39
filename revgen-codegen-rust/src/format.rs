//! Formatting with `syn` and `prettyplease`.

use revgen_codegen::FormatError;

/// Parse `source` as a Rust file and pretty-print it.
///
/// Anything `syn` cannot parse fails the output file.
pub fn format_rust(source: &str) -> Result<String, FormatError> {
    let file = syn::parse_file(source).map_err(|e| FormatError::new(e.to_string()))?;
    Ok(prettyplease::unparse(&file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rust() {
        let out = format_rust("pub struct Users{pub id:i64,pub name:String}").unwrap();
        insta::assert_snapshot!(out, @r"
        pub struct Users {
            pub id: i64,
            pub name: String,
        }
        ");
    }

    #[test]
    fn test_format_rust_is_idempotent() {
        let source = "use chrono::NaiveDateTime;\n#[derive(Debug,Clone)]\npub struct Orders{pub id:i64,\npub created_at:Option<NaiveDateTime>}";
        let once = format_rust(source).unwrap();
        assert_ne!(once, source);
        assert_eq!(format_rust(&once).unwrap(), once);
    }

    #[test]
    fn test_format_rust_rejects_invalid_source() {
        assert!(format_rust("pub struct order items {}").is_err());
    }
}
