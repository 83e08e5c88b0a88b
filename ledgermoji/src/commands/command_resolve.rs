use categorymoji::emoji::{Category, resolve_emoji_match};

/// Resolve a single category given on the command line
pub fn run(name: Option<String>, category_type: Option<String>) -> Vec<String> {
    let category = Category {
        name,
        category_type,
    };
    let resolved = resolve_emoji_match(&category);
    log::debug!("Resolved {:?} by {:?}", category, resolved.source);
    vec![resolved.emoji.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_command() {
        assert_eq!(
            run(Some("Salary".to_string()), Some("EXPENSES".to_string())),
            vec!["💰"]
        );
        assert_eq!(run(None, Some("ASSETS".to_string())), vec!["🏦"]);
        assert_eq!(run(None, None), vec!["📝"]);
    }
}
