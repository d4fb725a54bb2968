pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn format_score(score: f32) -> String {
    format!("{:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_character_only() {
        assert_eq!(capitalize("missing hole"), "Missing hole");
        assert_eq!(capitalize("short"), "Short");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn formats_score_as_percentage() {
        assert_eq!(format_score(0.5), "50.00%");
        assert_eq!(format_score(0.9271), "92.71%");
        assert_eq!(format_score(1.0), "100.00%");
    }
}
