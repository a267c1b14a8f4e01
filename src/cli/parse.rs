use marginalia_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a hashtag argument, accepting an optional leading `#`
pub fn parse_tag(s: &str) -> std::result::Result<String, String> {
    let tag = s.trim().trim_start_matches('#');
    if tag.is_empty() {
        return Err("hashtag cannot be empty".to_string());
    }
    if tag.contains(|c: char| c.is_whitespace() || c == ',' || c == '%') {
        return Err(format!(
            "hashtag cannot contain whitespace, ',' or '%': {}",
            s
        ));
    }
    Ok(tag.to_string())
}
