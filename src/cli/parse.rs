use docsim_core::classify::VoteMode;
use docsim_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse vote mode from string
pub fn parse_vote_mode(s: &str) -> std::result::Result<VoteMode, String> {
    s.parse::<VoteMode>().map_err(|e| e.to_string())
}

/// Parse a positive link count
pub fn parse_top_k(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("top-k must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid top-k '{}': {}", s, e)),
    }
}
