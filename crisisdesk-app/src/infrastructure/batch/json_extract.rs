use serde::Deserialize;

/// Wire shape of one batch verdict. Fields default individually so a reply
/// missing one key still yields a usable row.
#[derive(Debug, Clone, Deserialize)]
pub struct RowVerdict {
    #[serde(default)]
    pub anger_score: Option<u8>,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub suggested_reply: String,
}

/// Best-effort extraction of the JSON verdict from a model reply. Models wrap
/// JSON in prose or code fences; slice from the first `{` to the last `}` and
/// let serde decide. `None` means the row gets the error sentinel.
pub fn extract_row_verdict(reply: &str) -> Option<RowVerdict> {
    let json = extract_json(reply)?;
    serde_json::from_str(json).ok()
}

fn extract_json(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&reply[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json() {
        let reply = r#"{"anger_score": 8, "risk_level": "High", "category": "Delivery", "suggested_reply": "We are sorry."}"#;
        let verdict = extract_row_verdict(reply).unwrap();
        assert_eq!(verdict.anger_score, Some(8));
        assert_eq!(verdict.risk_level, "High");
        assert_eq!(verdict.category, "Delivery");
    }

    #[test]
    fn parses_json_embedded_in_prose() {
        let reply = "Here is the analysis you asked for:\n{\"anger_score\": 3, \"risk_level\": \"Low\", \"category\": \"Billing\", \"suggested_reply\": \"Thanks for flagging this.\"}\nLet me know if you need more.";
        let verdict = extract_row_verdict(reply).unwrap();
        assert_eq!(verdict.risk_level, "Low");
    }

    #[test]
    fn parses_json_inside_code_fence() {
        let reply = "```json\n{\"anger_score\": 5, \"risk_level\": \"Medium\", \"category\": \"Support\", \"suggested_reply\": \"On it.\"}\n```";
        let verdict = extract_row_verdict(reply).unwrap();
        assert_eq!(verdict.anger_score, Some(5));
    }

    #[test]
    fn missing_fields_default() {
        let verdict = extract_row_verdict(r#"{"risk_level": "High"}"#).unwrap();
        assert_eq!(verdict.anger_score, None);
        assert_eq!(verdict.category, "");
    }

    #[test]
    fn no_json_object_yields_none() {
        assert!(extract_row_verdict("I cannot analyze this message.").is_none());
        assert!(extract_row_verdict("").is_none());
        assert!(extract_row_verdict("} backwards {").is_none());
    }

    #[test]
    fn broken_json_yields_none() {
        assert!(extract_row_verdict(r#"{"anger_score": }"#).is_none());
    }
}
