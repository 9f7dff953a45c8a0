// src/bot/command.rs

pub const JOB_EVENTS_KEYWORD: &str = "@徵才活動";
pub const SERVICE_LOCATIONS_KEYWORD: &str = "@服務據點";
pub const HR_AWARENESS_KEYWORD: &str = "@人資宣導";

/// What an inbound text asks for. Keywords come from the rich-menu quick
/// replies and may appear anywhere in the text; the first one in the order
/// below wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    JobEvents,
    ServiceLocations,
    HrAwareness,
    Unknown,
}

impl Command {
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.contains(JOB_EVENTS_KEYWORD) {
            Command::JobEvents
        } else if text.contains(SERVICE_LOCATIONS_KEYWORD) {
            Command::ServiceLocations
        } else if text.contains(HR_AWARENESS_KEYWORD) {
            Command::HrAwareness
        } else {
            Command::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        assert_eq!(Command::from_text("@徵才活動"), Command::JobEvents);
        assert_eq!(Command::from_text("  @服務據點\n"), Command::ServiceLocations);
        assert_eq!(Command::from_text("請給我 @人資宣導 謝謝"), Command::HrAwareness);
        assert_eq!(Command::from_text("你好"), Command::Unknown);
        assert_eq!(Command::from_text(""), Command::Unknown);
        assert_eq!(Command::from_text("徵才活動"), Command::Unknown);
    }

    #[test]
    fn test_first_keyword_in_priority_order_wins() {
        assert_eq!(
            Command::from_text("@人資宣導 @服務據點 @徵才活動"),
            Command::JobEvents
        );
        assert_eq!(
            Command::from_text("@人資宣導 @服務據點"),
            Command::ServiceLocations
        );
    }
}
