// src/bot/messages.rs
//! Fixed reply texts shown to LINE users.

pub const JOB_EVENTS_HEADER: &str = "以下是近期10場最新徵才活動：";
pub const JOB_EVENTS_UNAVAILABLE: &str = "抱歉，目前無法提供徵才活動資訊。";

pub const SERVICE_LOCATIONS_HEADER: &str = "以下是新北市就業服務據點：";
pub const SERVICE_LOCATIONS_UNAVAILABLE: &str = "目前無法取得服務據點資訊。";

pub const DEFAULT_PROMPT: &str = "請點擊下方服務快捷鍵取得所需資訊！";

pub const HR_AWARENESS_IMAGE_URL: &str = "https://example.com/image.jpg";
pub const HR_AWARENESS_PREVIEW_URL: &str = "https://example.com/image.jpg";

/// Text sent back when delivering a reply itself failed.
pub fn send_error(error: &impl std::fmt::Display) -> String {
    format!("發生錯誤：{}", error)
}
