// src/scraping/format.rs
use super::ListingEntry;
use super::selectors::MAX_ENTRIES;

/// Number entries 1-based as `"{n}. {name}\n詳細資訊：{url}"`, at most ten.
pub fn format_entries(entries: &[ListingEntry]) -> Vec<String> {
    entries
        .iter()
        .take(MAX_ENTRIES)
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}. {}\n詳細資訊：{}",
                idx + 1,
                entry.display_name,
                entry.detail_url
            )
        })
        .collect()
}

/// Header line followed by the formatted entries separated by blank lines.
/// `None` when there is nothing to list.
pub fn compose_reply(header: &str, entries: &[ListingEntry]) -> Option<String> {
    let formatted = format_entries(entries);
    if formatted.is_empty() {
        return None;
    }
    Some(format!("{}\n{}", header, formatted.join("\n\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entries_numbering() {
        let entries = vec![
            ListingEntry::new("板橋就業服務站", "https://ilabor.ntpc.gov.tw/branch/1"),
            ListingEntry::new("三重就業服務站", "https://ilabor.ntpc.gov.tw/branch/2"),
        ];
        let formatted = format_entries(&entries);
        assert_eq!(
            formatted,
            vec![
                "1. 板橋就業服務站\n詳細資訊：https://ilabor.ntpc.gov.tw/branch/1".to_string(),
                "2. 三重就業服務站\n詳細資訊：https://ilabor.ntpc.gov.tw/branch/2".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_entries_caps_at_ten() {
        let entries: Vec<_> = (0..15)
            .map(|i| ListingEntry::new(format!("活動 {}", i), format!("https://x.tw/{}", i)))
            .collect();
        let formatted = format_entries(&entries);
        assert_eq!(formatted.len(), 10);
        assert!(formatted[9].starts_with("10. 活動 9\n"));
    }

    #[test]
    fn test_compose_reply() {
        let entries = vec![
            ListingEntry::new("A", "https://x.tw/a"),
            ListingEntry::new("B", "https://x.tw/b"),
        ];
        assert_eq!(
            compose_reply("標題：", &entries).unwrap(),
            "標題：\n1. A\n詳細資訊：https://x.tw/a\n\n2. B\n詳細資訊：https://x.tw/b"
        );
        assert_eq!(compose_reply("標題：", &[]), None);
    }
}
