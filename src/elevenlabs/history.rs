use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of items requested from `/history` in one call. Pagination towards
/// our own callers happens locally over this set.
pub const UPSTREAM_PAGE_SIZE: usize = 100;

/// The part of the upstream `/history` response we use. Items are relayed as-is.
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Keep only items generated with `voice_id`. `None` or an empty id keeps everything.
pub fn filter_by_voice(items: Vec<Value>, voice_id: Option<&str>) -> Vec<Value> {
    match voice_id.filter(|id| !id.is_empty()) {
        Some(id) => items
            .into_iter()
            .filter(|item| item.get("voice_id").and_then(Value::as_str) == Some(id))
            .collect(),
        None => items,
    }
}

/// Slice one 1-based page out of `items`.
///
/// A page past the end is empty but still reports the real `total_pages`.
///
/// # Panics
///
/// In debug builds, if `page_size` or `page_index` is zero. Callers validate
/// both before paginating.
pub fn paginate<T>(items: Vec<T>, page_size: usize, page_index: usize) -> HistoryPage<T> {
    debug_assert!(page_size > 0 && page_index > 0);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page_index - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    let items = items.into_iter().skip(start).take(end - start).collect();

    HistoryPage {
        items,
        pagination: Pagination {
            page_index,
            page_size,
            total_items,
            total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbered(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn third_page_of_twenty_five() {
        let page = paginate(numbered(25), 10, 3);
        assert_eq!(page.items, (20..25).collect::<Vec<_>>());
        assert_eq!(
            page.pagination,
            Pagination {
                page_index: 3,
                page_size: 10,
                total_items: 25,
                total_pages: 3,
            }
        );
    }

    #[test]
    fn first_page_is_full() {
        let page = paginate(numbered(25), 10, 1);
        assert_eq!(page.items, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(numbered(25), 10, 99);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_items, 25);
        assert_eq!(page.pagination.page_index, 99);
    }

    #[test]
    fn huge_page_index_does_not_overflow() {
        let page = paginate(numbered(3), usize::MAX, usize::MAX);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn empty_history_has_zero_pages() {
        let page = paginate(Vec::<usize>::new(), 20, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        let page = paginate(numbered(20), 10, 2);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn filters_on_exact_voice_id() {
        let items = vec![
            json!({ "history_item_id": "1", "voice_id": "a" }),
            json!({ "history_item_id": "2", "voice_id": "b" }),
            json!({ "history_item_id": "3", "voice_id": "a" }),
            json!({ "history_item_id": "4", "voice_id": "A" }),
            json!({ "history_item_id": "5" }),
        ];

        let filtered = filter_by_voice(items, Some("a"));
        let ids: Vec<_> = filtered
            .iter()
            .map(|i| i["history_item_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn no_voice_id_keeps_everything() {
        let items = vec![json!({ "voice_id": "a" }), json!({ "voice_id": "b" })];
        assert_eq!(filter_by_voice(items.clone(), None).len(), 2);
        assert_eq!(filter_by_voice(items, Some("")).len(), 2);
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let page = paginate(vec![json!({ "voice_id": "a" })], 20, 1);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "items": [{ "voice_id": "a" }],
                "pagination": {
                    "pageIndex": 1,
                    "pageSize": 20,
                    "totalItems": 1,
                    "totalPages": 1
                }
            })
        );
    }
}
