//! Pagination footer: entry summary, page-number window, page-size menu.

use leptos::prelude::*;

use crate::shared::page_config::{dispatch, PageConfig, PageConfigPatch, PageSize};

pub fn total_pages(total: u64, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    total.div_ceil(count as u64) as u32
}

/// Up to 3 page-number buttons centered on the current page, clamped to
/// `[1, total_pages]`.
pub fn page_window(page: u32, total_pages: u32) -> Vec<u32> {
    const MAX_VISIBLE: u32 = 3;
    if total_pages == 0 {
        return Vec::new();
    }
    // The current page can sit past the end when the total shrinks under
    // the user; clamp before windowing.
    let page = page.min(total_pages);
    let mut start = page.saturating_sub(MAX_VISIBLE / 2).max(1);
    let end = (start + MAX_VISIBLE - 1).min(total_pages);
    if end - start < MAX_VISIBLE - 1 {
        start = end.saturating_sub(MAX_VISIBLE - 1).max(1);
    }
    (start..=end).collect()
}

#[component]
pub fn TablePagination(
    #[prop(into)] total: Signal<u64>,
    config: RwSignal<PageConfig>,
) -> impl IntoView {
    let page = move || config.get().page;
    let count = move || config.get().count.as_u32();
    let pages = move || total_pages(total.get(), count());

    let summary = move || {
        let from = (page() - 1) * count() + 1;
        let to = (page() as u64 * count() as u64).min(total.get());
        format!("Showing {} to {} of {} entries", from, to, total.get())
    };

    view! {
        // Zero rows hides the whole control, not just the page buttons.
        <Show when=move || { total.get() > 0 }>
            <div class="pagination">
                <div class="pagination__summary">{summary}</div>
                <div class="pagination__controls">
                    <button
                        class="pagination__btn"
                        disabled=move || page() <= 1
                        on:click=move |_| {
                            let current = config.get_untracked().page;
                            dispatch(config, PageConfigPatch::Page(current - 1));
                        }
                    >
                        "\u{2039}"
                    </button>
                    {move || {
                        page_window(page(), pages())
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <button
                                        class=move || {
                                            if page() == p {
                                                "pagination__btn pagination__btn--active"
                                            } else {
                                                "pagination__btn"
                                            }
                                        }
                                        on:click=move |_| dispatch(config, PageConfigPatch::Page(p))
                                    >
                                        {p}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="pagination__btn"
                        disabled=move || page() >= pages()
                        on:click=move |_| {
                            let current = config.get_untracked().page;
                            dispatch(config, PageConfigPatch::Page(current + 1));
                        }
                    >
                        "\u{203a}"
                    </button>
                    <select
                        class="pagination__size"
                        prop:value=move || count().to_string()
                        on:change=move |ev| {
                            let selected = event_target_value(&ev);
                            if let Some(size) = PageSize::ALL
                                .into_iter()
                                .find(|s| s.as_u32().to_string() == selected)
                            {
                                dispatch(config, PageConfigPatch::Count(size));
                            }
                        }
                    >
                        {PageSize::ALL
                            .into_iter()
                            .map(|size| {
                                let n = size.as_u32();
                                view! {
                                    <option value=n.to_string() selected=move || count() == n>
                                        {format!("{} / page", n)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(101, 20), 6);
    }

    #[test]
    fn window_stays_inside_bounds() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3]);
        assert_eq!(page_window(5, 10), vec![4, 5, 6]);
        assert_eq!(page_window(10, 10), vec![8, 9, 10]);
        for page in 1..=30 {
            for total in 1..=30 {
                for p in page_window(page, total) {
                    assert!((1..=total).contains(&p));
                }
            }
        }
    }

    #[test]
    fn window_shrinks_with_few_pages() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 2), vec![1, 2]);
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
    }

    #[test]
    fn window_clamps_page_past_shrunken_total() {
        assert_eq!(page_window(3, 1), vec![1]);
        assert_eq!(page_window(10, 4), vec![2, 3, 4]);
    }
}
